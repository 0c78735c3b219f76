// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    book, create_test_actor, create_test_guest, create_test_property, create_test_room,
};
use crate::{CoreError, Dashboard, MovementEntry, Movements, Property};
use inn_domain::{
    CalendarDay, CompanyId, ErrorKind, GuestOrCompany, MovementKind, MovementPeriod, Priority,
    Reservation, Room,
};
use time::macros::date;

#[test]
fn test_month_counts_cover_nights_only() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");
    let guest: GuestOrCompany = create_test_guest(&property);
    book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 13),
    )
    .unwrap();

    let days: Vec<CalendarDay> = property.calendar().get_month(2025, 10).unwrap();

    assert_eq!(days.len(), 31);
    let counts: Vec<u32> = days[8..14].iter().map(|d| d.reservation_count).collect();
    // Days 9 through 14
    assert_eq!(counts, vec![0, 1, 1, 1, 0, 0]);
}

#[test]
fn test_invalid_month_is_invalid_argument() {
    let property: Property = create_test_property();

    let err: CoreError = property.calendar().get_month(2025, 13).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_day_movements_resolve_names() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");
    let guest: GuestOrCompany = create_test_guest(&property);
    let company = property
        .directory()
        .register_company(
            &create_test_actor(),
            "Acme Ltda",
            "12.345.678/0001-00",
            Some(String::from("João")),
            None,
            None,
        )
        .unwrap();
    let other_room: Room = create_test_room(&property, "106");

    let arriving: Reservation = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap();
    let leaving: Reservation = book(
        &property,
        &other_room,
        &GuestOrCompany::Company(company.id),
        date!(2025 - 10 - 08),
        date!(2025 - 10 - 10),
    )
    .unwrap();

    let movements: Movements = property
        .calendar()
        .get_day_movements(date!(2025 - 10 - 10))
        .unwrap();

    assert_eq!(movements.checkins.len(), 1);
    let checkin: &MovementEntry = &movements.checkins[0];
    assert_eq!(checkin.reservation_id, arriving.id);
    assert_eq!(checkin.kind, MovementKind::CheckIn);
    assert_eq!(checkin.party_name, "Maria Silva");
    assert_eq!(checkin.room_identifier, "105");
    assert_eq!(checkin.guests_count, 2);

    assert_eq!(movements.checkouts.len(), 1);
    assert_eq!(movements.checkouts[0].reservation_id, leaving.id);
    assert_eq!(movements.checkouts[0].party_name, "Acme Ltda");
    assert_eq!(movements.checkouts[0].room_identifier, "106");
}

#[test]
fn test_cancelled_reservations_do_not_move() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");
    let guest: GuestOrCompany = create_test_guest(&property);
    let reservation: Reservation = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap();
    property
        .reservations()
        .cancel(&create_test_actor(), &reservation.id)
        .unwrap();

    let movements: Movements = property
        .calendar()
        .get_day_movements(date!(2025 - 10 - 10))
        .unwrap();
    assert!(movements.checkins.is_empty());

    let days: Vec<CalendarDay> = property.calendar().get_month(2025, 10).unwrap();
    assert!(days.iter().all(|d| d.reservation_count == 0));
}

#[test]
fn test_week_movements_use_monday_to_sunday() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");
    let guest: GuestOrCompany = create_test_guest(&property);
    // The test clock is Friday 2025-10-10; the week is 10-06 to 10-12
    book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 06),
        date!(2025 - 10 - 08),
    )
    .unwrap();
    book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 12),
        date!(2025 - 10 - 14),
    )
    .unwrap();
    book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 14),
        date!(2025 - 10 - 15),
    )
    .unwrap();

    let week: Movements = property.calendar().movements(MovementPeriod::Week).unwrap();
    assert_eq!(week.first, date!(2025 - 10 - 06));
    assert_eq!(week.last, date!(2025 - 10 - 12));
    assert_eq!(week.checkins.len(), 2);
    assert_eq!(week.checkouts.len(), 1);

    let month: Movements = property.calendar().movements(MovementPeriod::Month).unwrap();
    assert_eq!(month.checkins.len(), 3);
    assert_eq!(month.checkouts.len(), 3);

    let today: Movements = property.calendar().movements(MovementPeriod::Today).unwrap();
    assert!(today.checkins.is_empty());
}

#[test]
fn test_dashboard_summarizes_today() {
    let property: Property = create_test_property();
    let guest: GuestOrCompany = create_test_guest(&property);
    let r101: Room = create_test_room(&property, "101");
    let r102: Room = create_test_room(&property, "102");
    let r103: Room = create_test_room(&property, "103");
    create_test_room(&property, "104");

    let in_house: Reservation = book(
        &property,
        &r101,
        &guest,
        date!(2025 - 10 - 09),
        date!(2025 - 10 - 10),
    )
    .unwrap();
    property
        .reservations()
        .confirm_arrival(&create_test_actor(), &in_house.id)
        .unwrap();
    book(
        &property,
        &r102,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 11),
    )
    .unwrap();
    property
        .maintenance()
        .open(&create_test_actor(), &r103.id, "Pintura", Priority::Low)
        .unwrap();

    let dashboard: Dashboard = property.calendar().dashboard().unwrap();

    assert_eq!(dashboard.date, date!(2025 - 10 - 10));
    assert!((dashboard.occupancy_rate - 25.0).abs() < f64::EPSILON);
    assert_eq!(dashboard.pending_checkins, 1);
    assert_eq!(dashboard.pending_checkouts, 1);
    assert_eq!(dashboard.maintenance_rooms, 1);
    assert_eq!(dashboard.rooms.total, 4);
    assert_eq!(dashboard.rooms.reserved, 1);
    assert_eq!(dashboard.rooms.available, 1);
    assert_eq!(dashboard.movements.checkins.len(), 1);
    assert_eq!(dashboard.movements.checkouts.len(), 1);
}

#[test]
fn test_display_name_of_unknown_company_is_not_found() {
    let property: Property = create_test_property();
    let missing: GuestOrCompany = GuestOrCompany::Company(CompanyId::new("cmp_missing"));
    assert_eq!(
        property
            .directory()
            .display_name(&missing)
            .unwrap_err()
            .kind(),
        ErrorKind::NotFound
    );
}
