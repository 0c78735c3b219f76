// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    book, create_test_actor, create_test_guest, create_test_property, create_test_room,
    room_status,
};
use crate::{CoreError, Property};
use inn_domain::{
    Amount, CompanyId, DomainError, ErrorKind, GuestId, GuestOrCompany, PaymentStatus,
    Reservation, ReservationCounters, ReservationId, ReservationStatus, Room, RoomId, RoomStatus,
    StageStatus,
};
use time::macros::date;

#[test]
fn test_stay_lifecycle_moves_room_through_statuses() {
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
    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    assert_eq!(room_status(&property, &room), RoomStatus::Reserved);

    let arrived: Reservation = property
        .reservations()
        .confirm_arrival(&create_test_actor(), &reservation.id)
        .unwrap();
    assert_eq!(arrived.check_in_status, StageStatus::Concluded);
    assert!(arrived.checked_in_at.is_some());
    assert_eq!(room_status(&property, &room), RoomStatus::Occupied);

    let departed: Reservation = property
        .reservations()
        .confirm_departure(&create_test_actor(), &reservation.id)
        .unwrap();
    assert_eq!(departed.check_out_status, StageStatus::Concluded);
    assert!(departed.checked_out_at.is_some());
    assert_eq!(room_status(&property, &room), RoomStatus::Available);
}

#[test]
fn test_departure_keeps_room_reserved_for_a_later_booking() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");
    let guest: GuestOrCompany = create_test_guest(&property);

    let first: Reservation = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap();
    book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 20),
        date!(2025 - 10 - 22),
    )
    .unwrap();

    property
        .reservations()
        .confirm_arrival(&create_test_actor(), &first.id)
        .unwrap();
    assert_eq!(room_status(&property, &room), RoomStatus::Occupied);

    property
        .reservations()
        .confirm_departure(&create_test_actor(), &first.id)
        .unwrap();
    assert_eq!(room_status(&property, &room), RoomStatus::Reserved);
}

#[test]
fn test_create_validates_inputs_before_lookups() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");
    let guest: GuestOrCompany = create_test_guest(&property);

    let err: CoreError = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 12),
        date!(2025 - 10 - 12),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err: CoreError = property
        .reservations()
        .create(
            &create_test_actor(),
            &guest,
            &room.id,
            0,
            date!(2025 - 10 - 10),
            date!(2025 - 10 - 12),
        )
        .unwrap_err();
    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::InvalidGuestsCount(0))
    );
}

#[test]
fn test_create_requires_existing_party_and_room() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");
    let guest: GuestOrCompany = create_test_guest(&property);

    let unknown_guest: GuestOrCompany = GuestOrCompany::Guest(GuestId::new("gst_missing"));
    let err: CoreError = book(
        &property,
        &room,
        &unknown_guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let unknown_company: GuestOrCompany = GuestOrCompany::Company(CompanyId::new("cmp_missing"));
    let err: CoreError = book(
        &property,
        &room,
        &unknown_company,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err: CoreError = property
        .reservations()
        .create(
            &create_test_actor(),
            &guest,
            &RoomId::new("room_missing"),
            1,
            date!(2025 - 10 - 10),
            date!(2025 - 10 - 12),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::RoomNotFound(_))
    ));
}

#[test]
fn test_overlapping_create_is_conflict_but_back_to_back_is_allowed() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");
    let guest: GuestOrCompany = create_test_guest(&property);

    let first: Reservation = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap();

    let err: CoreError = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 11),
        date!(2025 - 10 - 13),
    )
    .unwrap_err();
    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::OverlappingReservation {
            room_id: room.id.clone(),
            existing: first.id,
        })
    );

    let next: Result<Reservation, CoreError> = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 12),
        date!(2025 - 10 - 14),
    );
    assert!(next.is_ok());
}

#[test]
fn test_cancelled_reservation_frees_the_dates() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");
    let guest: GuestOrCompany = create_test_guest(&property);

    let first: Reservation = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap();
    property
        .reservations()
        .cancel(&create_test_actor(), &first.id)
        .unwrap();
    assert_eq!(room_status(&property, &room), RoomStatus::Available);

    let again: Result<Reservation, CoreError> = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    );
    assert!(again.is_ok());
    assert_eq!(room_status(&property, &room), RoomStatus::Reserved);
}

#[test]
fn test_departure_before_arrival_is_precondition_failure() {
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

    let err: CoreError = property
        .reservations()
        .confirm_departure(&create_test_actor(), &reservation.id)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PreconditionFailed);
    assert_eq!(room_status(&property, &room), RoomStatus::Reserved);
}

#[test]
fn test_arrival_rejected_while_another_guest_is_in_house() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");
    let guest: GuestOrCompany = create_test_guest(&property);
    let ledger = property.reservations();

    let first: Reservation = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 08),
        date!(2025 - 10 - 10),
    )
    .unwrap();
    let second: Reservation = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap();

    ledger.confirm_arrival(&create_test_actor(), &first.id).unwrap();
    let err: CoreError = ledger
        .confirm_arrival(&create_test_actor(), &second.id)
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::RoomOccupied { .. })
    ));

    ledger.confirm_departure(&create_test_actor(), &first.id).unwrap();
    // The second booking still holds the room
    assert_eq!(room_status(&property, &room), RoomStatus::Reserved);

    ledger.confirm_arrival(&create_test_actor(), &second.id).unwrap();
    assert_eq!(room_status(&property, &room), RoomStatus::Occupied);
}

#[test]
fn test_payment_then_cancel() {
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

    let paid: Reservation = property
        .reservations()
        .register_payment(
            &create_test_actor(),
            &reservation.id,
            "Cartão",
            Amount::parse("450.00").unwrap(),
        )
        .unwrap();
    assert_eq!(paid.payment_status, PaymentStatus::Confirmed);
    assert_eq!(paid.payment_method.as_deref(), Some("Cartão"));
    assert_eq!(paid.total_amount.cents(), 45_000);
    // Payment leaves the room alone
    assert_eq!(room_status(&property, &room), RoomStatus::Reserved);

    let cancelled: Reservation = property
        .reservations()
        .cancel(&create_test_actor(), &reservation.id)
        .unwrap();
    assert_eq!(cancelled.payment_status, PaymentStatus::Cancelled);
    assert!(cancelled.total_amount.is_zero());
    assert!(cancelled.payment_method.is_none());
}

#[test]
fn test_cancel_twice_is_a_no_op() {
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

    let first: Reservation = property
        .reservations()
        .cancel(&create_test_actor(), &reservation.id)
        .unwrap();
    let events_after_first: usize = property.audit_timeline().unwrap().len();

    let second: Reservation = property
        .reservations()
        .cancel(&create_test_actor(), &reservation.id)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(property.audit_timeline().unwrap().len(), events_after_first);
    assert_eq!(room_status(&property, &room), RoomStatus::Available);
}

#[test]
fn test_cancel_in_house_reservation_releases_room() {
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
        .confirm_arrival(&create_test_actor(), &reservation.id)
        .unwrap();

    property
        .reservations()
        .cancel(&create_test_actor(), &reservation.id)
        .unwrap();

    assert_eq!(room_status(&property, &room), RoomStatus::Available);
}

#[test]
fn test_change_room_moves_the_claim() {
    let property: Property = create_test_property();
    let old_room: Room = create_test_room(&property, "105");
    let new_room: Room = create_test_room(&property, "106");
    let guest: GuestOrCompany = create_test_guest(&property);
    let reservation: Reservation = book(
        &property,
        &old_room,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap();
    property
        .reservations()
        .confirm_arrival(&create_test_actor(), &reservation.id)
        .unwrap();

    let moved: Reservation = property
        .reservations()
        .change_room(&create_test_actor(), &reservation.id, &new_room.id)
        .unwrap();

    assert_eq!(moved.room_id, new_room.id);
    assert_eq!(room_status(&property, &old_room), RoomStatus::Available);
    assert_eq!(room_status(&property, &new_room), RoomStatus::Occupied);
}

#[test]
fn test_change_room_rejections() {
    let property: Property = create_test_property();
    let room_a: Room = create_test_room(&property, "105");
    let room_b: Room = create_test_room(&property, "106");
    let guest: GuestOrCompany = create_test_guest(&property);
    let moving: Reservation = book(
        &property,
        &room_a,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap();
    book(
        &property,
        &room_b,
        &guest,
        date!(2025 - 10 - 11),
        date!(2025 - 10 - 15),
    )
    .unwrap();
    let ledger = property.reservations();

    let same: CoreError = ledger
        .change_room(&create_test_actor(), &moving.id, &room_a.id)
        .unwrap_err();
    assert_eq!(same.kind(), ErrorKind::InvalidArgument);

    let overlap: CoreError = ledger
        .change_room(&create_test_actor(), &moving.id, &room_b.id)
        .unwrap_err();
    assert_eq!(overlap.kind(), ErrorKind::Conflict);

    let missing: CoreError = ledger
        .change_room(&create_test_actor(), &moving.id, &RoomId::new("room_missing"))
        .unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::NotFound);

    // Nothing moved
    assert_eq!(ledger.get(&moving.id).unwrap().room_id, room_a.id);
    assert_eq!(room_status(&property, &room_a), RoomStatus::Reserved);
}

#[test]
fn test_unknown_reservation_is_not_found() {
    let property: Property = create_test_property();
    let missing: ReservationId = ReservationId::new("res_missing");

    let err: CoreError = property
        .reservations()
        .confirm_arrival(&create_test_actor(), &missing)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        property.reservations().get(&missing).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_list_and_counters() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");
    let guest: GuestOrCompany = create_test_guest(&property);
    let later: Reservation = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 20),
        date!(2025 - 10 - 22),
    )
    .unwrap();
    let earlier: Reservation = book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap();
    property
        .reservations()
        .confirm_arrival(&create_test_actor(), &earlier.id)
        .unwrap();
    property
        .reservations()
        .cancel(&create_test_actor(), &later.id)
        .unwrap();

    let listed: Vec<ReservationId> = property
        .reservations()
        .list()
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(listed, vec![earlier.id, later.id]);

    let counters: ReservationCounters = property.reservations().counters().unwrap();
    assert_eq!(counters.confirmed, 1);
    assert_eq!(counters.cancelled, 1);
    assert_eq!(counters.in_house, 1);
}

#[test]
fn test_every_mutation_is_audited() {
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
        .confirm_arrival(&create_test_actor(), &reservation.id)
        .unwrap();

    let actions: Vec<String> = property
        .audit_timeline()
        .unwrap()
        .into_iter()
        .map(|e| e.action.name)
        .collect();
    assert_eq!(
        actions,
        vec!["CreateRoom", "RegisterGuest", "CreateReservation", "ConfirmArrival"]
    );

    let last = property.audit_timeline().unwrap().pop().unwrap();
    assert_eq!(last.event_id, Some(4));
    assert_eq!(last.actor.id, "op-123");
    assert_eq!(last.subject.id, reservation.id.to_string());
}
