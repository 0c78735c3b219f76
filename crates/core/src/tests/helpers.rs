// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, FixedClock, MemoryStore, Property};
use inn_audit::Actor;
use inn_domain::{GuestOrCompany, Reservation, Room, RoomStatus};
use time::Date;
use time::macros::datetime;

/// The property clock used by every test: 2025-10-10, midday UTC.
pub fn create_test_clock() -> FixedClock {
    FixedClock::new(datetime!(2025-10-10 12:00 UTC))
}

pub fn create_test_property() -> Property {
    Property::new(MemoryStore::new(), create_test_clock())
}

pub fn create_test_actor() -> Actor {
    Actor::operator("op-123")
}

pub fn create_test_room(property: &Property, identifier: &str) -> Room {
    property
        .rooms()
        .create(
            &create_test_actor(),
            identifier,
            "double",
            vec![String::from("wifi")],
            None,
        )
        .unwrap()
}

pub fn create_test_guest(property: &Property) -> GuestOrCompany {
    let guest = property
        .directory()
        .register_guest(
            &create_test_actor(),
            "Maria Silva",
            "123.456.789-00",
            Some(String::from("maria@example.com")),
            None,
        )
        .unwrap();
    GuestOrCompany::Guest(guest.id)
}

pub fn book(
    property: &Property,
    room: &Room,
    party: &GuestOrCompany,
    check_in: Date,
    check_out: Date,
) -> Result<Reservation, CoreError> {
    property.reservations().create(
        &create_test_actor(),
        party,
        &room.id,
        2,
        check_in,
        check_out,
    )
}

pub fn room_status(property: &Property, room: &Room) -> RoomStatus {
    property.rooms().get(&room.id).unwrap().status
}
