// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use inn_audit::{Action, Actor, AuditEvent, StateSnapshot, Subject};
use inn_domain::{
    Guest, GuestId, GuestOrCompany, Reservation, ReservationId, Room, RoomId, StayPeriod,
};
use innkeep::{FixedClock, Property, RoomWrite, Store, TransitionResult};
use time::macros::{date, datetime};

use crate::SqliteStore;

pub fn create_test_store() -> SqliteStore {
    SqliteStore::new_in_memory().expect("in-memory store")
}

pub fn create_test_actor() -> Actor {
    Actor::operator("op-123")
}

pub fn create_test_event(room_id: &RoomId) -> AuditEvent {
    AuditEvent::new(
        create_test_actor(),
        Action::new(String::from("Test"), Some(String::from("test transition"))),
        Subject::room(room_id),
        StateSnapshot::absent(),
        StateSnapshot::new(String::from("after")),
    )
}

pub fn insert_room(store: &SqliteStore, id: &str, identifier: &str) -> Room {
    let room: Room = Room::new(
        RoomId::new(id),
        identifier,
        "double",
        vec![String::from("wifi"), String::from("tv")],
        Some(String::from("Street view")),
    )
    .unwrap();
    store
        .commit(
            &TransitionResult::new(create_test_event(&room.id))
                .with_room_write(RoomWrite::insert(room.clone())),
        )
        .unwrap();
    room
}

pub fn insert_guest(store: &SqliteStore, id: &str) -> Guest {
    let guest: Guest =
        Guest::new(GuestId::new(id), "Maria Silva", "123.456.789-00", None, None).unwrap();
    store
        .commit(
            &TransitionResult::new(AuditEvent::new(
                create_test_actor(),
                Action::new(String::from("RegisterGuest"), None),
                Subject::guest(&guest.id),
                StateSnapshot::absent(),
                StateSnapshot::new(String::from("after")),
            ))
            .with_guest(guest.clone()),
        )
        .unwrap();
    guest
}

/// A booking for guest `gst_1`; insert the guest before committing it.
pub fn create_test_reservation(room: &Room) -> Reservation {
    Reservation::book(
        ReservationId::new("res_1"),
        GuestOrCompany::Guest(GuestId::new("gst_1")),
        room.id.clone(),
        2,
        StayPeriod::new(date!(2025 - 10 - 10), date!(2025 - 10 - 12)).unwrap(),
        datetime!(2025-10-01 09:30 UTC),
    )
    .unwrap()
}

pub fn create_test_property() -> Property {
    Property::new(
        create_test_store(),
        FixedClock::new(datetime!(2025-10-10 12:00 UTC)),
    )
}
