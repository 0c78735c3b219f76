// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{MemoryStore, RoomWrite, Store, StoreError, TransitionResult};
use inn_audit::{Action, Actor, AuditEvent, StateSnapshot, Subject};
use inn_domain::{
    Guest, GuestId, GuestOrCompany, Reservation, ReservationId, Room, RoomId, RoomStatus,
    StayPeriod,
};
use time::macros::{date, datetime};

fn create_test_event(room_id: &RoomId) -> AuditEvent {
    AuditEvent::new(
        Actor::system(),
        Action::new(String::from("Test"), None),
        Subject::room(room_id),
        StateSnapshot::absent(),
        StateSnapshot::absent(),
    )
}

fn insert_room(store: &MemoryStore, id: &str, identifier: &str) -> Room {
    let room: Room = Room::new(RoomId::new(id), identifier, "double", Vec::new(), None).unwrap();
    store
        .commit(
            &TransitionResult::new(create_test_event(&room.id))
                .with_room_write(RoomWrite::insert(room.clone())),
        )
        .unwrap();
    room
}

#[test]
fn test_stale_version_is_rejected_and_nothing_is_written() {
    let store: MemoryStore = MemoryStore::new();
    let room: Room = insert_room(&store, "room_1", "105");
    let other: Room = insert_room(&store, "room_2", "106");

    // First writer wins
    store
        .commit(
            &TransitionResult::new(create_test_event(&room.id)).with_room_write(
                RoomWrite::update(&room, room.with_status(RoomStatus::Reserved)),
            ),
        )
        .unwrap();

    // Second writer read the same version
    let stale = TransitionResult::new(create_test_event(&room.id))
        .with_room_write(RoomWrite::update(
            &other,
            other.with_status(RoomStatus::Maintenance),
        ))
        .with_room_write(RoomWrite::update(
            &room,
            room.with_status(RoomStatus::Occupied),
        ));
    let err: StoreError = store.commit(&stale).unwrap_err();

    assert_eq!(
        err,
        StoreError::VersionConflict {
            room_id: room.id.clone()
        }
    );
    assert_eq!(
        store.room(&other.id).unwrap().unwrap().status,
        RoomStatus::Available
    );
    assert_eq!(
        store.room(&room.id).unwrap().unwrap().status,
        RoomStatus::Reserved
    );
    assert_eq!(store.audit_events().unwrap().len(), 3);
}

#[test]
fn test_duplicate_identifier_is_rejected() {
    let store: MemoryStore = MemoryStore::new();
    insert_room(&store, "room_1", "105");

    let clash: Room = Room::new(RoomId::new("room_2"), "105", "double", Vec::new(), None).unwrap();
    let err: StoreError = store
        .commit(
            &TransitionResult::new(create_test_event(&clash.id))
                .with_room_write(RoomWrite::insert(clash)),
        )
        .unwrap_err();

    assert_eq!(err, StoreError::DuplicateIdentifier(String::from("105")));
}

#[test]
fn test_insert_over_existing_room_is_conflict() {
    let store: MemoryStore = MemoryStore::new();
    let room: Room = insert_room(&store, "room_1", "105");

    let err: StoreError = store
        .commit(
            &TransitionResult::new(create_test_event(&room.id))
                .with_room_write(RoomWrite::insert(room.clone())),
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::VersionConflict { .. }));
}

#[test]
fn test_audit_ids_are_sequential() {
    let store: MemoryStore = MemoryStore::new();
    insert_room(&store, "room_1", "101");
    insert_room(&store, "room_2", "102");

    let ids: Vec<Option<i64>> = store
        .audit_events()
        .unwrap()
        .into_iter()
        .map(|e| e.event_id)
        .collect();
    assert_eq!(ids, vec![Some(1), Some(2)]);
}

fn create_test_booking(id: &str, guest_id: &str) -> Reservation {
    Reservation::book(
        ReservationId::new(id),
        GuestOrCompany::Guest(GuestId::new(guest_id)),
        RoomId::new("room_1"),
        2,
        StayPeriod::new(date!(2025 - 10 - 10), date!(2025 - 10 - 12)).unwrap(),
        datetime!(2025-10-10 12:00 UTC),
    )
    .unwrap()
}

#[test]
fn test_reservation_for_unknown_party_is_rejected() {
    let store: MemoryStore = MemoryStore::new();
    let room: Room = insert_room(&store, "room_1", "105");

    let err: StoreError = store
        .commit(
            &TransitionResult::new(create_test_event(&room.id))
                .with_reservation(create_test_booking("res_1", "gst_missing")),
        )
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::PartyMissing(GuestOrCompany::Guest(GuestId::new("gst_missing")))
    );
    assert!(store.reservations().unwrap().is_empty());
}

#[test]
fn test_guest_and_booking_in_one_transition_is_accepted() {
    let store: MemoryStore = MemoryStore::new();
    let room: Room = insert_room(&store, "room_1", "105");
    let guest: Guest = Guest::new(GuestId::new("gst_1"), "Ana", "1", None, None).unwrap();

    store
        .commit(
            &TransitionResult::new(create_test_event(&room.id))
                .with_guest(guest)
                .with_reservation(create_test_booking("res_1", "gst_1")),
        )
        .unwrap();

    assert_eq!(store.reservations().unwrap().len(), 1);
}

#[test]
fn test_removing_referenced_party_is_rejected() {
    let store: MemoryStore = MemoryStore::new();
    let room: Room = insert_room(&store, "room_1", "105");
    let guest: Guest = Guest::new(GuestId::new("gst_1"), "Ana", "1", None, None).unwrap();
    let party: GuestOrCompany = GuestOrCompany::Guest(guest.id.clone());
    store
        .commit(
            &TransitionResult::new(create_test_event(&room.id))
                .with_guest(guest)
                .with_reservation(create_test_booking("res_1", "gst_1")),
        )
        .unwrap();

    let err: StoreError = store
        .commit(&TransitionResult::new(create_test_event(&room.id)).removing_party(party.clone()))
        .unwrap_err();

    assert_eq!(err, StoreError::PartyReferenced(party));
    assert!(store.guest(&GuestId::new("gst_1")).unwrap().is_some());
    assert_eq!(store.audit_events().unwrap().len(), 2);
}
