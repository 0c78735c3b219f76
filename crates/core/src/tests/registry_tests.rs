// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    book, create_test_actor, create_test_guest, create_test_property, create_test_room,
};
use crate::{CoreError, Property};
use inn_domain::{
    DomainError, ErrorKind, GuestOrCompany, Room, RoomFilter, RoomId, RoomPatch, RoomStatus,
};
use time::macros::date;

#[test]
fn test_create_room_is_available() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");

    assert!(room.id.as_str().starts_with("room_"));
    assert_eq!(room.status, RoomStatus::Available);
    assert_eq!(property.rooms().get(&room.id).unwrap(), room);
}

#[test]
fn test_duplicate_identifier_is_conflict() {
    let property: Property = create_test_property();
    create_test_room(&property, "105");

    let err: CoreError = property
        .rooms()
        .create(&create_test_actor(), "105", "suite", Vec::new(), None)
        .unwrap_err();
    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::DuplicateRoomIdentifier(String::from("105")))
    );
}

#[test]
fn test_get_unknown_room_is_not_found() {
    let property: Property = create_test_property();
    let err: CoreError = property
        .rooms()
        .get(&RoomId::new("room_missing"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_list_filters_and_orders_by_identifier() {
    let property: Property = create_test_property();
    let guest: GuestOrCompany = create_test_guest(&property);
    let r201: Room = create_test_room(&property, "201");
    create_test_room(&property, "101");
    property
        .rooms()
        .create(
            &create_test_actor(),
            "301",
            "suite",
            vec![String::from("banheira")],
            Some(String::from("Suite master")),
        )
        .unwrap();
    book(
        &property,
        &r201,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap();

    let all: Vec<String> = property
        .rooms()
        .list(&RoomFilter::default())
        .unwrap()
        .into_iter()
        .map(|r| r.identifier)
        .collect();
    assert_eq!(all, vec!["101", "201", "301"]);

    let reserved: Vec<Room> = property
        .rooms()
        .list(&RoomFilter {
            status: Some(RoomStatus::Reserved),
            ..RoomFilter::default()
        })
        .unwrap();
    assert_eq!(reserved.len(), 1);
    assert_eq!(reserved[0].identifier, "201");

    let searched: Vec<Room> = property
        .rooms()
        .list(&RoomFilter {
            search_text: Some(String::from("BANHEIRA")),
            ..RoomFilter::default()
        })
        .unwrap();
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].identifier, "301");
}

#[test]
fn test_update_changes_descriptive_fields() {
    let property: Property = create_test_property();
    let room: Room = create_test_room(&property, "105");

    let updated: Room = property
        .rooms()
        .update(
            &create_test_actor(),
            &room.id,
            &RoomPatch {
                room_type: Some(String::from("suite")),
                description: Some(String::from("Reformado")),
                status: Some(RoomStatus::Available),
                ..RoomPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.room_type, "suite");
    assert_eq!(updated.description.as_deref(), Some("Reformado"));
    assert_eq!(updated.version, room.version + 1);
    assert_eq!(property.rooms().get(&room.id).unwrap(), updated);
}

#[test]
fn test_update_cannot_force_status() {
    let property: Property = create_test_property();
    let guest: GuestOrCompany = create_test_guest(&property);
    let room: Room = create_test_room(&property, "105");
    book(
        &property,
        &room,
        &guest,
        date!(2025 - 10 - 10),
        date!(2025 - 10 - 12),
    )
    .unwrap();

    let err: CoreError = property
        .rooms()
        .update(
            &create_test_actor(),
            &room.id,
            &RoomPatch {
                status: Some(RoomStatus::Available),
                ..RoomPatch::default()
            },
        )
        .unwrap_err();

    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::RoomStatusMismatch {
            room_id: room.id.clone(),
            requested: RoomStatus::Available,
            derived: RoomStatus::Reserved,
        })
    );
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[test]
fn test_update_to_taken_identifier_is_conflict() {
    let property: Property = create_test_property();
    create_test_room(&property, "105");
    let other: Room = create_test_room(&property, "106");

    let err: CoreError = property
        .rooms()
        .update(
            &create_test_actor(),
            &other.id,
            &RoomPatch {
                identifier: Some(String::from("105")),
                ..RoomPatch::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}
