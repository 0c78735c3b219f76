// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, CreateRoomRequest, ListRoomsRequest, ListRoomsResponse, RoomInfo,
    UpdateRoomRequest, create_room, get_room, list_rooms, update_room,
};

use super::helpers::{
    add_guest, add_room, book, create_room_request, create_test_operator, create_test_property,
};

#[test]
fn test_create_room_starts_available() {
    let property = create_test_property();

    let room: RoomInfo = add_room(&property, "105");

    assert_eq!(room.identifier, "105");
    assert_eq!(room.room_type, "double");
    assert_eq!(room.status, "available");
    assert_eq!(room.amenities, vec!["tv", "wifi"]);
    assert!(room.room_id.starts_with("room_"));
}

#[test]
fn test_create_room_rejects_blank_identifier() {
    let property = create_test_property();
    let request: CreateRoomRequest = create_room_request("   ");

    let result = create_room(&property, &request, &create_test_operator());

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "identifier"
    ));
}

#[test]
fn test_create_room_rejects_duplicate_identifier() {
    let property = create_test_property();
    add_room(&property, "105");

    let result = create_room(
        &property,
        &create_room_request("105"),
        &create_test_operator(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "unique_room_identifier"
    ));
}

#[test]
fn test_get_unknown_room_is_not_found() {
    let property = create_test_property();

    let result = get_room(&property, "room_missing");

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Room"
    ));
}

#[test]
fn test_list_rooms_filters_by_status_and_search() {
    let property = create_test_property();
    let guest = add_guest(&property, "Maria Silva");
    let booked: RoomInfo = add_room(&property, "105");
    add_room(&property, "201");
    book(&property, &guest, &booked, "2025-10-10", "2025-10-12");

    let reserved: ListRoomsResponse = list_rooms(
        &property,
        &ListRoomsRequest {
            status: Some(String::from("reserved")),
            ..ListRoomsRequest::default()
        },
    )
    .unwrap();
    assert_eq!(reserved.rooms.len(), 1);
    assert_eq!(reserved.rooms[0].identifier, "105");

    let searched: ListRoomsResponse = list_rooms(
        &property,
        &ListRoomsRequest {
            search: Some(String::from("20")),
            ..ListRoomsRequest::default()
        },
    )
    .unwrap();
    assert_eq!(searched.rooms.len(), 1);
    assert_eq!(searched.rooms[0].identifier, "201");
}

#[test]
fn test_list_rooms_accepts_legacy_status_label() {
    let property = create_test_property();
    add_room(&property, "105");

    let response: ListRoomsResponse = list_rooms(
        &property,
        &ListRoomsRequest {
            status: Some(String::from("Disponível")),
            ..ListRoomsRequest::default()
        },
    )
    .unwrap();

    assert_eq!(response.rooms.len(), 1);
}

#[test]
fn test_list_rooms_rejects_unknown_status() {
    let property = create_test_property();

    let result = list_rooms(
        &property,
        &ListRoomsRequest {
            status: Some(String::from("flooded")),
            ..ListRoomsRequest::default()
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "status"
    ));
}

#[test]
fn test_update_room_changes_descriptive_fields() {
    let property = create_test_property();
    let room: RoomInfo = add_room(&property, "105");

    let updated: RoomInfo = update_room(
        &property,
        &room.room_id,
        &UpdateRoomRequest {
            identifier: Some(String::from("105A")),
            amenities: Some(vec![String::from("minibar")]),
            ..UpdateRoomRequest::default()
        },
        &create_test_operator(),
    )
    .unwrap();

    assert_eq!(updated.identifier, "105A");
    assert_eq!(updated.amenities, vec!["minibar"]);
    assert_eq!(updated.status, "available");
}

#[test]
fn test_update_room_rejects_forced_status() {
    let property = create_test_property();
    let room: RoomInfo = add_room(&property, "105");

    let result = update_room(
        &property,
        &room.room_id,
        &UpdateRoomRequest {
            status: Some(String::from("occupied")),
            ..UpdateRoomRequest::default()
        },
        &create_test_operator(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "derived_room_status"
    ));
    assert_eq!(get_room(&property, &room.room_id).unwrap().status, "available");
}
