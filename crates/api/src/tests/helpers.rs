// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use innkeep::{FixedClock, MemoryStore, Property};
use time::macros::datetime;

use crate::{
    CreateReservationRequest, CreateRoomRequest, GuestInfo, OperatorContext,
    RegisterGuestRequest, ReservationInfo, RoomInfo, create_reservation, create_room,
    register_guest,
};

/// A property whose "today" is 2025-10-10.
pub fn create_test_property() -> Property {
    Property::new(
        MemoryStore::new(),
        FixedClock::new(datetime!(2025-10-10 12:00 UTC)),
    )
}

pub fn create_test_operator() -> OperatorContext {
    OperatorContext::new("frontdesk-1")
}

pub fn create_room_request(identifier: &str) -> CreateRoomRequest {
    CreateRoomRequest {
        identifier: identifier.to_string(),
        room_type: String::from("double"),
        amenities: vec![String::from("wifi"), String::from("tv")],
        description: Some(String::from("Street view")),
    }
}

pub fn add_room(property: &Property, identifier: &str) -> RoomInfo {
    create_room(
        property,
        &create_room_request(identifier),
        &create_test_operator(),
    )
    .unwrap()
}

pub fn add_guest(property: &Property, full_name: &str) -> GuestInfo {
    register_guest(
        property,
        &RegisterGuestRequest {
            full_name: full_name.to_string(),
            document: String::from("123.456.789-00"),
            email: None,
            phone: None,
        },
        &create_test_operator(),
    )
    .unwrap()
}

pub fn reservation_request(
    guest: &GuestInfo,
    room: &RoomInfo,
    check_in: &str,
    check_out: &str,
) -> CreateReservationRequest {
    CreateReservationRequest {
        guest_id: Some(guest.guest_id.clone()),
        company_id: None,
        room_id: room.room_id.clone(),
        guests_count: 2,
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
    }
}

pub fn book(
    property: &Property,
    guest: &GuestInfo,
    room: &RoomInfo,
    check_in: &str,
    check_out: &str,
) -> ReservationInfo {
    create_reservation(
        property,
        &reservation_request(guest, room, check_in, check_out),
        &create_test_operator(),
    )
    .unwrap()
}
