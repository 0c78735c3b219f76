// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{GuestId, GuestOrCompany, Reservation, ReservationId, Room, RoomId, StayPeriod};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

pub fn create_test_room(identifier: &str) -> Room {
    Room::new(
        RoomId::new(format!("room_{identifier}")),
        identifier,
        "double",
        vec![String::from("wifi"), String::from("ar-condicionado")],
        Some(String::from("Vista para o jardim")),
    )
    .unwrap()
}

pub fn test_now() -> OffsetDateTime {
    datetime!(2025-10-10 14:00 UTC)
}

pub fn create_test_reservation(id: &str, check_in: Date, check_out: Date) -> Reservation {
    Reservation::book(
        ReservationId::new(id),
        GuestOrCompany::Guest(GuestId::new("gst_1")),
        RoomId::new("room_105"),
        2,
        StayPeriod::new(check_in, check_out).unwrap(),
        test_now(),
    )
    .unwrap()
}

pub fn create_default_reservation() -> Reservation {
    create_test_reservation("res_1", date!(2025 - 10 - 10), date!(2025 - 10 - 12))
}
