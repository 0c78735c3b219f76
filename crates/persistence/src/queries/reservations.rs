// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use inn_domain::{Reservation, ReservationId, ReservationStatus, RoomId};

use crate::data_models::ReservationRow;
use crate::diesel_schema::reservations;
use crate::error::PersistenceError;

/// Looks up a reservation by id.
///
/// # Errors
///
/// Returns an error if the query fails or the row is malformed.
pub fn find_reservation(
    conn: &mut SqliteConnection,
    reservation_id: &ReservationId,
) -> Result<Option<Reservation>, PersistenceError> {
    reservations::table
        .filter(reservations::reservation_id.eq(reservation_id.as_str()))
        .select(ReservationRow::as_select())
        .first::<ReservationRow>(conn)
        .optional()?
        .map(ReservationRow::into_domain)
        .transpose()
}

/// Lists every reservation ordered by check-in date, then id.
///
/// Dates are stored as ISO text, so lexical order is calendar order.
///
/// # Errors
///
/// Returns an error if the query fails or a row is malformed.
pub fn list_reservations(
    conn: &mut SqliteConnection,
) -> Result<Vec<Reservation>, PersistenceError> {
    reservations::table
        .order((reservations::check_in.asc(), reservations::reservation_id.asc()))
        .select(ReservationRow::as_select())
        .load::<ReservationRow>(conn)?
        .into_iter()
        .map(ReservationRow::into_domain)
        .collect()
}

/// Lists the non-cancelled reservations assigned to a room, ordered by check-in.
///
/// # Errors
///
/// Returns an error if the query fails or a row is malformed.
pub fn list_live_reservations_for_room(
    conn: &mut SqliteConnection,
    room_id: &RoomId,
) -> Result<Vec<Reservation>, PersistenceError> {
    reservations::table
        .filter(reservations::room_id.eq(room_id.as_str()))
        .filter(reservations::status.ne(ReservationStatus::Cancelled.as_str()))
        .order((reservations::check_in.asc(), reservations::reservation_id.asc()))
        .select(ReservationRow::as_select())
        .load::<ReservationRow>(conn)?
        .into_iter()
        .map(ReservationRow::into_domain)
        .collect()
}
