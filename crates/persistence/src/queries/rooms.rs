// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use inn_domain::{Room, RoomId};

use crate::data_models::RoomRow;
use crate::diesel_schema::rooms;
use crate::error::PersistenceError;

/// Looks up a room by id.
///
/// # Errors
///
/// Returns an error if the query fails or the row is malformed.
pub fn find_room(
    conn: &mut SqliteConnection,
    room_id: &RoomId,
) -> Result<Option<Room>, PersistenceError> {
    rooms::table
        .filter(rooms::room_id.eq(room_id.as_str()))
        .select(RoomRow::as_select())
        .first::<RoomRow>(conn)
        .optional()?
        .map(RoomRow::into_domain)
        .transpose()
}

/// Lists every room ordered by identifier.
///
/// # Errors
///
/// Returns an error if the query fails or a row is malformed.
pub fn list_rooms(conn: &mut SqliteConnection) -> Result<Vec<Room>, PersistenceError> {
    rooms::table
        .order(rooms::identifier.asc())
        .select(RoomRow::as_select())
        .load::<RoomRow>(conn)?
        .into_iter()
        .map(RoomRow::into_domain)
        .collect()
}

/// Returns the stored version of a room, if the room exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn room_version(
    conn: &mut SqliteConnection,
    room_id: &RoomId,
) -> Result<Option<i64>, PersistenceError> {
    Ok(rooms::table
        .filter(rooms::room_id.eq(room_id.as_str()))
        .select(rooms::version)
        .first::<i64>(conn)
        .optional()?)
}

/// Returns true if a room other than `room_id` uses `identifier`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn identifier_taken(
    conn: &mut SqliteConnection,
    identifier: &str,
    room_id: &RoomId,
) -> Result<bool, PersistenceError> {
    let count: i64 = rooms::table
        .filter(rooms::identifier.eq(identifier))
        .filter(rooms::room_id.ne(room_id.as_str()))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}
