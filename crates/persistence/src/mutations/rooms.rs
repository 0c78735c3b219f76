// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room writes.
//!
//! Rooms are the only rows written with optimistic concurrency: every
//! update names the version it was derived from and fails if the stored row
//! has moved on.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::SqliteConnection;
use innkeep::RoomWrite;
use num_traits::ToPrimitive;
use tracing::debug;

use crate::data_models::RoomRow;
use crate::diesel_schema::rooms;
use crate::error::PersistenceError;
use crate::queries::rooms::{identifier_taken, room_version};

/// Applies one staged room write.
///
/// # Arguments
///
/// * `conn` - The active database connection, inside a transaction
/// * `write` - The staged write
///
/// # Errors
///
/// Returns `PersistenceError::VersionConflict` if the stored version differs
/// from the expected one (or the row exists for an insert),
/// `PersistenceError::DuplicateIdentifier` if another room uses the
/// identifier, or a database error.
pub fn apply_room_write(
    conn: &mut SqliteConnection,
    write: &RoomWrite,
) -> Result<(), PersistenceError> {
    let room_id = &write.room.id;
    let stored_version: Option<i64> = room_version(conn, room_id)?;
    let expected_version: Option<i64> = write
        .expected_version
        .map(|v| {
            v.to_i64().ok_or_else(|| {
                PersistenceError::SerializationError(format!("room version {v} out of range"))
            })
        })
        .transpose()?;

    if stored_version != expected_version {
        debug!(
            room_id = %room_id,
            ?stored_version,
            ?expected_version,
            "Room version mismatch"
        );
        return Err(PersistenceError::VersionConflict {
            room_id: room_id.clone(),
        });
    }

    if identifier_taken(conn, &write.room.identifier, room_id)? {
        return Err(PersistenceError::DuplicateIdentifier(
            write.room.identifier.clone(),
        ));
    }

    let row: RoomRow = RoomRow::from_domain(&write.room)?;
    let result: Result<usize, DieselError> = match expected_version {
        None => diesel::insert_into(rooms::table).values(&row).execute(conn),
        Some(expected) => diesel::update(
            rooms::table
                .filter(rooms::room_id.eq(room_id.as_str()))
                .filter(rooms::version.eq(expected)),
        )
        .set(&row)
        .execute(conn),
    };

    match result {
        Ok(0) => Err(PersistenceError::VersionConflict {
            room_id: room_id.clone(),
        }),
        Ok(_) => Ok(()),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => Err(
            PersistenceError::DuplicateIdentifier(write.room.identifier.clone()),
        ),
        Err(e) => Err(e.into()),
    }
}
