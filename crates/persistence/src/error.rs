// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use innkeep::StoreError;
use inn_domain::{GuestOrCompany, RoomId};

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// A stored row could not be turned back into a domain value.
    ReconstructionError(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// A room write expected a version the database no longer holds.
    VersionConflict { room_id: RoomId },
    /// A room identifier collided with the unique index.
    DuplicateIdentifier(String),
    /// A reservation names a guest or company that does not exist.
    PartyMissing(GuestOrCompany),
    /// A guest or company slated for removal is still referenced.
    PartyReferenced(GuestOrCompany),
    /// The connection lock was poisoned by a panicking writer.
    ConnectionPoisoned,
    /// The requested resource was not found.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::ReconstructionError(msg) => write!(f, "Row reconstruction error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::VersionConflict { room_id } => {
                write!(f, "Room {room_id} was modified by another writer")
            }
            Self::DuplicateIdentifier(identifier) => {
                write!(f, "Room identifier '{identifier}' is already in use")
            }
            Self::PartyMissing(party) => {
                write!(f, "{} {} does not exist", party.kind(), party.id_str())
            }
            Self::PartyReferenced(party) => write!(
                f,
                "{} {} is still referenced by reservations",
                party.kind(),
                party.id_str()
            ),
            Self::ConnectionPoisoned => write!(f, "Database connection lock is poisoned"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::VersionConflict { room_id } => Self::VersionConflict { room_id },
            PersistenceError::DuplicateIdentifier(identifier) => {
                Self::DuplicateIdentifier(identifier)
            }
            PersistenceError::PartyMissing(party) => Self::PartyMissing(party),
            PersistenceError::PartyReferenced(party) => Self::PartyReferenced(party),
            other => Self::Backend(other.to_string()),
        }
    }
}
