// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::StoreError;
use inn_domain::{DomainError, ErrorKind, GuestOrCompany, RoomId};

/// Errors that can occur during coordinator operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Another writer changed the room first.
    ConcurrencyConflict {
        /// The contested room.
        room_id: RoomId,
    },
    /// The backing store could not complete the operation.
    Unavailable(String),
}

impl CoreError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DomainViolation(err) => err.kind(),
            Self::ConcurrencyConflict { .. } => ErrorKind::ConcurrencyConflict,
            Self::Unavailable(_) => ErrorKind::Unavailable,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ConcurrencyConflict { room_id } => {
                write!(f, "Room {room_id} was modified concurrently; retry the operation")
            }
            Self::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::VersionConflict { room_id } => Self::ConcurrencyConflict { room_id },
            StoreError::DuplicateIdentifier(identifier) => {
                Self::DomainViolation(DomainError::DuplicateRoomIdentifier(identifier))
            }
            StoreError::PartyReferenced(party) => {
                Self::DomainViolation(DomainError::PartyInUse(party))
            }
            StoreError::PartyMissing(GuestOrCompany::Guest(id)) => {
                Self::DomainViolation(DomainError::GuestNotFound(id))
            }
            StoreError::PartyMissing(GuestOrCompany::Company(id)) => {
                Self::DomainViolation(DomainError::CompanyNotFound(id))
            }
            StoreError::Backend(msg) => Self::Unavailable(msg),
        }
    }
}
