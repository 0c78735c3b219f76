// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::{CompanyId, GuestId, ReservationId, RoomId, TaskId};
use crate::reservation::GuestOrCompany;
use crate::room::RoomStatus;
use serde::{Deserialize, Serialize};
use time::Date;

/// Classification of every error the coordinator can report.
///
/// Callers use the kind to tell "your request is invalid" apart from
/// "try again later".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The referenced entity does not exist.
    NotFound,
    /// The request carried malformed or out-of-range input.
    InvalidArgument,
    /// The request collides with an existing claim or a terminal state.
    Conflict,
    /// The request is valid but an earlier step has not happened yet.
    PreconditionFailed,
    /// Another writer changed the room first; the caller should retry.
    ConcurrencyConflict,
    /// The backing store failed.
    Unavailable,
}

impl ErrorKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidArgument => "invalid_argument",
            Self::Conflict => "conflict",
            Self::PreconditionFailed => "precondition_failed",
            Self::ConcurrencyConflict => "concurrency_conflict",
            Self::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during domain validation and state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Room does not exist.
    RoomNotFound(RoomId),
    /// Reservation does not exist.
    ReservationNotFound(ReservationId),
    /// Maintenance task does not exist.
    MaintenanceTaskNotFound(TaskId),
    /// Guest does not exist.
    GuestNotFound(GuestId),
    /// Company does not exist.
    CompanyNotFound(CompanyId),
    /// A required text field is empty.
    EmptyField {
        /// The name of the field.
        field: &'static str,
    },
    /// Check-out must be strictly after check-in.
    InvalidStayPeriod {
        /// The requested check-in date.
        check_in: Date,
        /// The requested check-out date.
        check_out: Date,
    },
    /// Guest count must be at least one.
    InvalidGuestsCount(u32),
    /// Amount is negative, not finite, or zero where a positive value is required.
    InvalidAmount(String),
    /// Year/month pair does not name a calendar month.
    InvalidCalendarMonth {
        /// The requested year.
        year: i32,
        /// The requested month number.
        month: u8,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic left the supported calendar range.
    DateOutOfRange,
    /// A status label could not be parsed.
    InvalidStatus {
        /// The kind of status being parsed.
        entity: &'static str,
        /// The rejected label.
        status: String,
    },
    /// Completing a maintenance task requires a completion date.
    CompletionDateRequired,
    /// A completion date was supplied for a non-completing transition.
    UnexpectedCompletionDate,
    /// The completion date precedes the opening date.
    CompletionBeforeOpening {
        /// The date the task was opened.
        opened_at: Date,
        /// The rejected completion date.
        completed_on: Date,
    },
    /// The reservation is already assigned to the requested room.
    SameRoom(RoomId),
    /// Another room already uses this identifier.
    DuplicateRoomIdentifier(String),
    /// The room already has a non-cancelled reservation covering part of the stay.
    OverlappingReservation {
        /// The contested room.
        room_id: RoomId,
        /// The reservation holding the overlapping claim.
        existing: ReservationId,
    },
    /// The room has an active maintenance task.
    RoomUnderMaintenance {
        /// The room under maintenance.
        room_id: RoomId,
        /// The active task.
        task_id: TaskId,
    },
    /// The room is occupied by a checked-in guest.
    RoomOccupied {
        /// The occupied room.
        room_id: RoomId,
        /// The reservation currently in house.
        reservation_id: ReservationId,
    },
    /// The reservation is cancelled; no further transitions are permitted.
    ReservationCancelled(ReservationId),
    /// Arrival has already been confirmed.
    ArrivalAlreadyConfirmed(ReservationId),
    /// Departure has already been confirmed.
    DepartureAlreadyConfirmed(ReservationId),
    /// Departure cannot be confirmed before arrival.
    ArrivalNotConfirmed(ReservationId),
    /// A status transition is not permitted by the lifecycle rules.
    InvalidStatusTransition {
        /// The kind of entity.
        entity: &'static str,
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
    /// A guest or company is still referenced by reservations.
    PartyInUse(GuestOrCompany),
    /// A manual room status disagrees with the status implied by its claims.
    RoomStatusMismatch {
        /// The room being updated.
        room_id: RoomId,
        /// The requested status.
        requested: RoomStatus,
        /// The status implied by current claims.
        derived: RoomStatus,
    },
}

impl DomainError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::RoomNotFound(_)
            | Self::ReservationNotFound(_)
            | Self::MaintenanceTaskNotFound(_)
            | Self::GuestNotFound(_)
            | Self::CompanyNotFound(_) => ErrorKind::NotFound,
            Self::EmptyField { .. }
            | Self::InvalidStayPeriod { .. }
            | Self::InvalidGuestsCount(_)
            | Self::InvalidAmount(_)
            | Self::InvalidCalendarMonth { .. }
            | Self::DateParseError { .. }
            | Self::DateOutOfRange
            | Self::InvalidStatus { .. }
            | Self::CompletionDateRequired
            | Self::UnexpectedCompletionDate
            | Self::CompletionBeforeOpening { .. }
            | Self::SameRoom(_) => ErrorKind::InvalidArgument,
            Self::DuplicateRoomIdentifier(_)
            | Self::OverlappingReservation { .. }
            | Self::RoomUnderMaintenance { .. }
            | Self::RoomOccupied { .. }
            | Self::ReservationCancelled(_)
            | Self::ArrivalAlreadyConfirmed(_)
            | Self::DepartureAlreadyConfirmed(_)
            | Self::InvalidStatusTransition { .. }
            | Self::RoomStatusMismatch { .. }
            | Self::PartyInUse(_) => ErrorKind::Conflict,
            Self::ArrivalNotConfirmed(_) => ErrorKind::PreconditionFailed,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoomNotFound(id) => write!(f, "Room {id} not found"),
            Self::ReservationNotFound(id) => write!(f, "Reservation {id} not found"),
            Self::MaintenanceTaskNotFound(id) => write!(f, "Maintenance task {id} not found"),
            Self::GuestNotFound(id) => write!(f, "Guest {id} not found"),
            Self::CompanyNotFound(id) => write!(f, "Company {id} not found"),
            Self::EmptyField { field } => write!(f, "Field '{field}' must not be empty"),
            Self::InvalidStayPeriod {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out {check_out} must be after check-in {check_in}"
                )
            }
            Self::InvalidGuestsCount(count) => {
                write!(f, "Invalid guest count: {count}. Must be at least 1")
            }
            Self::InvalidAmount(msg) => write!(f, "Invalid amount: {msg}"),
            Self::InvalidCalendarMonth { year, month } => {
                write!(f, "Invalid calendar month: {year}-{month}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateOutOfRange => write!(f, "Date is outside the supported range"),
            Self::InvalidStatus { entity, status } => {
                write!(f, "Invalid {entity} status: '{status}'")
            }
            Self::CompletionDateRequired => {
                write!(f, "A completion date is required to complete a task")
            }
            Self::UnexpectedCompletionDate => {
                write!(f, "A completion date is only accepted when completing a task")
            }
            Self::CompletionBeforeOpening {
                opened_at,
                completed_on,
            } => {
                write!(
                    f,
                    "Completion date {completed_on} is before the opening date {opened_at}"
                )
            }
            Self::SameRoom(room_id) => {
                write!(f, "Reservation is already assigned to room {room_id}")
            }
            Self::DuplicateRoomIdentifier(identifier) => {
                write!(f, "A room with identifier '{identifier}' already exists")
            }
            Self::OverlappingReservation { room_id, existing } => {
                write!(
                    f,
                    "Room {room_id} is already reserved by {existing} for overlapping dates"
                )
            }
            Self::RoomUnderMaintenance { room_id, task_id } => {
                write!(f, "Room {room_id} is under maintenance (task {task_id})")
            }
            Self::RoomOccupied {
                room_id,
                reservation_id,
            } => {
                write!(f, "Room {room_id} is occupied by reservation {reservation_id}")
            }
            Self::ReservationCancelled(id) => write!(f, "Reservation {id} is cancelled"),
            Self::ArrivalAlreadyConfirmed(id) => {
                write!(f, "Arrival for reservation {id} is already confirmed")
            }
            Self::DepartureAlreadyConfirmed(id) => {
                write!(f, "Departure for reservation {id} is already confirmed")
            }
            Self::ArrivalNotConfirmed(id) => {
                write!(
                    f,
                    "Departure for reservation {id} requires a confirmed arrival"
                )
            }
            Self::InvalidStatusTransition {
                entity,
                from,
                to,
                reason,
            } => {
                write!(
                    f,
                    "Invalid {entity} status transition from '{from}' to '{to}': {reason}"
                )
            }
            Self::PartyInUse(party) => {
                write!(
                    f,
                    "The {} {} is referenced by reservations and cannot be deleted",
                    party.kind(),
                    party.id_str()
                )
            }
            Self::RoomStatusMismatch {
                room_id,
                requested,
                derived,
            } => {
                write!(
                    f,
                    "Room {room_id} cannot be set to '{requested}': current claims imply '{derived}'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
