// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use inn_domain::DomainError;
use innkeep::CoreError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The request is valid but an earlier lifecycle step has not happened.
    PreconditionFailed {
        /// The missing precondition.
        rule: String,
        /// A human-readable description.
        message: String,
    },
    /// Another writer changed the same room; the request may be retried.
    ConcurrencyConflict {
        /// A human-readable description.
        message: String,
    },
    /// The backing store could not complete the request.
    Unavailable {
        /// A description of the failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::PreconditionFailed { rule, message } => {
                write!(f, "Precondition failed ({rule}): {message}")
            }
            Self::ConcurrencyConflict { message } => {
                write!(f, "Concurrent modification: {message}")
            }
            Self::Unavailable { message } => {
                write!(f, "Service unavailable: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

fn not_found(resource_type: &str, err: &DomainError) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message: err.to_string(),
    }
}

fn invalid(field: &str, err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

fn violation(rule: &str, err: &DomainError) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: rule.to_string(),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::RoomNotFound(_) => not_found("Room", &err),
        DomainError::ReservationNotFound(_) => not_found("Reservation", &err),
        DomainError::MaintenanceTaskNotFound(_) => not_found("Maintenance task", &err),
        DomainError::GuestNotFound(_) => not_found("Guest", &err),
        DomainError::CompanyNotFound(_) => not_found("Company", &err),
        DomainError::EmptyField { field } => invalid(field, &err),
        DomainError::InvalidStayPeriod { .. } => invalid("check_out", &err),
        DomainError::InvalidGuestsCount(_) => invalid("guests_count", &err),
        DomainError::InvalidAmount(_) => invalid("amount", &err),
        DomainError::InvalidCalendarMonth { .. } => invalid("month", &err),
        DomainError::DateParseError { .. } | DomainError::DateOutOfRange => invalid("date", &err),
        DomainError::InvalidStatus { entity, .. } => {
            let field: &str = match *entity {
                "priority" => "priority",
                "movement period" => "period",
                _ => "status",
            };
            invalid(field, &err)
        }
        DomainError::CompletionDateRequired
        | DomainError::UnexpectedCompletionDate
        | DomainError::CompletionBeforeOpening { .. } => invalid("completed_on", &err),
        DomainError::SameRoom(_) => invalid("room_id", &err),
        DomainError::DuplicateRoomIdentifier(_) => violation("unique_room_identifier", &err),
        DomainError::OverlappingReservation { .. } => violation("no_overlapping_stays", &err),
        DomainError::RoomUnderMaintenance { .. } => violation("room_under_maintenance", &err),
        DomainError::RoomOccupied { .. } => violation("room_occupied", &err),
        DomainError::ReservationCancelled(_) => violation("reservation_cancelled", &err),
        DomainError::ArrivalAlreadyConfirmed(_) => violation("arrival_already_confirmed", &err),
        DomainError::DepartureAlreadyConfirmed(_) => {
            violation("departure_already_confirmed", &err)
        }
        DomainError::InvalidStatusTransition { .. } => violation("status_transition", &err),
        DomainError::RoomStatusMismatch { .. } => violation("derived_room_status", &err),
        DomainError::PartyInUse(_) => violation("party_referenced", &err),
        DomainError::ArrivalNotConfirmed(_) => ApiError::PreconditionFailed {
            rule: String::from("arrival_before_departure"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::ConcurrencyConflict { room_id } => ApiError::ConcurrencyConflict {
            message: format!("Room {room_id} was modified concurrently; retry the request"),
        },
        CoreError::Unavailable(msg) => ApiError::Unavailable { message: msg },
    }
}
