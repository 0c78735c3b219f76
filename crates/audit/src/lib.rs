// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use inn_domain::{CompanyId, ExpenseId, GuestId, IncomeId, ReservationId, RoomId, TaskId};

/// Represents the entity performing an action.
///
/// An actor is whoever initiated a state change: a front-desk operator
/// identified by the authentication layer, or the system itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "operator", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// The actor used when no operator is identified.
    #[must_use]
    pub fn system() -> Self {
        Self::new(String::from("system"), String::from("system"))
    }

    /// An operator identified by the authentication layer.
    #[must_use]
    pub fn operator(id: &str) -> Self {
        Self::new(id.to_string(), String::from("operator"))
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`CreateReservation`", "`ConfirmArrival`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The entity an action was applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// The kind of entity ("room", "reservation", "maintenance", ...).
    pub kind: String,
    /// The identifier of the entity.
    pub id: String,
}

impl Subject {
    /// Creates a new Subject.
    #[must_use]
    pub const fn new(kind: String, id: String) -> Self {
        Self { kind, id }
    }

    #[must_use]
    pub fn room(id: &RoomId) -> Self {
        Self::new(String::from("room"), id.to_string())
    }

    #[must_use]
    pub fn reservation(id: &ReservationId) -> Self {
        Self::new(String::from("reservation"), id.to_string())
    }

    #[must_use]
    pub fn maintenance(id: &TaskId) -> Self {
        Self::new(String::from("maintenance"), id.to_string())
    }

    #[must_use]
    pub fn guest(id: &GuestId) -> Self {
        Self::new(String::from("guest"), id.to_string())
    }

    #[must_use]
    pub fn company(id: &CompanyId) -> Self {
        Self::new(String::from("company"), id.to_string())
    }

    #[must_use]
    pub fn income(id: &IncomeId) -> Self {
        Self::new(String::from("income"), id.to_string())
    }

    #[must_use]
    pub fn expense(id: &ExpenseId) -> Self {
        Self::new(String::from("expense"), id.to_string())
    }
}

/// A short textual snapshot of an entity's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// The snapshot of an entity that did not exist yet.
    #[must_use]
    pub fn absent() -> Self {
        Self::new(String::from("absent"))
    }
}

/// An immutable audit event representing a state transition.
///
/// Every successful state change must produce exactly one audit event,
/// committed in the same transaction as the change. Audit events capture:
/// - Who performed the action (actor)
/// - What action was performed (action)
/// - Which entity it was applied to (subject)
/// - The state before the transition (before)
/// - The state after the transition (after)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Assigned by the store on persist; `None` until then.
    pub event_id: Option<i64>,
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The action that was performed.
    pub action: Action,
    /// The entity the action was applied to.
    pub subject: Subject,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new, not yet persisted `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `action` - The action that was performed
    /// * `subject` - The entity that changed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    #[must_use]
    pub const fn new(
        actor: Actor,
        action: Action,
        subject: Subject,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            event_id: None,
            actor,
            action,
            subject,
            before,
            after,
        }
    }

    /// Returns a copy carrying the identifier assigned by the store.
    #[must_use]
    pub fn with_event_id(self, event_id: i64) -> Self {
        Self {
            event_id: Some(event_id),
            ..self
        }
    }
}
