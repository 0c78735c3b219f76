// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::TransitionResult;
use inn_audit::AuditEvent;
use inn_domain::{
    Company, CompanyId, Expense, Guest, GuestId, GuestOrCompany, Income, MaintenanceTask,
    Reservation, ReservationId, Room, RoomId, TaskId,
};
use thiserror::Error;

/// Failures reported by a `Store`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A staged room write expected a version the store no longer holds.
    #[error("room {room_id} was modified by another writer")]
    VersionConflict { room_id: RoomId },
    /// A staged room reuses the identifier of another room.
    #[error("room identifier '{0}' is already in use")]
    DuplicateIdentifier(String),
    /// A party slated for removal is still referenced by a reservation.
    #[error("{} {} is still referenced by reservations", .0.kind(), .0.id_str())]
    PartyReferenced(GuestOrCompany),
    /// A reservation write names a party that does not exist.
    #[error("{} {} does not exist", .0.kind(), .0.id_str())]
    PartyMissing(GuestOrCompany),
    /// The backend failed.
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Durable state of the property.
///
/// Reads return owned snapshots. `commit` applies a whole
/// `TransitionResult` atomically: room writes are compare-and-set on the
/// room version, and the audit event is stored in the same unit of work.
pub trait Store: Send + Sync {
    /// Looks up a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn room(&self, id: &RoomId) -> Result<Option<Room>, StoreError>;

    /// All rooms, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn rooms(&self) -> Result<Vec<Room>, StoreError>;

    /// Looks up a reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn reservation(&self, id: &ReservationId) -> Result<Option<Reservation>, StoreError>;

    /// All reservations, ordered by check-in then id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn reservations(&self) -> Result<Vec<Reservation>, StoreError>;

    /// Non-cancelled reservations assigned to `room_id`, ordered by check-in.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn live_reservations_for_room(&self, room_id: &RoomId)
    -> Result<Vec<Reservation>, StoreError>;

    /// Looks up a maintenance task.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn task(&self, id: &TaskId) -> Result<Option<MaintenanceTask>, StoreError>;

    /// All maintenance tasks, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn tasks(&self) -> Result<Vec<MaintenanceTask>, StoreError>;

    /// The non-completed task on `room_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn active_task_for_room(&self, room_id: &RoomId)
    -> Result<Option<MaintenanceTask>, StoreError>;

    /// Looks up a guest.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn guest(&self, id: &GuestId) -> Result<Option<Guest>, StoreError>;

    /// All guests, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn guests(&self) -> Result<Vec<Guest>, StoreError>;

    /// Looks up a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn company(&self, id: &CompanyId) -> Result<Option<Company>, StoreError>;

    /// All companies, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn companies(&self) -> Result<Vec<Company>, StoreError>;

    /// Manually recorded incomes, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn incomes(&self) -> Result<Vec<Income>, StoreError>;

    /// Recorded expenses, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn expenses(&self) -> Result<Vec<Expense>, StoreError>;

    /// The audit timeline, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn audit_events(&self) -> Result<Vec<AuditEvent>, StoreError>;

    /// Applies every write of `transition` atomically.
    ///
    /// Returns the stored audit event carrying its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::VersionConflict` if a room changed since it was
    /// read, `StoreError::DuplicateIdentifier` if a room identifier collides,
    /// `StoreError::PartyMissing` if a reservation names an unknown party,
    /// `StoreError::PartyReferenced` if a removed party still has
    /// reservations, or `StoreError::Backend` if the backend fails. Nothing is
    /// written on error.
    fn commit(&self, transition: &TransitionResult) -> Result<AuditEvent, StoreError>;
}
