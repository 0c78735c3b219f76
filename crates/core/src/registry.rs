// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::ids;
use crate::property::Shared;
use crate::snapshot;
use crate::state::{RoomWrite, TransitionResult};
use inn_audit::{Action, Actor, AuditEvent, StateSnapshot, Subject};
use inn_domain::{
    ClaimState, DomainError, MaintenanceTask, Reservation, Room, RoomFilter, RoomId, RoomPatch,
    RoomStatus, derive_room_status,
};
use tracing::{debug, info};

/// Changes staged by an operation that has not been committed yet.
///
/// Status derivation reads the store and then overlays these, so a room's
/// status is computed from the state the commit will produce.
#[derive(Debug, Default)]
pub(crate) struct Staged<'a> {
    pub(crate) reservations: &'a [&'a Reservation],
    pub(crate) task: Option<&'a MaintenanceTask>,
}

/// Owns rooms and their status projection.
pub struct RoomRegistry<'a> {
    shared: &'a Shared,
}

impl<'a> RoomRegistry<'a> {
    pub(crate) const fn new(shared: &'a Shared) -> Self {
        Self { shared }
    }

    /// Registers a new, available room.
    ///
    /// # Arguments
    ///
    /// * `actor` - The operator performing the setup
    /// * `identifier` - Human-facing label, unique within the property
    /// * `room_type` - Room category
    /// * `amenities` - Amenity labels
    /// * `description` - Optional description
    ///
    /// # Errors
    ///
    /// Returns an error if a field is blank, the identifier is already in
    /// use, or the store fails.
    pub fn create(
        &self,
        actor: &Actor,
        identifier: &str,
        room_type: &str,
        amenities: Vec<String>,
        description: Option<String>,
    ) -> Result<Room, CoreError> {
        let room: Room = Room::new(
            ids::generate(RoomId::PREFIX),
            identifier,
            room_type,
            amenities,
            description,
        )?;

        self.ensure_identifier_free(&room)?;

        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            Action::new(
                String::from("CreateRoom"),
                Some(format!("Created room {}", room.identifier)),
            ),
            Subject::room(&room.id),
            StateSnapshot::absent(),
            snapshot::room(&room),
        );
        let transition: TransitionResult =
            TransitionResult::new(audit_event).with_room_write(RoomWrite::insert(room.clone()));
        self.shared.commit(&transition)?;

        Ok(room)
    }

    /// Returns a room.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RoomNotFound` if the room does not exist.
    pub fn get(&self, room_id: &RoomId) -> Result<Room, CoreError> {
        self.shared.load_room(room_id)
    }

    /// Lists the rooms matching `filter`, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list(&self, filter: &RoomFilter) -> Result<Vec<Room>, CoreError> {
        let mut rooms: Vec<Room> = self
            .shared
            .store
            .rooms()?
            .into_iter()
            .filter(|room| room.matches(filter))
            .collect();
        rooms.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        Ok(rooms)
    }

    /// Updates the descriptive fields of a room.
    ///
    /// A status in `patch` is accepted only if it equals the status implied
    /// by the room's current claims; the status cannot be forced.
    ///
    /// # Errors
    ///
    /// Returns an error if the room does not exist, a field is blank, the new
    /// identifier is taken, the requested status disagrees with the claims,
    /// or the store fails.
    pub fn update(
        &self,
        actor: &Actor,
        room_id: &RoomId,
        patch: &RoomPatch,
    ) -> Result<Room, CoreError> {
        self.shared.load_room(room_id)?;

        self.shared.locks.with_rooms(&[room_id], || {
            let current: Room = self.shared.load_room(room_id)?;
            let mut updated: Room = current.apply_patch(patch)?;

            let derived: RoomStatus = self.derive_status(room_id, &Staged::default())?;
            if let Some(requested) = patch.status
                && requested != derived
            {
                debug!(
                    room_id = %room_id,
                    requested = %requested,
                    derived = %derived,
                    "Rejected manual room status"
                );
                return Err(DomainError::RoomStatusMismatch {
                    room_id: room_id.clone(),
                    requested,
                    derived,
                }
                .into());
            }
            updated.status = derived;

            if updated.identifier != current.identifier {
                self.ensure_identifier_free(&updated)?;
            }

            let audit_event: AuditEvent = AuditEvent::new(
                actor.clone(),
                Action::new(String::from("UpdateRoom"), None),
                Subject::room(room_id),
                snapshot::room(&current),
                snapshot::room(&updated),
            );
            let transition: TransitionResult = TransitionResult::new(audit_event)
                .with_room_write(RoomWrite::update(&current, updated.clone()));
            self.shared.commit(&transition)?;

            Ok(updated)
        })
    }

    /// Stages an unconditional status write for the caller's commit.
    ///
    /// Callers must hold the room's lock.
    pub(crate) fn set_status(
        &self,
        room_id: &RoomId,
        status: RoomStatus,
    ) -> Result<RoomWrite, CoreError> {
        let current: Room = self.shared.load_room(room_id)?;
        if current.status != status {
            info!(
                room_id = %room_id,
                from = %current.status,
                to = %status,
                "Staged room status change"
            );
        }
        Ok(RoomWrite::update(&current, current.with_status(status)))
    }

    /// Re-derives the status of `room_id` from its claims plus `staged`
    /// changes and stages the write.
    ///
    /// Callers must hold the room's lock.
    pub(crate) fn stage_derived_status(
        &self,
        room_id: &RoomId,
        staged: &Staged<'_>,
    ) -> Result<RoomWrite, CoreError> {
        let status: RoomStatus = self.derive_status(room_id, staged)?;
        self.set_status(room_id, status)
    }

    fn derive_status(&self, room_id: &RoomId, staged: &Staged<'_>) -> Result<RoomStatus, CoreError> {
        let mut reservations: Vec<Reservation> =
            self.shared.store.live_reservations_for_room(room_id)?;
        for change in staged.reservations {
            reservations.retain(|r| r.id != change.id);
            if change.room_id == *room_id {
                reservations.push((*change).clone());
            }
        }
        let claims: Vec<ClaimState> = reservations
            .iter()
            .filter(|r| r.holds_claim())
            .map(Reservation::claim_state)
            .collect();

        let active_task: bool = match staged.task {
            Some(task) if task.room_id == *room_id => task.is_active(),
            _ => self.shared.store.active_task_for_room(room_id)?.is_some(),
        };

        Ok(derive_room_status(active_task, &claims))
    }

    fn ensure_identifier_free(&self, room: &Room) -> Result<(), CoreError> {
        let taken: bool = self
            .shared
            .store
            .rooms()?
            .iter()
            .any(|other| other.id != room.id && other.identifier == room.identifier);
        if taken {
            debug!(identifier = %room.identifier, "Rejected duplicate room identifier");
            return Err(DomainError::DuplicateRoomIdentifier(room.identifier.clone()).into());
        }
        Ok(())
    }
}
