// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::ids;
use crate::property::Shared;
use crate::registry::{RoomRegistry, Staged};
use crate::snapshot;
use crate::state::{RoomWrite, TransitionResult};
use inn_audit::{Action, Actor, AuditEvent, StateSnapshot, Subject};
use inn_domain::{
    DomainError, MaintenanceStatus, MaintenanceTask, Priority, Reservation, Room, RoomFilter,
    RoomId, RoomStatus, TaskId, TaskView, sort_for_display,
};
use time::Date;
use tracing::{debug, info};

/// Owns maintenance tasks and the maintenance claim on rooms.
pub struct MaintenanceScheduler<'a> {
    shared: &'a Shared,
}

impl<'a> MaintenanceScheduler<'a> {
    pub(crate) const fn new(shared: &'a Shared) -> Self {
        Self { shared }
    }

    const fn registry(&self) -> RoomRegistry<'a> {
        RoomRegistry::new(self.shared)
    }

    /// Opens a task and takes the room out of service.
    ///
    /// The opening date is the property-local today.
    ///
    /// # Errors
    ///
    /// Returns an error if the issue is blank, the room does not exist,
    /// already has an active task, or a guest is checked in.
    pub fn open(
        &self,
        actor: &Actor,
        room_id: &RoomId,
        issue: &str,
        priority: Priority,
    ) -> Result<MaintenanceTask, CoreError> {
        self.shared.load_room(room_id)?;

        self.shared.locks.with_rooms(&[room_id], || {
            let room: Room = self.shared.load_room(room_id)?;
            let task: MaintenanceTask = MaintenanceTask::open(
                ids::generate(TaskId::PREFIX),
                &room,
                issue,
                priority,
                self.shared.clock.today(),
            )?;

            if let Some(existing) = self.shared.store.active_task_for_room(room_id)? {
                debug!(room_id = %room_id, task_id = %existing.id, "Room already under maintenance");
                return Err(DomainError::RoomUnderMaintenance {
                    room_id: room_id.clone(),
                    task_id: existing.id,
                }
                .into());
            }
            if let Some(occupant) = self
                .shared
                .store
                .live_reservations_for_room(room_id)?
                .into_iter()
                .find(Reservation::is_in_house)
            {
                debug!(room_id = %room_id, reservation_id = %occupant.id, "Room occupied");
                return Err(DomainError::RoomOccupied {
                    room_id: room_id.clone(),
                    reservation_id: occupant.id,
                }
                .into());
            }

            let room_write: RoomWrite = self.registry().stage_derived_status(
                room_id,
                &Staged {
                    reservations: &[],
                    task: Some(&task),
                },
            )?;

            let audit_event: AuditEvent = AuditEvent::new(
                actor.clone(),
                Action::new(
                    String::from("OpenMaintenance"),
                    Some(format!("{} priority: {}", task.priority, task.issue)),
                ),
                Subject::maintenance(&task.id),
                StateSnapshot::absent(),
                snapshot::task(&task),
            );
            let transition: TransitionResult = TransitionResult::new(audit_event)
                .with_task(task.clone())
                .with_room_write(room_write);
            self.shared.commit(&transition)?;

            info!(
                task_id = %task.id,
                room_id = %room_id,
                priority = %task.priority,
                "Opened maintenance task"
            );
            Ok(task)
        })
    }

    /// Moves a task forward. Completing it releases the room.
    ///
    /// # Arguments
    ///
    /// * `actor` - The operator updating the task
    /// * `task_id` - The task to update
    /// * `target` - The new status
    /// * `completed_on` - Required when `target` is completed, rejected otherwise
    /// * `notes` - Optional notes replacing the current ones
    ///
    /// # Errors
    ///
    /// Returns an error if the task does not exist, the transition is not a
    /// forward move, or the completion date is missing, unexpected or earlier
    /// than the opening date.
    pub fn advance(
        &self,
        actor: &Actor,
        task_id: &TaskId,
        target: MaintenanceStatus,
        completed_on: Option<Date>,
        notes: Option<String>,
    ) -> Result<MaintenanceTask, CoreError> {
        let room_id: RoomId = self.get(task_id)?.room_id;

        self.shared.locks.with_rooms(&[&room_id], || {
            let current: MaintenanceTask = self.get(task_id)?;
            let updated: MaintenanceTask = current.advance(target, completed_on, notes.clone())?;

            let audit_event: AuditEvent = AuditEvent::new(
                actor.clone(),
                Action::new(
                    String::from("AdvanceMaintenance"),
                    Some(format!("{} -> {}", current.status, updated.status)),
                ),
                Subject::maintenance(task_id),
                snapshot::task(&current),
                snapshot::task(&updated),
            );
            let mut transition: TransitionResult =
                TransitionResult::new(audit_event).with_task(updated.clone());

            if !updated.is_active() {
                transition = transition.with_room_write(self.registry().stage_derived_status(
                    &room_id,
                    &Staged {
                        reservations: &[],
                        task: Some(&updated),
                    },
                )?);
            }
            self.shared.commit(&transition)?;

            info!(
                task_id = %task_id,
                room_id = %room_id,
                status = %updated.status,
                "Advanced maintenance task"
            );
            Ok(updated)
        })
    }

    /// Returns a task.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MaintenanceTaskNotFound` if it does not exist.
    pub fn get(&self, task_id: &TaskId) -> Result<MaintenanceTask, CoreError> {
        self.shared
            .store
            .task(task_id)?
            .ok_or_else(|| DomainError::MaintenanceTaskNotFound(task_id.clone()).into())
    }

    /// Lists tasks in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list(&self, view: TaskView) -> Result<Vec<MaintenanceTask>, CoreError> {
        let mut tasks: Vec<MaintenanceTask> = self
            .shared
            .store
            .tasks()?
            .into_iter()
            .filter(|t| view == TaskView::All || t.is_active())
            .collect();
        sort_for_display(&mut tasks);
        Ok(tasks)
    }

    /// Rooms a new task could be opened against: every room not already
    /// under maintenance.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn eligible_rooms(&self) -> Result<Vec<Room>, CoreError> {
        Ok(self
            .registry()
            .list(&RoomFilter::default())?
            .into_iter()
            .filter(|room| room.status != RoomStatus::Maintenance)
            .collect())
    }
}
