// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::OccupancyCalendar;
use crate::clock::Clock;
use crate::directory::GuestDirectory;
use crate::error::CoreError;
use crate::finance::FinancialLedger;
use crate::ledger::ReservationLedger;
use crate::locks::RoomLocks;
use crate::maintenance::MaintenanceScheduler;
use crate::registry::RoomRegistry;
use crate::state::TransitionResult;
use crate::store::Store;
use inn_audit::AuditEvent;
use inn_domain::{DomainError, Room, RoomId};
use std::sync::Arc;
use tracing::{error, info};

/// Everything the components share: the store, the room locks and the clock.
pub(crate) struct Shared {
    pub(crate) store: Box<dyn Store>,
    pub(crate) locks: RoomLocks,
    pub(crate) clock: Box<dyn Clock>,
}

impl Shared {
    pub(crate) fn load_room(&self, room_id: &RoomId) -> Result<Room, CoreError> {
        self.store
            .room(room_id)?
            .ok_or_else(|| CoreError::DomainViolation(DomainError::RoomNotFound(room_id.clone())))
    }

    /// Commits `transition` and logs the outcome.
    pub(crate) fn commit(&self, transition: &TransitionResult) -> Result<AuditEvent, CoreError> {
        match self.store.commit(transition) {
            Ok(event) => {
                info!(
                    event_id = event.event_id,
                    action = %event.action.name,
                    subject_kind = %event.subject.kind,
                    subject_id = %event.subject.id,
                    actor = %event.actor.id,
                    "Committed transition"
                );
                Ok(event)
            }
            Err(err) => {
                error!(
                    action = %transition.audit_event.action.name,
                    subject_id = %transition.audit_event.subject.id,
                    error = %err,
                    "Failed to commit transition"
                );
                Err(err.into())
            }
        }
    }
}

/// A single lodging property.
///
/// Cloning is cheap; clones share the same store, locks and clock, so one
/// `Property` can be handed to every request handler.
#[derive(Clone)]
pub struct Property {
    shared: Arc<Shared>,
}

impl Property {
    /// Creates a property over `store`, reading time from `clock`.
    pub fn new(store: impl Store + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            shared: Arc::new(Shared {
                store: Box::new(store),
                locks: RoomLocks::new(),
                clock: Box::new(clock),
            }),
        }
    }

    /// Room setup, lookup and status projection.
    #[must_use]
    pub fn rooms(&self) -> RoomRegistry<'_> {
        RoomRegistry::new(&self.shared)
    }

    /// Reservation lifecycle and payments.
    #[must_use]
    pub fn reservations(&self) -> ReservationLedger<'_> {
        ReservationLedger::new(&self.shared)
    }

    /// Maintenance tickets.
    #[must_use]
    pub fn maintenance(&self) -> MaintenanceScheduler<'_> {
        MaintenanceScheduler::new(&self.shared)
    }

    /// Read-only occupancy views.
    #[must_use]
    pub fn calendar(&self) -> OccupancyCalendar<'_> {
        OccupancyCalendar::new(&self.shared)
    }

    /// Guests and companies.
    #[must_use]
    pub fn directory(&self) -> GuestDirectory<'_> {
        GuestDirectory::new(&self.shared)
    }

    /// Incomes, expenses and the financial dashboard.
    #[must_use]
    pub fn finances(&self) -> FinancialLedger<'_> {
        FinancialLedger::new(&self.shared)
    }

    /// Every committed audit event, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Unavailable` if the store fails.
    pub fn audit_timeline(&self) -> Result<Vec<AuditEvent>, CoreError> {
        Ok(self.shared.store.audit_events()?)
    }
}

impl std::fmt::Debug for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property").finish_non_exhaustive()
    }
}
