// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use inn_audit::AuditEvent;
use inn_domain::{
    Company, Expense, Guest, GuestOrCompany, Income, MaintenanceTask, Reservation, Room,
};

/// A room write staged for commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomWrite {
    /// The new room state, version already bumped.
    pub room: Room,
    /// The version the stored room must still carry, or `None` for an insert.
    pub expected_version: Option<u64>,
}

impl RoomWrite {
    /// Stages the insertion of a new room.
    #[must_use]
    pub const fn insert(room: Room) -> Self {
        Self {
            room,
            expected_version: None,
        }
    }

    /// Stages a replacement of `previous` by `room`.
    #[must_use]
    pub const fn update(previous: &Room, room: Room) -> Self {
        Self {
            room,
            expected_version: Some(previous.version),
        }
    }
}

/// The result of a successful operation: every entity it changed plus the
/// audit event describing it.
///
/// A store commits a transition as one unit. Either every write lands
/// together with the audit event, or none of them do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub room_writes: Vec<RoomWrite>,
    /// Reservations to insert or replace.
    pub reservations: Vec<Reservation>,
    /// Maintenance tasks to insert or replace.
    pub tasks: Vec<MaintenanceTask>,
    pub guests: Vec<Guest>,
    pub companies: Vec<Company>,
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    /// Guests and companies to delete. The store refuses if any reservation
    /// still names one of them.
    pub removed_parties: Vec<GuestOrCompany>,
    /// The audit event for this transition.
    pub audit_event: AuditEvent,
}

impl TransitionResult {
    /// Creates a transition that only records `audit_event`.
    #[must_use]
    pub const fn new(audit_event: AuditEvent) -> Self {
        Self {
            room_writes: Vec::new(),
            reservations: Vec::new(),
            tasks: Vec::new(),
            guests: Vec::new(),
            companies: Vec::new(),
            incomes: Vec::new(),
            expenses: Vec::new(),
            removed_parties: Vec::new(),
            audit_event,
        }
    }

    #[must_use]
    pub fn with_room_write(mut self, write: RoomWrite) -> Self {
        self.room_writes.push(write);
        self
    }

    #[must_use]
    pub fn with_reservation(mut self, reservation: Reservation) -> Self {
        self.reservations.push(reservation);
        self
    }

    #[must_use]
    pub fn with_task(mut self, task: MaintenanceTask) -> Self {
        self.tasks.push(task);
        self
    }

    #[must_use]
    pub fn with_guest(mut self, guest: Guest) -> Self {
        self.guests.push(guest);
        self
    }

    #[must_use]
    pub fn with_company(mut self, company: Company) -> Self {
        self.companies.push(company);
        self
    }

    #[must_use]
    pub fn with_income(mut self, income: Income) -> Self {
        self.incomes.push(income);
        self
    }

    #[must_use]
    pub fn with_expense(mut self, expense: Expense) -> Self {
        self.expenses.push(expense);
        self
    }

    #[must_use]
    pub fn removing_party(mut self, party: GuestOrCompany) -> Self {
        self.removed_parties.push(party);
        self
    }
}
