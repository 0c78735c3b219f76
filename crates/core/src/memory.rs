// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::TransitionResult;
use crate::store::{Store, StoreError};
use inn_audit::AuditEvent;
use inn_domain::{
    Company, CompanyId, Expense, ExpenseId, Guest, GuestId, GuestOrCompany, Income, IncomeId,
    MaintenanceTask, Reservation, ReservationId, Room, RoomId, TaskId,
};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct MemoryState {
    rooms: BTreeMap<RoomId, Room>,
    reservations: BTreeMap<ReservationId, Reservation>,
    tasks: BTreeMap<TaskId, MaintenanceTask>,
    guests: BTreeMap<GuestId, Guest>,
    companies: BTreeMap<CompanyId, Company>,
    incomes: BTreeMap<IncomeId, Income>,
    expenses: BTreeMap<ExpenseId, Expense>,
    audit_events: Vec<AuditEvent>,
}

/// A `Store` kept entirely in process memory.
///
/// Used by tests and by the server when no database file is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>, StoreError> {
        self.state
            .read()
            .map_err(|_| StoreError::Backend(String::from("memory store lock poisoned")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>, StoreError> {
        self.state
            .write()
            .map_err(|_| StoreError::Backend(String::from("memory store lock poisoned")))
    }
}

impl MemoryState {
    fn party_exists(&self, party: &GuestOrCompany, transition: &TransitionResult) -> bool {
        if transition.removed_parties.contains(party) {
            return false;
        }
        match party {
            GuestOrCompany::Guest(id) => {
                self.guests.contains_key(id) || transition.guests.iter().any(|g| g.id == *id)
            }
            GuestOrCompany::Company(id) => {
                self.companies.contains_key(id)
                    || transition.companies.iter().any(|c| c.id == *id)
            }
        }
    }

    fn referenced(&self, party: &GuestOrCompany) -> bool {
        self.reservations.values().any(|r| r.party == *party)
    }
}

fn newest_first<T: Clone>(
    items: &BTreeMap<impl Ord, T>,
    date: impl Fn(&T) -> time::Date,
) -> Vec<T> {
    let mut values: Vec<T> = items.values().cloned().collect();
    values.sort_by_key(|v| std::cmp::Reverse(date(v)));
    values
}

fn sorted_by_name<T: Clone>(items: &BTreeMap<impl Ord, T>, name: impl Fn(&T) -> &str) -> Vec<T> {
    let mut values: Vec<T> = items.values().cloned().collect();
    values.sort_by(|a, b| name(a).cmp(name(b)));
    values
}

impl Store for MemoryStore {
    fn room(&self, id: &RoomId) -> Result<Option<Room>, StoreError> {
        Ok(self.read()?.rooms.get(id).cloned())
    }

    fn rooms(&self) -> Result<Vec<Room>, StoreError> {
        Ok(sorted_by_name(&self.read()?.rooms, |r: &Room| {
            r.identifier.as_str()
        }))
    }

    fn reservation(&self, id: &ReservationId) -> Result<Option<Reservation>, StoreError> {
        Ok(self.read()?.reservations.get(id).cloned())
    }

    fn reservations(&self) -> Result<Vec<Reservation>, StoreError> {
        let mut reservations: Vec<Reservation> =
            self.read()?.reservations.values().cloned().collect();
        reservations.sort_by(|a, b| (a.stay.check_in(), &a.id).cmp(&(b.stay.check_in(), &b.id)));
        Ok(reservations)
    }

    fn live_reservations_for_room(
        &self,
        room_id: &RoomId,
    ) -> Result<Vec<Reservation>, StoreError> {
        let mut reservations: Vec<Reservation> = self
            .read()?
            .reservations
            .values()
            .filter(|r| r.room_id == *room_id && !r.is_cancelled())
            .cloned()
            .collect();
        reservations.sort_by_key(|r| r.stay.check_in());
        Ok(reservations)
    }

    fn task(&self, id: &TaskId) -> Result<Option<MaintenanceTask>, StoreError> {
        Ok(self.read()?.tasks.get(id).cloned())
    }

    fn tasks(&self) -> Result<Vec<MaintenanceTask>, StoreError> {
        Ok(self.read()?.tasks.values().cloned().collect())
    }

    fn active_task_for_room(
        &self,
        room_id: &RoomId,
    ) -> Result<Option<MaintenanceTask>, StoreError> {
        Ok(self
            .read()?
            .tasks
            .values()
            .find(|t| t.room_id == *room_id && t.is_active())
            .cloned())
    }

    fn guest(&self, id: &GuestId) -> Result<Option<Guest>, StoreError> {
        Ok(self.read()?.guests.get(id).cloned())
    }

    fn guests(&self) -> Result<Vec<Guest>, StoreError> {
        Ok(sorted_by_name(&self.read()?.guests, |g: &Guest| {
            g.full_name.as_str()
        }))
    }

    fn company(&self, id: &CompanyId) -> Result<Option<Company>, StoreError> {
        Ok(self.read()?.companies.get(id).cloned())
    }

    fn companies(&self) -> Result<Vec<Company>, StoreError> {
        Ok(sorted_by_name(&self.read()?.companies, |c: &Company| {
            c.name.as_str()
        }))
    }

    fn incomes(&self) -> Result<Vec<Income>, StoreError> {
        Ok(newest_first(&self.read()?.incomes, |i: &Income| i.date))
    }

    fn expenses(&self) -> Result<Vec<Expense>, StoreError> {
        Ok(newest_first(&self.read()?.expenses, |e: &Expense| e.date))
    }

    fn audit_events(&self) -> Result<Vec<AuditEvent>, StoreError> {
        Ok(self.read()?.audit_events.clone())
    }

    fn commit(&self, transition: &TransitionResult) -> Result<AuditEvent, StoreError> {
        let mut state = self.write()?;

        // Validate every room write before applying anything
        for write in &transition.room_writes {
            let stored_version: Option<u64> = state.rooms.get(&write.room.id).map(|r| r.version);
            if stored_version != write.expected_version {
                return Err(StoreError::VersionConflict {
                    room_id: write.room.id.clone(),
                });
            }
            let duplicate: bool = state
                .rooms
                .values()
                .any(|r| r.id != write.room.id && r.identifier == write.room.identifier);
            if duplicate {
                return Err(StoreError::DuplicateIdentifier(
                    write.room.identifier.clone(),
                ));
            }
        }

        for reservation in &transition.reservations {
            if !state.party_exists(&reservation.party, transition) {
                return Err(StoreError::PartyMissing(reservation.party.clone()));
            }
        }
        for party in &transition.removed_parties {
            let written: bool = transition.reservations.iter().any(|r| r.party == *party);
            if written || state.referenced(party) {
                return Err(StoreError::PartyReferenced(party.clone()));
            }
        }

        for write in &transition.room_writes {
            state
                .rooms
                .insert(write.room.id.clone(), write.room.clone());
        }
        for reservation in &transition.reservations {
            state
                .reservations
                .insert(reservation.id.clone(), reservation.clone());
        }
        for task in &transition.tasks {
            state.tasks.insert(task.id.clone(), task.clone());
        }
        for guest in &transition.guests {
            state.guests.insert(guest.id.clone(), guest.clone());
        }
        for company in &transition.companies {
            state.companies.insert(company.id.clone(), company.clone());
        }
        for income in &transition.incomes {
            state.incomes.insert(income.id.clone(), income.clone());
        }
        for expense in &transition.expenses {
            state.expenses.insert(expense.id.clone(), expense.clone());
        }
        for party in &transition.removed_parties {
            match party {
                GuestOrCompany::Guest(id) => {
                    state.guests.remove(id);
                }
                GuestOrCompany::Company(id) => {
                    state.companies.remove(id);
                }
            }
        }

        let event_id: i64 = i64::try_from(state.audit_events.len())
            .map_err(|e| StoreError::Backend(e.to_string()))?
            + 1;
        let event: AuditEvent = transition.audit_event.clone().with_event_id(event_id);
        state.audit_events.push(event.clone());
        drop(state);
        Ok(event)
    }
}
