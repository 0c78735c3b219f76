// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use inn_audit::AuditEvent;
use innkeep::TransitionResult;
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::mutations::audit::persist_audit_event;
use crate::mutations::records::{
    delete_party, insert_expense, insert_income, upsert_company, upsert_guest, upsert_reservation,
    upsert_task,
};
use crate::queries::parties::{count_reservations_for_party, party_exists};
use crate::mutations::rooms::apply_room_write;

/// Persists every write of a transition result in one database transaction.
///
/// Room writes go first so a version conflict aborts before anything else
/// is touched. Parties go before reservations that may reference them, and
/// every reservation's party must exist once they are written. Party
/// removals run last and are refused while any reservation names the party.
///
/// # Returns
///
/// The audit event carrying the id assigned by the database.
///
/// # Errors
///
/// Returns an error if any write fails; the transaction is rolled back.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<AuditEvent, PersistenceError> {
    conn.transaction::<AuditEvent, PersistenceError, _>(|conn| {
        for write in &result.room_writes {
            apply_room_write(conn, write)?;
        }
        for guest in &result.guests {
            upsert_guest(conn, guest)?;
        }
        for company in &result.companies {
            upsert_company(conn, company)?;
        }
        for reservation in &result.reservations {
            if !party_exists(conn, &reservation.party)? {
                return Err(PersistenceError::PartyMissing(reservation.party.clone()));
            }
            upsert_reservation(conn, reservation)?;
        }
        for task in &result.tasks {
            upsert_task(conn, task)?;
        }
        for income in &result.incomes {
            insert_income(conn, income)?;
        }
        for expense in &result.expenses {
            insert_expense(conn, expense)?;
        }
        for party in &result.removed_parties {
            if count_reservations_for_party(conn, party)? > 0 {
                return Err(PersistenceError::PartyReferenced(party.clone()));
            }
            delete_party(conn, party)?;
        }

        let event_id: i64 = persist_audit_event(conn, &result.audit_event)?;
        debug!(event_id, "Persisted audit event");

        info!(
            event_id,
            room_writes = result.room_writes.len(),
            reservations = result.reservations.len(),
            tasks = result.tasks.len(),
            "Persisted transition"
        );
        Ok(result.audit_event.clone().with_event_id(event_id))
    })
}
