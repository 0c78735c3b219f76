// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit timeline queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use inn_audit::{Action, Actor, AuditEvent, StateSnapshot, Subject};

use crate::data_models::{ActionData, ActorData, StateSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

/// Diesel Queryable struct for full audit event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = audit_events)]
struct AuditEventRow {
    event_id: i64,
    actor_json: String,
    action_json: String,
    subject_kind: String,
    subject_id: String,
    before_snapshot_json: String,
    after_snapshot_json: String,
    #[allow(dead_code)]
    created_at: Option<String>,
}

impl AuditEventRow {
    fn into_event(self) -> Result<AuditEvent, PersistenceError> {
        let actor_data: ActorData = serde_json::from_str(&self.actor_json)?;
        let action_data: ActionData = serde_json::from_str(&self.action_json)?;
        let before_data: StateSnapshotData = serde_json::from_str(&self.before_snapshot_json)?;
        let after_data: StateSnapshotData = serde_json::from_str(&self.after_snapshot_json)?;

        Ok(AuditEvent::new(
            Actor::new(actor_data.id, actor_data.actor_type),
            Action::new(action_data.name, action_data.details),
            Subject::new(self.subject_kind, self.subject_id),
            StateSnapshot::new(before_data.data),
            StateSnapshot::new(after_data.data),
        )
        .with_event_id(self.event_id))
    }
}

/// Retrieves the full audit timeline, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or an event cannot be deserialized.
pub fn get_audit_timeline(conn: &mut SqliteConnection) -> Result<Vec<AuditEvent>, PersistenceError> {
    audit_events::table
        .order(audit_events::event_id.asc())
        .select(AuditEventRow::as_select())
        .load::<AuditEventRow>(conn)?
        .into_iter()
        .map(AuditEventRow::into_event)
        .collect()
}
