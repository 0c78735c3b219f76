// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use inn_audit::AuditEvent;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{ActionData, ActorData, StateSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

/// Persists an audit event.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `event` - The audit event to persist
///
/// # Returns
///
/// The event ID assigned by the database.
///
/// # Errors
///
/// Returns an error if persistence or serialization fails.
pub fn persist_audit_event(
    conn: &mut SqliteConnection,
    event: &AuditEvent,
) -> Result<i64, PersistenceError> {
    let actor_data: ActorData = ActorData {
        id: event.actor.id.clone(),
        actor_type: event.actor.actor_type.clone(),
    };
    let action_data: ActionData = ActionData {
        name: event.action.name.clone(),
        details: event.action.details.clone(),
    };
    let before_data: StateSnapshotData = StateSnapshotData {
        data: event.before.data.clone(),
    };
    let after_data: StateSnapshotData = StateSnapshotData {
        data: event.after.data.clone(),
    };

    diesel::insert_into(audit_events::table)
        .values((
            audit_events::actor_json.eq(serde_json::to_string(&actor_data)?),
            audit_events::action_json.eq(serde_json::to_string(&action_data)?),
            audit_events::subject_kind.eq(&event.subject.kind),
            audit_events::subject_id.eq(&event.subject.id),
            audit_events::before_snapshot_json.eq(serde_json::to_string(&before_data)?),
            audit_events::after_snapshot_json.eq(serde_json::to_string(&after_data)?),
        ))
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
