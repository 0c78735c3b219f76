// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use inn_domain::{MaintenanceStatus, MaintenanceTask, RoomId, TaskId};

use crate::data_models::MaintenanceTaskRow;
use crate::diesel_schema::maintenance_tasks;
use crate::error::PersistenceError;

/// Looks up a maintenance task by id.
///
/// # Errors
///
/// Returns an error if the query fails or the row is malformed.
pub fn find_task(
    conn: &mut SqliteConnection,
    task_id: &TaskId,
) -> Result<Option<MaintenanceTask>, PersistenceError> {
    maintenance_tasks::table
        .filter(maintenance_tasks::task_id.eq(task_id.as_str()))
        .select(MaintenanceTaskRow::as_select())
        .first::<MaintenanceTaskRow>(conn)
        .optional()?
        .map(MaintenanceTaskRow::into_domain)
        .transpose()
}

/// Lists every maintenance task.
///
/// # Errors
///
/// Returns an error if the query fails or a row is malformed.
pub fn list_tasks(conn: &mut SqliteConnection) -> Result<Vec<MaintenanceTask>, PersistenceError> {
    maintenance_tasks::table
        .order(maintenance_tasks::task_id.asc())
        .select(MaintenanceTaskRow::as_select())
        .load::<MaintenanceTaskRow>(conn)?
        .into_iter()
        .map(MaintenanceTaskRow::into_domain)
        .collect()
}

/// Finds the task holding `room_id` out of service, if any.
///
/// # Errors
///
/// Returns an error if the query fails or the row is malformed.
pub fn find_active_task_for_room(
    conn: &mut SqliteConnection,
    room_id: &RoomId,
) -> Result<Option<MaintenanceTask>, PersistenceError> {
    maintenance_tasks::table
        .filter(maintenance_tasks::room_id.eq(room_id.as_str()))
        .filter(maintenance_tasks::status.ne(MaintenanceStatus::Completed.as_str()))
        .select(MaintenanceTaskRow::as_select())
        .first::<MaintenanceTaskRow>(conn)
        .optional()?
        .map(MaintenanceTaskRow::into_domain)
        .transpose()
}
