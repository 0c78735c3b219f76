// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Innkeep property coordinator.
//!
//! This crate provides a `SQLite`-backed implementation of `innkeep::Store`.
//! It is built on Diesel; the schema is managed with embedded migrations.
//!
//! ## Storage model
//!
//! - Rooms carry a version column. Every room write is a compare-and-set on
//!   that version, so a write derived from a stale read is rejected.
//! - A `TransitionResult` is written inside one database transaction
//!   together with its audit event.
//! - Dates are ISO text, so ordering by a date column is calendar order.
//!
//! ## Testing Philosophy
//!
//! - Tests run against shared-cache in-memory databases, one per test
//! - No external infrastructure is required

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use inn_audit::AuditEvent;
use inn_domain::{
    Company, CompanyId, Expense, Guest, GuestId, Income, MaintenanceTask, Reservation,
    ReservationId, Room, RoomId, TaskId,
};
use innkeep::{Store, StoreError, TransitionResult};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// `SQLite` store for the property.
///
/// A single connection is shared behind a mutex; per-room serialization is
/// the coordinator's job, the mutex only keeps the connection exclusive.
pub struct SqliteStore {
    conn: Mutex<SqliteConnection>,
}

impl SqliteStore {
    /// Creates a store backed by a fresh in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database, so tests are
    /// isolated without time-based names.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Creates a store backed by a `SQLite` database file, creating and
    /// migrating it if needed.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn connection(&self) -> Result<MutexGuard<'_, SqliteConnection>, PersistenceError> {
        self.conn
            .lock()
            .map_err(|_| PersistenceError::ConnectionPoisoned)
    }

    fn with_connection<T>(
        &self,
        operation: impl FnOnce(&mut SqliteConnection) -> Result<T, PersistenceError>,
    ) -> Result<T, StoreError> {
        let mut conn: MutexGuard<'_, SqliteConnection> = self.connection()?;
        Ok(operation(&mut *conn)?)
    }
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish_non_exhaustive()
    }
}

impl Store for SqliteStore {
    fn room(&self, id: &RoomId) -> Result<Option<Room>, StoreError> {
        self.with_connection(|conn| queries::rooms::find_room(conn, id))
    }

    fn rooms(&self) -> Result<Vec<Room>, StoreError> {
        self.with_connection(queries::rooms::list_rooms)
    }

    fn reservation(&self, id: &ReservationId) -> Result<Option<Reservation>, StoreError> {
        self.with_connection(|conn| queries::reservations::find_reservation(conn, id))
    }

    fn reservations(&self) -> Result<Vec<Reservation>, StoreError> {
        self.with_connection(queries::reservations::list_reservations)
    }

    fn live_reservations_for_room(
        &self,
        room_id: &RoomId,
    ) -> Result<Vec<Reservation>, StoreError> {
        self.with_connection(|conn| {
            queries::reservations::list_live_reservations_for_room(conn, room_id)
        })
    }

    fn task(&self, id: &TaskId) -> Result<Option<MaintenanceTask>, StoreError> {
        self.with_connection(|conn| queries::maintenance::find_task(conn, id))
    }

    fn tasks(&self) -> Result<Vec<MaintenanceTask>, StoreError> {
        self.with_connection(queries::maintenance::list_tasks)
    }

    fn active_task_for_room(
        &self,
        room_id: &RoomId,
    ) -> Result<Option<MaintenanceTask>, StoreError> {
        self.with_connection(|conn| {
            queries::maintenance::find_active_task_for_room(conn, room_id)
        })
    }

    fn guest(&self, id: &GuestId) -> Result<Option<Guest>, StoreError> {
        self.with_connection(|conn| queries::parties::find_guest(conn, id))
    }

    fn guests(&self) -> Result<Vec<Guest>, StoreError> {
        self.with_connection(queries::parties::list_guests)
    }

    fn company(&self, id: &CompanyId) -> Result<Option<Company>, StoreError> {
        self.with_connection(|conn| queries::parties::find_company(conn, id))
    }

    fn companies(&self) -> Result<Vec<Company>, StoreError> {
        self.with_connection(queries::parties::list_companies)
    }

    fn incomes(&self) -> Result<Vec<Income>, StoreError> {
        self.with_connection(queries::finance::list_incomes)
    }

    fn expenses(&self) -> Result<Vec<Expense>, StoreError> {
        self.with_connection(queries::finance::list_expenses)
    }

    fn audit_events(&self) -> Result<Vec<AuditEvent>, StoreError> {
        self.with_connection(queries::audit::get_audit_timeline)
    }

    fn commit(&self, transition: &TransitionResult) -> Result<AuditEvent, StoreError> {
        self.with_connection(|conn| mutations::persist_transition(conn, transition))
    }
}
