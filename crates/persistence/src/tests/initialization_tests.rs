// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.

use innkeep::Store;

use super::{create_test_store, insert_room};
use crate::SqliteStore;
use crate::error::PersistenceError;

#[test]
fn test_persistence_initialization() {
    let result: Result<SqliteStore, PersistenceError> = SqliteStore::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_new_store_is_empty() {
    let store: SqliteStore = create_test_store();

    assert!(store.rooms().unwrap().is_empty());
    assert!(store.reservations().unwrap().is_empty());
    assert!(store.tasks().unwrap().is_empty());
    assert!(store.audit_events().unwrap().is_empty());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let db1: SqliteStore = create_test_store();
    let db2: SqliteStore = create_test_store();

    insert_room(&db1, "room_1", "105");

    assert_eq!(db1.rooms().unwrap().len(), 1, "db1 should have 1 room");
    assert_eq!(db2.rooms().unwrap().len(), 0, "db2 should be isolated");
}

#[test]
fn test_file_store_survives_reopen() {
    let path = std::env::temp_dir().join(format!(
        "innkeep_reopen_{}_{}.db",
        std::process::id(),
        rand_suffix()
    ));

    {
        let store: SqliteStore = SqliteStore::new_with_file(&path).unwrap();
        insert_room(&store, "room_1", "105");
    }

    let reopened: SqliteStore = SqliteStore::new_with_file(&path).unwrap();
    let rooms = reopened.rooms().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].identifier, "105");
    assert_eq!(reopened.audit_events().unwrap().len(), 1);

    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.clone().into_os_string();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}

fn rand_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
}
