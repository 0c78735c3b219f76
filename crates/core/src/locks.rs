// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use inn_domain::RoomId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One mutex per room.
///
/// Operations touching a room's status hold that room's lock for their whole
/// read-check-commit sequence. Operations on different rooms never contend.
#[derive(Debug, Default)]
pub struct RoomLocks {
    locks: Mutex<HashMap<RoomId, Arc<Mutex<()>>>>,
}

impl RoomLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&self, room_id: &RoomId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(room_id.clone()).or_default())
    }

    /// Runs `f` while holding the locks of every room in `room_ids`.
    ///
    /// Locks are taken in ascending id order so that two multi-room
    /// operations can never deadlock. A lock poisoned by a panicking holder
    /// is recovered; the store commit is the unit of consistency, not the
    /// lock.
    pub fn with_rooms<T>(&self, room_ids: &[&RoomId], f: impl FnOnce() -> T) -> T {
        let mut ordered: Vec<&RoomId> = room_ids.to_vec();
        ordered.sort_unstable();
        ordered.dedup();

        let handles: Vec<Arc<Mutex<()>>> = ordered.iter().map(|id| self.handle(id)).collect();
        let guards: Vec<MutexGuard<'_, ()>> = handles
            .iter()
            .map(|h| h.lock().unwrap_or_else(PoisonError::into_inner))
            .collect();

        let result: T = f();
        drop(guards);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_same_room_is_serialized() {
        let locks: RoomLocks = RoomLocks::new();
        let room: RoomId = RoomId::new("room_1");
        let inside: AtomicUsize = AtomicUsize::new(0);
        let max_inside: AtomicUsize = AtomicUsize::new(0);

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    locks.with_rooms(&[&room], || {
                        let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                        max_inside.fetch_max(now, Ordering::SeqCst);
                        std::thread::yield_now();
                        inside.fetch_sub(1, Ordering::SeqCst);
                    });
                });
            }
        });

        assert_eq!(max_inside.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_opposite_order_multi_room_locking_completes() {
        let locks: RoomLocks = RoomLocks::new();
        let a: RoomId = RoomId::new("room_a");
        let b: RoomId = RoomId::new("room_b");

        std::thread::scope(|s| {
            for i in 0..16 {
                let (locks, a, b) = (&locks, &a, &b);
                s.spawn(move || {
                    let ids: [&RoomId; 2] = if i % 2 == 0 { [a, b] } else { [b, a] };
                    locks.with_rooms(&ids, std::thread::yield_now);
                });
            }
        });
    }

    #[test]
    fn test_duplicate_ids_lock_once() {
        let locks: RoomLocks = RoomLocks::new();
        let a: RoomId = RoomId::new("room_a");

        let value: u32 = locks.with_rooms(&[&a, &a], || 7);
        assert_eq!(value, 7);
    }
}
