// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod calendar;
mod clock;
mod directory;
mod error;
mod finance;
mod ids;
mod ledger;
mod locks;
mod maintenance;
mod memory;
mod names;
mod property;
mod registry;
mod snapshot;
mod state;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types
pub use calendar::{Dashboard, MovementEntry, Movements, OccupancyCalendar};
pub use clock::{Clock, FixedClock, SystemClock};
pub use directory::GuestDirectory;
pub use error::CoreError;
pub use finance::{FinancialDashboard, FinancialLedger, IncomeLine, ReceivableLine};
pub use ledger::ReservationLedger;
pub use locks::RoomLocks;
pub use maintenance::MaintenanceScheduler;
pub use memory::MemoryStore;
pub use property::Property;
pub use registry::RoomRegistry;
pub use state::{RoomWrite, TransitionResult};
pub use store::{Store, StoreError};
