// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! ## Module Organization
//!
//! - `rooms` — Compare-and-set room writes
//! - `records` — Reservation, task and party upserts, party removal, income
//!   and expense inserts
//! - `audit` — Audit event persistence
//! - `transition` — Atomic commit of a whole `TransitionResult`

pub mod audit;
pub mod records;
pub mod rooms;
pub mod transition;

pub use transition::persist_transition;
