// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only query modules.
//!
//! Every query uses Diesel DSL and returns owned domain values; row types
//! never leave the crate.
//!
//! ## Module Organization
//!
//! - `rooms` — Room lookups and listings
//! - `reservations` — Reservation lookups, listings and per-room claims
//! - `maintenance` — Maintenance task lookups
//! - `parties` — Guest and company directory
//! - `finance` — Manual incomes and expenses
//! - `audit` — Audit timeline

pub mod audit;
pub mod finance;
pub mod maintenance;
pub mod parties;
pub mod reservations;
pub mod rooms;
