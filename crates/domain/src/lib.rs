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

#[macro_use]
mod labels;

mod dates;
mod error;
mod finance;
mod ids;
mod maintenance;
mod money;
mod occupancy;
mod party;
mod reservation;
mod room;

#[cfg(test)]
mod tests;

pub use dates::{DateSpan, MovementPeriod, StayPeriod, days_in_month, format_date, parse_date};
pub use error::{DomainError, ErrorKind};
pub use finance::{
    Expense, FinancialInsight, FinancialSummary, Income, LedgerSource, Receivable,
    ReceivableStatus, RevenueEntry, RevenueOrigin, UNSPECIFIED_METHOD, revenue_entries,
};
pub use ids::{CompanyId, ExpenseId, GuestId, IncomeId, ReservationId, RoomId, TaskId};
pub use maintenance::{MaintenanceStatus, MaintenanceTask, Priority, TaskView, sort_for_display};
pub use money::{Amount, cents_to_decimal};
pub use occupancy::{
    CalendarDay, MovementKind, RoomStatusOverview, calendar_days, movements_within,
    pending_arrivals_on, pending_departures_on,
};
pub use party::{Company, CompanyPatch, Guest, GuestPatch};
pub use reservation::{
    GuestOrCompany, PaymentStatus, Reservation, ReservationCounters, ReservationStatus,
    StageStatus,
};
pub use room::{ClaimState, Room, RoomFilter, RoomPatch, RoomStatus, derive_room_status};
