// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Innkeep property coordinator.
//!
//! Requests arrive as plain strings and numbers, are parsed into domain
//! values here, and are handed to the coordinator together with the acting
//! operator. Every error that leaves this crate is an [`ApiError`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

use inn_audit::Actor;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    cancel_reservation, change_room, confirm_arrival, confirm_departure, create_reservation,
    create_room, delete_company, delete_guest, get_audit_timeline, get_dashboard,
    get_day_movements, get_financial_dashboard, get_occupancy_month, get_period_movements,
    get_reservation, get_room, list_companies, list_expenses, list_guests, list_incomes,
    list_maintenance, list_maintenance_eligible_rooms, list_reservations, list_rooms,
    open_maintenance, record_expense, record_income, register_company, register_guest,
    register_payment, reservation_counters, update_company, update_guest, update_maintenance,
    update_room,
};
pub use request_response::{
    AmountValue, AuditEventInfo, AuditTimelineResponse, CalendarDayInfo, ChangeRoomRequest,
    CompanyInfo, CreateReservationRequest, CreateRoomRequest, DashboardResponse,
    DayMovementsRequest, ExpenseInfo, FinancialDashboardResponse, FinancialKpis, GuestInfo,
    IncomeInfo, ListCompaniesResponse, ListExpensesResponse, ListGuestsResponse,
    ListIncomesResponse, ListMaintenanceRequest, ListMaintenanceResponse,
    ListReservationsResponse, ListRoomsRequest, ListRoomsResponse, MaintenanceTaskInfo,
    MovementInfo, MovementsResponse, OccupancyMonthRequest, OccupancyMonthResponse,
    OpenMaintenanceRequest, PeriodMovementsRequest, ReceivableInfo, RecordExpenseRequest,
    RecordIncomeRequest, RegisterCompanyRequest, RegisterGuestRequest, RegisterPaymentRequest,
    ReservationCountersResponse, ReservationInfo, RoomInfo, UpdateCompanyRequest,
    UpdateGuestRequest, UpdateMaintenanceRequest, UpdateRoomRequest,
};

/// Identifier recorded when a request carries no operator.
pub const SYSTEM_OPERATOR_ID: &str = "system";

/// The operator on whose behalf a request is made.
///
/// Authentication happens outside this system; the caller passes the
/// already-established operator identity into every mutating handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorContext {
    /// The operator identifier supplied by the authentication layer.
    pub id: String,
}

impl OperatorContext {
    /// Creates a context for the given operator.
    ///
    /// A blank identifier yields the system context.
    #[must_use]
    pub fn new(id: &str) -> Self {
        let id: &str = id.trim();
        if id.is_empty() {
            return Self::system();
        }
        Self { id: id.to_string() }
    }

    /// The context used when no operator is identified.
    #[must_use]
    pub fn system() -> Self {
        Self {
            id: String::from(SYSTEM_OPERATOR_ID),
        }
    }

    /// Converts this context into an audit `Actor`.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        if self.id == SYSTEM_OPERATOR_ID {
            Actor::system()
        } else {
            Actor::operator(&self.id)
        }
    }
}

impl Default for OperatorContext {
    fn default() -> Self {
        Self::system()
    }
}
