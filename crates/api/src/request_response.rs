// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates travel as `YYYY-MM-DD` strings, timestamps as RFC 3339 strings and
//! amounts as decimal numbers with two places. Request amounts may also be
//! decimal strings such as `"450,00"`. Status labels are the canonical
//! snake_case strings.

use std::collections::BTreeMap;

use inn_domain::{Amount, DomainError, RoomStatusOverview};
use serde::{Deserialize, Serialize};

/// A request amount: a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Number(f64),
    /// Either `.` or `,` as the decimal separator.
    Text(String),
}

impl AmountValue {
    /// Parses the value into an exact amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` for negative, non-finite or
    /// malformed values.
    pub fn to_amount(&self) -> Result<Amount, DomainError> {
        match self {
            Self::Number(value) => Amount::from_decimal(*value),
            Self::Text(text) => Amount::parse(text),
        }
    }
}

impl From<f64> for AmountValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AmountValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

// ============================================================================
// Rooms
// ============================================================================

/// API request to register a new room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    /// Human-facing label, unique within the property.
    pub identifier: String,
    /// Room category.
    pub room_type: String,
    /// Amenity labels.
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// API request to update a room. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    /// Accepted only if it equals the status implied by the room's claims.
    #[serde(default)]
    pub status: Option<String>,
}

/// Filters for listing rooms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRoomsRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub room_type: Option<String>,
    /// Case-insensitive match on identifier, type, description or amenities.
    #[serde(default)]
    pub search: Option<String>,
}

/// Room information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub room_id: String,
    pub identifier: String,
    pub room_type: String,
    pub status: String,
    pub amenities: Vec<String>,
    pub description: Option<String>,
}

/// API response for room listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRoomsResponse {
    pub rooms: Vec<RoomInfo>,
}

// ============================================================================
// Guests and companies
// ============================================================================

/// API request to register a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterGuestRequest {
    pub full_name: String,
    /// National identity document.
    pub document: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Guest information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestInfo {
    pub guest_id: String,
    pub full_name: String,
    pub document: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// API request to register a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterCompanyRequest {
    pub name: String,
    /// Company registration number.
    pub document: String,
    #[serde(default)]
    pub main_contact: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Company information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub company_id: String,
    pub name: String,
    pub document: String,
    pub main_contact: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// API request to change a guest. Absent fields are left unchanged; a blank
/// email or phone clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGuestRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// API request to change a company. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default)]
    pub main_contact: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGuestsResponse {
    pub guests: Vec<GuestInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCompaniesResponse {
    pub companies: Vec<CompanyInfo>,
}

// ============================================================================
// Reservations
// ============================================================================

/// API request to book a room.
///
/// Exactly one of `guest_id` and `company_id` must be given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    #[serde(default)]
    pub guest_id: Option<String>,
    #[serde(default)]
    pub company_id: Option<String>,
    pub room_id: String,
    pub guests_count: u32,
    /// First night (`YYYY-MM-DD`).
    pub check_in: String,
    /// Departure day (`YYYY-MM-DD`), not a night of the stay.
    pub check_out: String,
}

/// API request to record a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterPaymentRequest {
    pub payment_method: String,
    pub amount: AmountValue,
}

/// API request to move a reservation to another room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRoomRequest {
    pub room_id: String,
}

/// Reservation information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationInfo {
    pub reservation_id: String,
    /// "guest" or "company".
    pub party_kind: String,
    pub party_id: String,
    pub room_id: String,
    pub guests_count: u32,
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub status: String,
    pub check_in_status: String,
    pub check_out_status: String,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub total_amount: f64,
    pub created_at: String,
    pub checked_in_at: Option<String>,
    pub checked_out_at: Option<String>,
    pub cancelled_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListReservationsResponse {
    pub reservations: Vec<ReservationInfo>,
}

/// Reservation counts by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationCountersResponse {
    pub confirmed: u32,
    pub pending: u32,
    pub cancelled: u32,
    /// Checked in and not yet checked out.
    pub in_house: u32,
}

// ============================================================================
// Maintenance
// ============================================================================

/// API request to open a maintenance task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenMaintenanceRequest {
    pub room_id: String,
    pub issue: String,
    /// "low", "medium" or "high".
    pub priority: String,
}

/// API request to move a maintenance task forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMaintenanceRequest {
    /// "in_progress" or "completed".
    pub status: String,
    /// Required when completing (`YYYY-MM-DD`).
    #[serde(default)]
    pub completed_on: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Filters for listing maintenance tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMaintenanceRequest {
    /// Include completed tasks.
    #[serde(default)]
    pub include_completed: bool,
}

/// Maintenance task information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceTaskInfo {
    pub task_id: String,
    pub room_id: String,
    pub room_identifier: String,
    pub issue: String,
    pub priority: String,
    pub status: String,
    pub opened_at: String,
    pub completed_on: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMaintenanceResponse {
    pub tasks: Vec<MaintenanceTaskInfo>,
}

// ============================================================================
// Calendar and dashboard
// ============================================================================

/// API request for a month of occupancy counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyMonthRequest {
    pub year: i32,
    pub month: u8,
}

/// Reservation activity on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDayInfo {
    pub date: String,
    pub reservation_count: u32,
    pub checkins: u32,
    pub checkouts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyMonthResponse {
    pub year: i32,
    pub month: u8,
    pub days: Vec<CalendarDayInfo>,
}

/// API request for the movements of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMovementsRequest {
    /// `YYYY-MM-DD`.
    pub date: String,
}

/// API request for the movements of a reporting period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodMovementsRequest {
    /// "today" (default), "week" or "month".
    #[serde(default)]
    pub period: Option<String>,
}

/// One arrival or departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementInfo {
    pub reservation_id: String,
    /// "check_in" or "check_out".
    pub kind: String,
    pub date: String,
    pub party_name: String,
    pub room_id: String,
    pub room_identifier: String,
    pub guests_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementsResponse {
    pub first: String,
    pub last: String,
    pub checkins: Vec<MovementInfo>,
    pub checkouts: Vec<MovementInfo>,
}

/// Front-desk summary for today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub date: String,
    pub occupancy_rate: f64,
    pub pending_checkins: u32,
    pub pending_checkouts: u32,
    pub maintenance_rooms: u32,
    pub rooms: RoomStatusOverview,
    pub movements: MovementsResponse,
}

// ============================================================================
// Finance
// ============================================================================

/// API request to record an income outside any reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordIncomeRequest {
    pub description: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub amount: AmountValue,
    /// Payment method label, e.g. "PIX".
    pub method: String,
}

/// API request to record an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordExpenseRequest {
    pub description: String,
    pub category: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub amount: AmountValue,
}

/// One revenue line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeInfo {
    pub id: String,
    /// "manual" or "reservation".
    pub origin: String,
    pub description: String,
    pub date: String,
    pub amount: f64,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListIncomesResponse {
    pub incomes: Vec<IncomeInfo>,
}

/// One expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInfo {
    pub expense_id: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListExpensesResponse {
    pub expenses: Vec<ExpenseInfo>,
}

/// Headline figures of the financial dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialKpis {
    pub gross_revenue: f64,
    pub receivables: f64,
    pub expenses: f64,
    /// Negative on a loss.
    pub estimated_profit: f64,
}

/// One receivable, company or guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivableInfo {
    pub id: String,
    pub name: String,
    pub due_date: String,
    pub amount: f64,
    /// "open" or "paid".
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialDashboardResponse {
    pub kpis: FinancialKpis,
    /// Revenue per payment method.
    pub payment_overview: BTreeMap<String, f64>,
    pub insights: Vec<String>,
    pub company_receivables: Vec<ReceivableInfo>,
    pub guest_receivables: Vec<ReceivableInfo>,
}

// ============================================================================
// Audit
// ============================================================================

/// One audit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventInfo {
    pub event_id: Option<i64>,
    pub actor_id: String,
    pub actor_type: String,
    pub action_name: String,
    pub action_details: Option<String>,
    pub subject_kind: String,
    pub subject_id: String,
    pub before_snapshot: String,
    pub after_snapshot: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTimelineResponse {
    pub events: Vec<AuditEventInfo>,
}
