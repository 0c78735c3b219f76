// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers parse wire strings into domain values, call the coordinator and
//! translate every error explicitly. They hold no state of their own.

use std::str::FromStr;

use inn_audit::{Actor, AuditEvent};
use inn_domain::{
    Amount, CalendarDay, Company, CompanyId, CompanyPatch, Expense, Guest, GuestId,
    GuestOrCompany, GuestPatch, Income, MaintenanceStatus, MaintenanceTask, MovementPeriod,
    Priority, Reservation, ReservationCounters, ReservationId, RevenueOrigin, Room, RoomFilter,
    RoomId, RoomPatch, RoomStatus, TaskId, TaskView, cents_to_decimal, format_date, parse_date,
};
use innkeep::{
    Dashboard, FinancialDashboard, IncomeLine, MovementEntry, Movements, Property,
    ReceivableLine,
};
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};
use tracing::debug;

use crate::OperatorContext;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
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

// ============================================================================
// Rooms
// ============================================================================

/// Registers a new room.
///
/// # Errors
///
/// Returns an error if a field is blank, the identifier is already in use,
/// or the store fails.
pub fn create_room(
    property: &Property,
    request: &CreateRoomRequest,
    operator: &OperatorContext,
) -> Result<RoomInfo, ApiError> {
    let actor: Actor = operator.to_audit_actor();
    let room: Room = property
        .rooms()
        .create(
            &actor,
            &request.identifier,
            &request.room_type,
            request.amenities.clone(),
            request.description.clone(),
        )
        .map_err(translate_core_error)?;
    Ok(room_info(&room))
}

/// Returns one room.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the room does not exist.
pub fn get_room(property: &Property, room_id: &str) -> Result<RoomInfo, ApiError> {
    let room: Room = property
        .rooms()
        .get(&RoomId::new(room_id))
        .map_err(translate_core_error)?;
    Ok(room_info(&room))
}

/// Lists rooms, optionally filtered by status, type and free text.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown status label, or an error if the
/// store fails.
pub fn list_rooms(
    property: &Property,
    request: &ListRoomsRequest,
) -> Result<ListRoomsResponse, ApiError> {
    let filter: RoomFilter = RoomFilter {
        status: parse_optional::<RoomStatus>(request.status.as_deref())?,
        room_type: non_blank(request.room_type.as_deref()),
        search_text: non_blank(request.search.as_deref()),
    };
    let rooms: Vec<Room> = property
        .rooms()
        .list(&filter)
        .map_err(translate_core_error)?;
    Ok(ListRoomsResponse {
        rooms: rooms.iter().map(room_info).collect(),
    })
}

/// Updates the descriptive fields of a room.
///
/// # Errors
///
/// Returns an error if the room does not exist, a field is invalid, the new
/// identifier is taken, or a requested status disagrees with the room's
/// reservations and maintenance.
pub fn update_room(
    property: &Property,
    room_id: &str,
    request: &UpdateRoomRequest,
    operator: &OperatorContext,
) -> Result<RoomInfo, ApiError> {
    let actor: Actor = operator.to_audit_actor();
    let patch: RoomPatch = RoomPatch {
        identifier: request.identifier.clone(),
        room_type: request.room_type.clone(),
        amenities: request.amenities.clone(),
        description: request.description.clone(),
        status: parse_optional::<RoomStatus>(request.status.as_deref())?,
    };
    let room: Room = property
        .rooms()
        .update(&actor, &RoomId::new(room_id), &patch)
        .map_err(translate_core_error)?;
    Ok(room_info(&room))
}

// ============================================================================
// Guests and companies
// ============================================================================

/// Registers a guest.
///
/// # Errors
///
/// Returns `InvalidInput` if the name or document is blank.
pub fn register_guest(
    property: &Property,
    request: &RegisterGuestRequest,
    operator: &OperatorContext,
) -> Result<GuestInfo, ApiError> {
    let actor: Actor = operator.to_audit_actor();
    let guest: Guest = property
        .directory()
        .register_guest(
            &actor,
            &request.full_name,
            &request.document,
            request.email.clone(),
            request.phone.clone(),
        )
        .map_err(translate_core_error)?;
    Ok(guest_info(guest))
}

/// Lists guests by name.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_guests(property: &Property) -> Result<ListGuestsResponse, ApiError> {
    let guests: Vec<Guest> = property
        .directory()
        .guests()
        .map_err(translate_core_error)?;
    Ok(ListGuestsResponse {
        guests: guests.into_iter().map(guest_info).collect(),
    })
}

/// Registers a company.
///
/// # Errors
///
/// Returns `InvalidInput` if the name or document is blank.
pub fn register_company(
    property: &Property,
    request: &RegisterCompanyRequest,
    operator: &OperatorContext,
) -> Result<CompanyInfo, ApiError> {
    let actor: Actor = operator.to_audit_actor();
    let company: Company = property
        .directory()
        .register_company(
            &actor,
            &request.name,
            &request.document,
            request.main_contact.clone(),
            request.email.clone(),
            request.phone.clone(),
        )
        .map_err(translate_core_error)?;
    Ok(company_info(company))
}

/// Lists companies by name.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_companies(property: &Property) -> Result<ListCompaniesResponse, ApiError> {
    let companies: Vec<Company> = property
        .directory()
        .companies()
        .map_err(translate_core_error)?;
    Ok(ListCompaniesResponse {
        companies: companies.into_iter().map(company_info).collect(),
    })
}

/// Changes a guest's details.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown guest, or `InvalidInput` if the
/// name or document would become blank.
pub fn update_guest(
    property: &Property,
    guest_id: &str,
    request: &UpdateGuestRequest,
    operator: &OperatorContext,
) -> Result<GuestInfo, ApiError> {
    let patch: GuestPatch = GuestPatch {
        full_name: request.full_name.clone(),
        document: request.document.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
    };
    let guest: Guest = property
        .directory()
        .update_guest(&operator.to_audit_actor(), &GuestId::new(guest_id), patch)
        .map_err(translate_core_error)?;
    Ok(guest_info(guest))
}

/// Deletes a guest and returns the removed record.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown guest, or
/// `DomainRuleViolation` while any reservation names the guest.
pub fn delete_guest(
    property: &Property,
    guest_id: &str,
    operator: &OperatorContext,
) -> Result<GuestInfo, ApiError> {
    let guest: Guest = property
        .directory()
        .delete_guest(&operator.to_audit_actor(), &GuestId::new(guest_id))
        .map_err(translate_core_error)?;
    Ok(guest_info(guest))
}

/// Changes a company's details.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown company, or `InvalidInput` if
/// the name or document would become blank.
pub fn update_company(
    property: &Property,
    company_id: &str,
    request: &UpdateCompanyRequest,
    operator: &OperatorContext,
) -> Result<CompanyInfo, ApiError> {
    let patch: CompanyPatch = CompanyPatch {
        name: request.name.clone(),
        document: request.document.clone(),
        main_contact: request.main_contact.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
    };
    let company: Company = property
        .directory()
        .update_company(&operator.to_audit_actor(), &CompanyId::new(company_id), patch)
        .map_err(translate_core_error)?;
    Ok(company_info(company))
}

/// Deletes a company and returns the removed record.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown company, or
/// `DomainRuleViolation` while any reservation names the company.
pub fn delete_company(
    property: &Property,
    company_id: &str,
    operator: &OperatorContext,
) -> Result<CompanyInfo, ApiError> {
    let company: Company = property
        .directory()
        .delete_company(&operator.to_audit_actor(), &CompanyId::new(company_id))
        .map_err(translate_core_error)?;
    Ok(company_info(company))
}

// ============================================================================
// Reservations
// ============================================================================

/// Books a room for a guest or a company.
///
/// # Errors
///
/// Returns an error if:
/// - Neither or both of `guest_id` and `company_id` are given
/// - A date is malformed or the stay is empty
/// - The party or the room does not exist
/// - The room is under maintenance or already booked for overlapping nights
pub fn create_reservation(
    property: &Property,
    request: &CreateReservationRequest,
    operator: &OperatorContext,
) -> Result<ReservationInfo, ApiError> {
    let party: GuestOrCompany =
        match (non_blank(request.guest_id.as_deref()), non_blank(request.company_id.as_deref())) {
            (Some(guest_id), None) => GuestOrCompany::Guest(GuestId::new(guest_id)),
            (None, Some(company_id)) => GuestOrCompany::Company(CompanyId::new(company_id)),
            _ => {
                return Err(ApiError::InvalidInput {
                    field: String::from("guest_id"),
                    message: String::from("Exactly one of guest_id and company_id is required"),
                });
            }
        };
    let check_in: Date = parse_date(&request.check_in).map_err(translate_domain_error)?;
    let check_out: Date = parse_date(&request.check_out).map_err(translate_domain_error)?;

    let actor: Actor = operator.to_audit_actor();
    let reservation: Reservation = property
        .reservations()
        .create(
            &actor,
            &party,
            &RoomId::new(&request.room_id),
            request.guests_count,
            check_in,
            check_out,
        )
        .map_err(translate_core_error)?;
    reservation_info(&reservation)
}

/// Returns one reservation.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the reservation does not exist.
pub fn get_reservation(
    property: &Property,
    reservation_id: &str,
) -> Result<ReservationInfo, ApiError> {
    let reservation: Reservation = property
        .reservations()
        .get(&ReservationId::new(reservation_id))
        .map_err(translate_core_error)?;
    reservation_info(&reservation)
}

/// Lists every reservation by check-in date.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_reservations(property: &Property) -> Result<ListReservationsResponse, ApiError> {
    let reservations: Vec<Reservation> = property
        .reservations()
        .list()
        .map_err(translate_core_error)?;
    Ok(ListReservationsResponse {
        reservations: reservations
            .iter()
            .map(reservation_info)
            .collect::<Result<Vec<_>, _>>()?,
    })
}

/// Reservation totals by status.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn reservation_counters(property: &Property) -> Result<ReservationCountersResponse, ApiError> {
    let counters: ReservationCounters = property
        .reservations()
        .counters()
        .map_err(translate_core_error)?;
    Ok(ReservationCountersResponse {
        confirmed: counters.confirmed,
        pending: counters.pending,
        cancelled: counters.cancelled,
        in_house: counters.in_house,
    })
}

/// Confirms the guest's arrival.
///
/// # Errors
///
/// Returns an error if the reservation does not exist, is cancelled, was
/// already checked in, or the room cannot take the guest.
pub fn confirm_arrival(
    property: &Property,
    reservation_id: &str,
    operator: &OperatorContext,
) -> Result<ReservationInfo, ApiError> {
    let reservation: Reservation = property
        .reservations()
        .confirm_arrival(&operator.to_audit_actor(), &ReservationId::new(reservation_id))
        .map_err(translate_core_error)?;
    reservation_info(&reservation)
}

/// Confirms the guest's departure.
///
/// # Errors
///
/// Returns `PreconditionFailed` if the guest never arrived, or an error if
/// the reservation does not exist, is cancelled or already departed.
pub fn confirm_departure(
    property: &Property,
    reservation_id: &str,
    operator: &OperatorContext,
) -> Result<ReservationInfo, ApiError> {
    let reservation: Reservation = property
        .reservations()
        .confirm_departure(&operator.to_audit_actor(), &ReservationId::new(reservation_id))
        .map_err(translate_core_error)?;
    reservation_info(&reservation)
}

/// Records a payment against a reservation.
///
/// # Errors
///
/// Returns an error if the amount is not a positive value with at most two
/// decimal places, the method is blank, or the reservation does not exist or
/// is cancelled.
pub fn register_payment(
    property: &Property,
    reservation_id: &str,
    request: &RegisterPaymentRequest,
    operator: &OperatorContext,
) -> Result<ReservationInfo, ApiError> {
    let amount: Amount = parse_amount(&request.amount)?;
    let reservation: Reservation = property
        .reservations()
        .register_payment(
            &operator.to_audit_actor(),
            &ReservationId::new(reservation_id),
            &request.payment_method,
            amount,
        )
        .map_err(translate_core_error)?;
    reservation_info(&reservation)
}

/// Cancels a reservation. Cancelling twice is not an error.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the reservation does not exist.
pub fn cancel_reservation(
    property: &Property,
    reservation_id: &str,
    operator: &OperatorContext,
) -> Result<ReservationInfo, ApiError> {
    let reservation: Reservation = property
        .reservations()
        .cancel(&operator.to_audit_actor(), &ReservationId::new(reservation_id))
        .map_err(translate_core_error)?;
    reservation_info(&reservation)
}

/// Moves a reservation to another room.
///
/// # Errors
///
/// Returns an error if either entity does not exist, the room is the same,
/// or the new room cannot take the stay.
pub fn change_room(
    property: &Property,
    reservation_id: &str,
    request: &ChangeRoomRequest,
    operator: &OperatorContext,
) -> Result<ReservationInfo, ApiError> {
    let reservation: Reservation = property
        .reservations()
        .change_room(
            &operator.to_audit_actor(),
            &ReservationId::new(reservation_id),
            &RoomId::new(&request.room_id),
        )
        .map_err(translate_core_error)?;
    reservation_info(&reservation)
}

// ============================================================================
// Maintenance
// ============================================================================

/// Opens a maintenance task and takes the room out of service.
///
/// # Errors
///
/// Returns an error if the priority is unknown, the issue is blank, or the
/// room does not exist, is already under maintenance or is occupied.
pub fn open_maintenance(
    property: &Property,
    request: &OpenMaintenanceRequest,
    operator: &OperatorContext,
) -> Result<MaintenanceTaskInfo, ApiError> {
    let priority: Priority = Priority::from_str(&request.priority).map_err(translate_domain_error)?;
    let task: MaintenanceTask = property
        .maintenance()
        .open(
            &operator.to_audit_actor(),
            &RoomId::new(&request.room_id),
            &request.issue,
            priority,
        )
        .map_err(translate_core_error)?;
    Ok(task_info(task))
}

/// Moves a maintenance task forward.
///
/// # Errors
///
/// Returns an error if the status or date is malformed, the task does not
/// exist, or the transition is not allowed.
pub fn update_maintenance(
    property: &Property,
    task_id: &str,
    request: &UpdateMaintenanceRequest,
    operator: &OperatorContext,
) -> Result<MaintenanceTaskInfo, ApiError> {
    let target: MaintenanceStatus =
        MaintenanceStatus::from_str(&request.status).map_err(translate_domain_error)?;
    let completed_on: Option<Date> = request
        .completed_on
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(translate_domain_error)?;

    let task: MaintenanceTask = property
        .maintenance()
        .advance(
            &operator.to_audit_actor(),
            &TaskId::new(task_id),
            target,
            completed_on,
            request.notes.clone(),
        )
        .map_err(translate_core_error)?;
    Ok(task_info(task))
}

/// Lists maintenance tasks, active ones first.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_maintenance(
    property: &Property,
    request: &ListMaintenanceRequest,
) -> Result<ListMaintenanceResponse, ApiError> {
    let view: TaskView = if request.include_completed {
        TaskView::All
    } else {
        TaskView::Active
    };
    let tasks: Vec<MaintenanceTask> = property
        .maintenance()
        .list(view)
        .map_err(translate_core_error)?;
    Ok(ListMaintenanceResponse {
        tasks: tasks.into_iter().map(task_info).collect(),
    })
}

/// Rooms a new maintenance task could be opened against.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_maintenance_eligible_rooms(
    property: &Property,
) -> Result<ListRoomsResponse, ApiError> {
    let rooms: Vec<Room> = property
        .maintenance()
        .eligible_rooms()
        .map_err(translate_core_error)?;
    Ok(ListRoomsResponse {
        rooms: rooms.iter().map(room_info).collect(),
    })
}

// ============================================================================
// Calendar and dashboard
// ============================================================================

/// Reservation counts for every day of a month.
///
/// # Errors
///
/// Returns `InvalidInput` if the month is not 1-12.
pub fn get_occupancy_month(
    property: &Property,
    request: &OccupancyMonthRequest,
) -> Result<OccupancyMonthResponse, ApiError> {
    let days: Vec<CalendarDay> = property
        .calendar()
        .get_month(request.year, request.month)
        .map_err(translate_core_error)?;
    Ok(OccupancyMonthResponse {
        year: request.year,
        month: request.month,
        days: days.iter().map(calendar_day_info).collect(),
    })
}

/// Arrivals and departures on one day.
///
/// # Errors
///
/// Returns `InvalidInput` if the date is malformed.
pub fn get_day_movements(
    property: &Property,
    request: &DayMovementsRequest,
) -> Result<MovementsResponse, ApiError> {
    let date: Date = parse_date(&request.date).map_err(translate_domain_error)?;
    let movements: Movements = property
        .calendar()
        .get_day_movements(date)
        .map_err(translate_core_error)?;
    Ok(movements_response(movements))
}

/// Arrivals and departures for today, this week or this month.
///
/// # Errors
///
/// Returns `InvalidInput` if the period is unknown.
pub fn get_period_movements(
    property: &Property,
    request: &PeriodMovementsRequest,
) -> Result<MovementsResponse, ApiError> {
    let period: MovementPeriod =
        parse_optional::<MovementPeriod>(request.period.as_deref())?.unwrap_or_default();
    let movements: Movements = property
        .calendar()
        .movements(period)
        .map_err(translate_core_error)?;
    Ok(movements_response(movements))
}

/// Today's front-desk summary.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_dashboard(property: &Property) -> Result<DashboardResponse, ApiError> {
    let dashboard: Dashboard = property
        .calendar()
        .dashboard()
        .map_err(translate_core_error)?;
    Ok(DashboardResponse {
        date: format_date(dashboard.date),
        occupancy_rate: dashboard.occupancy_rate,
        pending_checkins: dashboard.pending_checkins,
        pending_checkouts: dashboard.pending_checkouts,
        maintenance_rooms: dashboard.maintenance_rooms,
        rooms: dashboard.rooms,
        movements: movements_response(dashboard.movements),
    })
}

// ============================================================================
// Finance
// ============================================================================

/// Records an income outside any reservation.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank description or method, a malformed
/// date, or an amount that is not a positive number.
pub fn record_income(
    property: &Property,
    request: &RecordIncomeRequest,
    operator: &OperatorContext,
) -> Result<IncomeInfo, ApiError> {
    let date: Date = parse_date(&request.date).map_err(translate_domain_error)?;
    let amount: Amount = parse_amount(&request.amount)?;
    let income: Income = property
        .finances()
        .record_income(
            &operator.to_audit_actor(),
            &request.description,
            date,
            amount,
            &request.method,
        )
        .map_err(translate_core_error)?;
    Ok(IncomeInfo {
        id: income.id.to_string(),
        origin: RevenueOrigin::Manual.as_str().to_string(),
        description: income.description,
        date: format_date(income.date),
        amount: income.amount.to_decimal(),
        method: income.method,
    })
}

/// Manual incomes and confirmed reservation payments, newest first.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_incomes(property: &Property) -> Result<ListIncomesResponse, ApiError> {
    let lines: Vec<IncomeLine> = property
        .finances()
        .incomes()
        .map_err(translate_core_error)?;
    Ok(ListIncomesResponse {
        incomes: lines.into_iter().map(income_info).collect(),
    })
}

/// Records an operating expense.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank description or category, a malformed
/// date, or an amount that is not a positive number.
pub fn record_expense(
    property: &Property,
    request: &RecordExpenseRequest,
    operator: &OperatorContext,
) -> Result<ExpenseInfo, ApiError> {
    let date: Date = parse_date(&request.date).map_err(translate_domain_error)?;
    let amount: Amount = parse_amount(&request.amount)?;
    let expense: Expense = property
        .finances()
        .record_expense(
            &operator.to_audit_actor(),
            &request.description,
            &request.category,
            date,
            amount,
        )
        .map_err(translate_core_error)?;
    Ok(expense_info(expense))
}

/// Expenses, newest first.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_expenses(property: &Property) -> Result<ListExpensesResponse, ApiError> {
    let expenses: Vec<Expense> = property
        .finances()
        .expenses()
        .map_err(translate_core_error)?;
    Ok(ListExpensesResponse {
        expenses: expenses.into_iter().map(expense_info).collect(),
    })
}

/// Revenue, receivables, expenses and the payment breakdown.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_financial_dashboard(
    property: &Property,
) -> Result<FinancialDashboardResponse, ApiError> {
    let dashboard: FinancialDashboard = property
        .finances()
        .dashboard()
        .map_err(translate_core_error)?;
    Ok(FinancialDashboardResponse {
        kpis: FinancialKpis {
            gross_revenue: dashboard.gross_revenue.to_decimal(),
            receivables: dashboard.receivables.to_decimal(),
            expenses: dashboard.expenses.to_decimal(),
            estimated_profit: cents_to_decimal(dashboard.estimated_profit_cents),
        },
        payment_overview: dashboard
            .by_method
            .into_iter()
            .map(|(method, amount)| (method, amount.to_decimal()))
            .collect(),
        insights: dashboard
            .insights
            .iter()
            .map(|i| i.as_str().to_string())
            .collect(),
        company_receivables: dashboard
            .company_receivables
            .into_iter()
            .map(receivable_info)
            .collect(),
        guest_receivables: dashboard
            .guest_receivables
            .into_iter()
            .map(receivable_info)
            .collect(),
    })
}

// ============================================================================
// Audit
// ============================================================================

/// Every committed audit event, oldest first.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_audit_timeline(property: &Property) -> Result<AuditTimelineResponse, ApiError> {
    let events: Vec<AuditEvent> = property.audit_timeline().map_err(translate_core_error)?;
    Ok(AuditTimelineResponse {
        events: events.into_iter().map(audit_event_info).collect(),
    })
}

// ============================================================================
// Conversions
// ============================================================================

fn parse_optional<T>(value: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = inn_domain::DomainError>,
{
    non_blank(value)
        .map(|label| T::from_str(&label))
        .transpose()
        .map_err(|err| {
            debug!(error = %err, "Rejected label");
            translate_domain_error(err)
        })
}

fn parse_amount(value: &AmountValue) -> Result<Amount, ApiError> {
    value.to_amount().map_err(translate_domain_error)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn format_timestamp(value: OffsetDateTime) -> Result<String, ApiError> {
    value.format(&Rfc3339).map_err(|e| ApiError::Unavailable {
        message: format!("Failed to format timestamp: {e}"),
    })
}

fn room_info(room: &Room) -> RoomInfo {
    RoomInfo {
        room_id: room.id.to_string(),
        identifier: room.identifier.clone(),
        room_type: room.room_type.clone(),
        status: room.status.as_str().to_string(),
        amenities: room.amenities.iter().cloned().collect(),
        description: room.description.clone(),
    }
}

fn guest_info(guest: Guest) -> GuestInfo {
    GuestInfo {
        guest_id: guest.id.to_string(),
        full_name: guest.full_name,
        document: guest.document,
        email: guest.email,
        phone: guest.phone,
    }
}

fn company_info(company: Company) -> CompanyInfo {
    CompanyInfo {
        company_id: company.id.to_string(),
        name: company.name,
        document: company.document,
        main_contact: company.main_contact,
        email: company.email,
        phone: company.phone,
    }
}

fn reservation_info(reservation: &Reservation) -> Result<ReservationInfo, ApiError> {
    Ok(ReservationInfo {
        reservation_id: reservation.id.to_string(),
        party_kind: reservation.party.kind().to_string(),
        party_id: reservation.party.id_str().to_string(),
        room_id: reservation.room_id.to_string(),
        guests_count: reservation.guests_count,
        check_in: format_date(reservation.stay.check_in()),
        check_out: format_date(reservation.stay.check_out()),
        nights: reservation.stay.nights(),
        status: reservation.status.as_str().to_string(),
        check_in_status: reservation.check_in_status.as_str().to_string(),
        check_out_status: reservation.check_out_status.as_str().to_string(),
        payment_status: reservation.payment_status.as_str().to_string(),
        payment_method: reservation.payment_method.clone(),
        total_amount: reservation.total_amount.to_decimal(),
        created_at: format_timestamp(reservation.created_at)?,
        checked_in_at: reservation.checked_in_at.map(format_timestamp).transpose()?,
        checked_out_at: reservation.checked_out_at.map(format_timestamp).transpose()?,
        cancelled_at: reservation.cancelled_at.map(format_timestamp).transpose()?,
    })
}

fn task_info(task: MaintenanceTask) -> MaintenanceTaskInfo {
    MaintenanceTaskInfo {
        task_id: task.id.to_string(),
        room_id: task.room_id.to_string(),
        room_identifier: task.room_identifier,
        issue: task.issue,
        priority: task.priority.as_str().to_string(),
        status: task.status.as_str().to_string(),
        opened_at: format_date(task.opened_at),
        completed_on: task.completed_on.map(format_date),
        notes: task.notes,
    }
}

fn calendar_day_info(day: &CalendarDay) -> CalendarDayInfo {
    CalendarDayInfo {
        date: format_date(day.date),
        reservation_count: day.reservation_count,
        checkins: day.checkins,
        checkouts: day.checkouts,
    }
}

fn movement_info(entry: MovementEntry) -> MovementInfo {
    let kind: &str = match entry.kind {
        inn_domain::MovementKind::CheckIn => "check_in",
        inn_domain::MovementKind::CheckOut => "check_out",
    };
    MovementInfo {
        reservation_id: entry.reservation_id.to_string(),
        kind: kind.to_string(),
        date: format_date(entry.date),
        party_name: entry.party_name,
        room_id: entry.room_id.to_string(),
        room_identifier: entry.room_identifier,
        guests_count: entry.guests_count,
    }
}

fn movements_response(movements: Movements) -> MovementsResponse {
    MovementsResponse {
        first: format_date(movements.first),
        last: format_date(movements.last),
        checkins: movements.checkins.into_iter().map(movement_info).collect(),
        checkouts: movements.checkouts.into_iter().map(movement_info).collect(),
    }
}

fn audit_event_info(event: AuditEvent) -> AuditEventInfo {
    AuditEventInfo {
        event_id: event.event_id,
        actor_id: event.actor.id,
        actor_type: event.actor.actor_type,
        action_name: event.action.name,
        action_details: event.action.details,
        subject_kind: event.subject.kind,
        subject_id: event.subject.id,
        before_snapshot: event.before.data,
        after_snapshot: event.after.data,
    }
}

fn income_info(line: IncomeLine) -> IncomeInfo {
    IncomeInfo {
        id: line.id,
        origin: line.origin.as_str().to_string(),
        description: line.description,
        date: format_date(line.date),
        amount: line.amount.to_decimal(),
        method: line.method,
    }
}

fn expense_info(expense: Expense) -> ExpenseInfo {
    ExpenseInfo {
        expense_id: expense.id.to_string(),
        description: expense.description,
        category: expense.category,
        date: format_date(expense.date),
        amount: expense.amount.to_decimal(),
    }
}

fn receivable_info(line: ReceivableLine) -> ReceivableInfo {
    ReceivableInfo {
        id: line.id,
        name: line.name,
        due_date: format_date(line.due_date),
        amount: line.amount.to_decimal(),
        status: line.status.as_str().to_string(),
    }
}
