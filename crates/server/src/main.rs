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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use chrono_tz::Tz;
use clap::Parser;
use inn_api::{
    ApiError, AuditTimelineResponse, ChangeRoomRequest, CompanyInfo, CreateReservationRequest,
    CreateRoomRequest, DashboardResponse, DayMovementsRequest, ExpenseInfo,
    FinancialDashboardResponse, GuestInfo, IncomeInfo, ListCompaniesResponse,
    ListExpensesResponse, ListGuestsResponse, ListIncomesResponse, ListMaintenanceRequest,
    ListMaintenanceResponse, ListReservationsResponse, ListRoomsRequest, ListRoomsResponse,
    MaintenanceTaskInfo, MovementsResponse, OccupancyMonthRequest, OccupancyMonthResponse,
    OpenMaintenanceRequest, OperatorContext, PeriodMovementsRequest, RecordExpenseRequest,
    RecordIncomeRequest, RegisterCompanyRequest, RegisterGuestRequest, RegisterPaymentRequest,
    ReservationCountersResponse, ReservationInfo, RoomInfo, UpdateCompanyRequest,
    UpdateGuestRequest, UpdateMaintenanceRequest, UpdateRoomRequest,
};
use inn_persistence::SqliteStore;
use innkeep::{Property, SystemClock};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use tracing::{error, info, warn};

/// Header carrying the operator established by the authentication layer.
const ACTOR_HEADER: &str = "x-actor-id";

/// Innkeep Server - HTTP server for the Innkeep property coordinator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// IANA timezone of the property; decides what "today" is
    #[arg(short, long, default_value = "UTC")]
    timezone: String,
}

/// Application state shared across handlers.
///
/// `Property` is cheap to clone and serializes writers per room internally.
#[derive(Clone)]
struct AppState {
    property: Property,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::DomainRuleViolation { .. } => StatusCode::CONFLICT,
            ApiError::PreconditionFailed { .. } => StatusCode::PRECONDITION_FAILED,
            ApiError::ConcurrencyConflict { .. } => {
                warn!(error = %err, "Concurrent modification");
                StatusCode::CONFLICT
            }
            ApiError::Unavailable { .. } => {
                error!(error = %err, "Store unavailable");
                StatusCode::SERVICE_UNAVAILABLE
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Reads the acting operator from the request headers.
fn operator_from_headers(headers: &HeaderMap) -> OperatorContext {
    headers
        .get(ACTOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .map_or_else(OperatorContext::system, OperatorContext::new)
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

// ============================================================================
// Rooms
// ============================================================================

/// Handler for GET `/rooms` endpoint.
async fn handle_list_rooms(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListRoomsRequest>,
) -> Result<Json<ListRoomsResponse>, HttpError> {
    info!(status = ?query.status, room_type = ?query.room_type, "Handling list_rooms request");
    Ok(Json(inn_api::list_rooms(&app_state.property, &query)?))
}

/// Handler for POST `/rooms` endpoint.
async fn handle_create_room(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomInfo>), HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, identifier = %req.identifier, "Handling create_room request");

    let room: RoomInfo = inn_api::create_room(&app_state.property, &req, &operator)?;

    info!(room_id = %room.room_id, "Successfully created room");
    Ok((StatusCode::CREATED, Json(room)))
}

/// Handler for GET `/rooms/{room_id}` endpoint.
async fn handle_get_room(
    AxumState(app_state): AxumState<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomInfo>, HttpError> {
    info!(room_id = %room_id, "Handling get_room request");
    Ok(Json(inn_api::get_room(&app_state.property, &room_id)?))
}

/// Handler for PATCH `/rooms/{room_id}` endpoint.
async fn handle_update_room(
    AxumState(app_state): AxumState<AppState>,
    Path(room_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<RoomInfo>, HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, room_id = %room_id, "Handling update_room request");
    Ok(Json(inn_api::update_room(
        &app_state.property,
        &room_id,
        &req,
        &operator,
    )?))
}

// ============================================================================
// Guests and companies
// ============================================================================

/// Handler for GET `/guests` endpoint.
async fn handle_list_guests(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListGuestsResponse>, HttpError> {
    info!("Handling list_guests request");
    Ok(Json(inn_api::list_guests(&app_state.property)?))
}

/// Handler for POST `/guests` endpoint.
async fn handle_register_guest(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<RegisterGuestRequest>,
) -> Result<(StatusCode, Json<GuestInfo>), HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, "Handling register_guest request");
    let guest: GuestInfo = inn_api::register_guest(&app_state.property, &req, &operator)?;
    Ok((StatusCode::CREATED, Json(guest)))
}

/// Handler for GET `/companies` endpoint.
async fn handle_list_companies(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListCompaniesResponse>, HttpError> {
    info!("Handling list_companies request");
    Ok(Json(inn_api::list_companies(&app_state.property)?))
}

/// Handler for POST `/companies` endpoint.
async fn handle_register_company(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<RegisterCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyInfo>), HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, "Handling register_company request");
    let company: CompanyInfo = inn_api::register_company(&app_state.property, &req, &operator)?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// Handler for PUT `/guests/{guest_id}` endpoint.
async fn handle_update_guest(
    AxumState(app_state): AxumState<AppState>,
    Path(guest_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<UpdateGuestRequest>,
) -> Result<Json<GuestInfo>, HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, guest_id = %guest_id, "Handling update_guest request");
    Ok(Json(inn_api::update_guest(
        &app_state.property,
        &guest_id,
        &req,
        &operator,
    )?))
}

/// Handler for DELETE `/guests/{guest_id}` endpoint.
async fn handle_delete_guest(
    AxumState(app_state): AxumState<AppState>,
    Path(guest_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<GuestInfo>, HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, guest_id = %guest_id, "Handling delete_guest request");
    Ok(Json(inn_api::delete_guest(
        &app_state.property,
        &guest_id,
        &operator,
    )?))
}

/// Handler for PUT `/companies/{company_id}` endpoint.
async fn handle_update_company(
    AxumState(app_state): AxumState<AppState>,
    Path(company_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<UpdateCompanyRequest>,
) -> Result<Json<CompanyInfo>, HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, company_id = %company_id, "Handling update_company request");
    Ok(Json(inn_api::update_company(
        &app_state.property,
        &company_id,
        &req,
        &operator,
    )?))
}

/// Handler for DELETE `/companies/{company_id}` endpoint.
async fn handle_delete_company(
    AxumState(app_state): AxumState<AppState>,
    Path(company_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<CompanyInfo>, HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, company_id = %company_id, "Handling delete_company request");
    Ok(Json(inn_api::delete_company(
        &app_state.property,
        &company_id,
        &operator,
    )?))
}

// ============================================================================
// Reservations
// ============================================================================

/// Handler for GET `/reservations` endpoint.
async fn handle_list_reservations(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListReservationsResponse>, HttpError> {
    info!("Handling list_reservations request");
    Ok(Json(inn_api::list_reservations(&app_state.property)?))
}

/// Handler for POST `/reservations` endpoint.
async fn handle_create_reservation(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationInfo>), HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(
        operator = %operator.id,
        room_id = %req.room_id,
        check_in = %req.check_in,
        check_out = %req.check_out,
        "Handling create_reservation request"
    );

    let reservation: ReservationInfo =
        inn_api::create_reservation(&app_state.property, &req, &operator)?;

    info!(
        reservation_id = %reservation.reservation_id,
        "Successfully created reservation"
    );
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Handler for GET `/reservations/counters` endpoint.
async fn handle_reservation_counters(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ReservationCountersResponse>, HttpError> {
    info!("Handling reservation_counters request");
    Ok(Json(inn_api::reservation_counters(&app_state.property)?))
}

/// Handler for GET `/reservations/{reservation_id}` endpoint.
async fn handle_get_reservation(
    AxumState(app_state): AxumState<AppState>,
    Path(reservation_id): Path<String>,
) -> Result<Json<ReservationInfo>, HttpError> {
    info!(reservation_id = %reservation_id, "Handling get_reservation request");
    Ok(Json(inn_api::get_reservation(
        &app_state.property,
        &reservation_id,
    )?))
}

/// Handler for PUT `/reservations/{reservation_id}/checkin` endpoint.
async fn handle_confirm_arrival(
    AxumState(app_state): AxumState<AppState>,
    Path(reservation_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ReservationInfo>, HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, reservation_id = %reservation_id, "Handling checkin request");
    Ok(Json(inn_api::confirm_arrival(
        &app_state.property,
        &reservation_id,
        &operator,
    )?))
}

/// Handler for PUT `/reservations/{reservation_id}/checkout` endpoint.
async fn handle_confirm_departure(
    AxumState(app_state): AxumState<AppState>,
    Path(reservation_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ReservationInfo>, HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, reservation_id = %reservation_id, "Handling checkout request");
    Ok(Json(inn_api::confirm_departure(
        &app_state.property,
        &reservation_id,
        &operator,
    )?))
}

/// Handler for PUT `/reservations/{reservation_id}/payment` endpoint.
async fn handle_register_payment(
    AxumState(app_state): AxumState<AppState>,
    Path(reservation_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<RegisterPaymentRequest>,
) -> Result<Json<ReservationInfo>, HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(
        operator = %operator.id,
        reservation_id = %reservation_id,
        method = %req.payment_method,
        "Handling register_payment request"
    );
    Ok(Json(inn_api::register_payment(
        &app_state.property,
        &reservation_id,
        &req,
        &operator,
    )?))
}

/// Handler for PUT `/reservations/{reservation_id}/cancel` endpoint.
async fn handle_cancel_reservation(
    AxumState(app_state): AxumState<AppState>,
    Path(reservation_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ReservationInfo>, HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, reservation_id = %reservation_id, "Handling cancel request");
    Ok(Json(inn_api::cancel_reservation(
        &app_state.property,
        &reservation_id,
        &operator,
    )?))
}

/// Handler for PUT `/reservations/{reservation_id}/room` endpoint.
async fn handle_change_room(
    AxumState(app_state): AxumState<AppState>,
    Path(reservation_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<ChangeRoomRequest>,
) -> Result<Json<ReservationInfo>, HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(
        operator = %operator.id,
        reservation_id = %reservation_id,
        room_id = %req.room_id,
        "Handling change_room request"
    );
    Ok(Json(inn_api::change_room(
        &app_state.property,
        &reservation_id,
        &req,
        &operator,
    )?))
}

// ============================================================================
// Maintenance
// ============================================================================

/// Handler for GET `/maintenance` endpoint.
async fn handle_list_maintenance(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListMaintenanceRequest>,
) -> Result<Json<ListMaintenanceResponse>, HttpError> {
    info!(
        include_completed = query.include_completed,
        "Handling list_maintenance request"
    );
    Ok(Json(inn_api::list_maintenance(&app_state.property, &query)?))
}

/// Handler for POST `/maintenance` endpoint.
async fn handle_open_maintenance(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<OpenMaintenanceRequest>,
) -> Result<(StatusCode, Json<MaintenanceTaskInfo>), HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(
        operator = %operator.id,
        room_id = %req.room_id,
        priority = %req.priority,
        "Handling open_maintenance request"
    );
    let task: MaintenanceTaskInfo =
        inn_api::open_maintenance(&app_state.property, &req, &operator)?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Handler for PUT `/maintenance/{task_id}` endpoint.
async fn handle_update_maintenance(
    AxumState(app_state): AxumState<AppState>,
    Path(task_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<UpdateMaintenanceRequest>,
) -> Result<Json<MaintenanceTaskInfo>, HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(
        operator = %operator.id,
        task_id = %task_id,
        status = %req.status,
        "Handling update_maintenance request"
    );
    Ok(Json(inn_api::update_maintenance(
        &app_state.property,
        &task_id,
        &req,
        &operator,
    )?))
}

/// Handler for GET `/maintenance/eligible-rooms` endpoint.
async fn handle_maintenance_eligible_rooms(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListRoomsResponse>, HttpError> {
    info!("Handling maintenance_eligible_rooms request");
    Ok(Json(inn_api::list_maintenance_eligible_rooms(
        &app_state.property,
    )?))
}

// ============================================================================
// Calendar, dashboard and audit
// ============================================================================

/// Handler for GET `/calendar/occupancy` endpoint.
async fn handle_occupancy_month(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<OccupancyMonthRequest>,
) -> Result<Json<OccupancyMonthResponse>, HttpError> {
    info!(year = query.year, month = query.month, "Handling occupancy_month request");
    Ok(Json(inn_api::get_occupancy_month(
        &app_state.property,
        &query,
    )?))
}

/// Handler for GET `/calendar/movements` endpoint.
async fn handle_day_movements(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<DayMovementsRequest>,
) -> Result<Json<MovementsResponse>, HttpError> {
    info!(date = %query.date, "Handling day_movements request");
    Ok(Json(inn_api::get_day_movements(&app_state.property, &query)?))
}

/// Handler for GET `/movements` endpoint.
async fn handle_period_movements(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<PeriodMovementsRequest>,
) -> Result<Json<MovementsResponse>, HttpError> {
    info!(period = ?query.period, "Handling period_movements request");
    Ok(Json(inn_api::get_period_movements(
        &app_state.property,
        &query,
    )?))
}

/// Handler for GET `/dashboard` endpoint.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<DashboardResponse>, HttpError> {
    info!("Handling dashboard request");
    Ok(Json(inn_api::get_dashboard(&app_state.property)?))
}

/// Handler for GET `/audit/timeline` endpoint.
async fn handle_audit_timeline(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<AuditTimelineResponse>, HttpError> {
    info!("Handling audit_timeline request");
    Ok(Json(inn_api::get_audit_timeline(&app_state.property)?))
}

// ============================================================================
// Finance
// ============================================================================

/// Handler for GET `/financial-dashboard` endpoint.
async fn handle_financial_dashboard(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<FinancialDashboardResponse>, HttpError> {
    info!("Handling financial_dashboard request");
    Ok(Json(inn_api::get_financial_dashboard(&app_state.property)?))
}

/// Handler for GET `/incomes` endpoint.
async fn handle_list_incomes(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListIncomesResponse>, HttpError> {
    info!("Handling list_incomes request");
    Ok(Json(inn_api::list_incomes(&app_state.property)?))
}

/// Handler for POST `/incomes` endpoint.
async fn handle_record_income(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<RecordIncomeRequest>,
) -> Result<(StatusCode, Json<IncomeInfo>), HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, date = %req.date, "Handling record_income request");
    let income: IncomeInfo = inn_api::record_income(&app_state.property, &req, &operator)?;
    Ok((StatusCode::CREATED, Json(income)))
}

/// Handler for GET `/expenses` endpoint.
async fn handle_list_expenses(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListExpensesResponse>, HttpError> {
    info!("Handling list_expenses request");
    Ok(Json(inn_api::list_expenses(&app_state.property)?))
}

/// Handler for POST `/expenses` endpoint.
async fn handle_record_expense(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<RecordExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseInfo>), HttpError> {
    let operator: OperatorContext = operator_from_headers(&headers);
    info!(operator = %operator.id, date = %req.date, "Handling record_expense request");
    let expense: ExpenseInfo = inn_api::record_expense(&app_state.property, &req, &operator)?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/rooms", get(handle_list_rooms).post(handle_create_room))
        .route(
            "/rooms/{room_id}",
            get(handle_get_room).patch(handle_update_room),
        )
        .route(
            "/guests",
            get(handle_list_guests).post(handle_register_guest),
        )
        .route(
            "/guests/{guest_id}",
            put(handle_update_guest).delete(handle_delete_guest),
        )
        .route(
            "/companies",
            get(handle_list_companies).post(handle_register_company),
        )
        .route(
            "/companies/{company_id}",
            put(handle_update_company).delete(handle_delete_company),
        )
        .route(
            "/reservations",
            get(handle_list_reservations).post(handle_create_reservation),
        )
        .route("/reservations/counters", get(handle_reservation_counters))
        .route("/reservations/{reservation_id}", get(handle_get_reservation))
        .route(
            "/reservations/{reservation_id}/checkin",
            put(handle_confirm_arrival),
        )
        .route(
            "/reservations/{reservation_id}/checkout",
            put(handle_confirm_departure),
        )
        .route(
            "/reservations/{reservation_id}/payment",
            put(handle_register_payment),
        )
        .route(
            "/reservations/{reservation_id}/cancel",
            put(handle_cancel_reservation),
        )
        .route(
            "/reservations/{reservation_id}/room",
            put(handle_change_room),
        )
        .route(
            "/maintenance",
            get(handle_list_maintenance).post(handle_open_maintenance),
        )
        .route(
            "/maintenance/eligible-rooms",
            get(handle_maintenance_eligible_rooms),
        )
        .route("/maintenance/{task_id}", put(handle_update_maintenance))
        .route("/calendar/occupancy", get(handle_occupancy_month))
        .route("/calendar/movements", get(handle_day_movements))
        .route("/movements", get(handle_period_movements))
        .route("/dashboard", get(handle_dashboard))
        .route("/financial-dashboard", get(handle_financial_dashboard))
        .route("/incomes", get(handle_list_incomes).post(handle_record_income))
        .route(
            "/expenses",
            get(handle_list_expenses).post(handle_record_expense),
        )
        .route("/audit/timeline", get(handle_audit_timeline))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Innkeep Server");

    let timezone: Tz = args
        .timezone
        .parse()
        .map_err(|e| format!("Invalid timezone '{}': {e}", args.timezone))?;
    let clock: SystemClock = SystemClock::new(timezone);
    info!(timezone = %timezone, "Using property timezone");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let store: SqliteStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteStore::new_in_memory()?
    };

    let app_state: AppState = AppState {
        property: Property::new(store, clock),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use innkeep::FixedClock;
    use serde::de::DeserializeOwned;
    use time::macros::datetime;
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let store: SqliteStore =
            SqliteStore::new_in_memory().expect("Failed to create in-memory store");
        AppState {
            property: Property::new(store, FixedClock::new(datetime!(2025-10-10 12:00 UTC))),
        }
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<String>) -> Response {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .header(ACTOR_HEADER, "frontdesk-1");
        let request = match body {
            Some(json) => builder.body(Body::from(json)).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    async fn create_room(app: &Router, identifier: &str) -> RoomInfo {
        let req = CreateRoomRequest {
            identifier: identifier.to_string(),
            room_type: String::from("double"),
            amenities: vec![String::from("wifi")],
            description: None,
        };
        let response =
            send(app, "POST", "/rooms", Some(serde_json::to_string(&req).unwrap())).await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);
        read_json(response).await
    }

    async fn create_guest(app: &Router) -> GuestInfo {
        let req = RegisterGuestRequest {
            full_name: String::from("Maria Silva"),
            document: String::from("123.456.789-00"),
            email: None,
            phone: None,
        };
        let response =
            send(app, "POST", "/guests", Some(serde_json::to_string(&req).unwrap())).await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);
        read_json(response).await
    }

    fn reservation_body(
        guest: &GuestInfo,
        room: &RoomInfo,
        check_in: &str,
        check_out: &str,
    ) -> String {
        serde_json::to_string(&CreateReservationRequest {
            guest_id: Some(guest.guest_id.clone()),
            company_id: None,
            room_id: room.room_id.clone(),
            guests_count: 2,
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app: Router = build_router(create_test_app_state());

        let response = send(&app, "GET", "/health", None).await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let health: HealthResponse = read_json(response).await;
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn test_reservation_lifecycle_over_http() {
        let app: Router = build_router(create_test_app_state());
        let room = create_room(&app, "105").await;
        let guest = create_guest(&app).await;

        let response = send(
            &app,
            "POST",
            "/reservations",
            Some(reservation_body(&guest, &room, "2025-10-10", "2025-10-12")),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);
        let reservation: ReservationInfo = read_json(response).await;

        let uri = format!("/reservations/{}/checkin", reservation.reservation_id);
        let response = send(&app, "PUT", &uri, None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = send(&app, "GET", &format!("/rooms/{}", room.room_id), None).await;
        let fetched: RoomInfo = read_json(response).await;
        assert_eq!(fetched.status, "occupied");

        let uri = format!("/reservations/{}/checkout", reservation.reservation_id);
        let response = send(&app, "PUT", &uri, None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let departed: ReservationInfo = read_json(response).await;
        assert_eq!(departed.check_out_status, "concluded");

        let response = send(&app, "GET", &format!("/rooms/{}", room.room_id), None).await;
        let fetched: RoomInfo = read_json(response).await;
        assert_eq!(fetched.status, "available");
    }

    #[tokio::test]
    async fn test_overlapping_reservation_returns_conflict() {
        let app: Router = build_router(create_test_app_state());
        let room = create_room(&app, "105").await;
        let guest = create_guest(&app).await;
        send(
            &app,
            "POST",
            "/reservations",
            Some(reservation_body(&guest, &room, "2025-10-10", "2025-10-13")),
        )
        .await;

        let response = send(
            &app,
            "POST",
            "/reservations",
            Some(reservation_body(&guest, &room, "2025-10-11", "2025-10-12")),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::CONFLICT);
        let error_response: ErrorResponse = read_json(response).await;
        assert!(error_response.error);
    }

    #[tokio::test]
    async fn test_checkout_before_checkin_is_precondition_failed() {
        let app: Router = build_router(create_test_app_state());
        let room = create_room(&app, "105").await;
        let guest = create_guest(&app).await;
        let response = send(
            &app,
            "POST",
            "/reservations",
            Some(reservation_body(&guest, &room, "2025-10-10", "2025-10-12")),
        )
        .await;
        let reservation: ReservationInfo = read_json(response).await;

        let uri = format!("/reservations/{}/checkout", reservation.reservation_id);
        let response = send(&app, "PUT", &uri, None).await;

        assert_eq!(response.status(), HttpStatusCode::PRECONDITION_FAILED);
    }

    #[tokio::test]
    async fn test_unknown_room_returns_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = send(&app, "GET", "/rooms/room_missing", None).await;

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_status_filter_returns_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = send(&app, "GET", "/rooms?status=flooded", None).await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_maintenance_round_trip_over_http() {
        let app: Router = build_router(create_test_app_state());
        let room = create_room(&app, "105").await;

        let open = OpenMaintenanceRequest {
            room_id: room.room_id.clone(),
            issue: String::from("Broken AC"),
            priority: String::from("high"),
        };
        let response = send(
            &app,
            "POST",
            "/maintenance",
            Some(serde_json::to_string(&open).unwrap()),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);
        let task: MaintenanceTaskInfo = read_json(response).await;

        let response = send(&app, "GET", "/maintenance/eligible-rooms", None).await;
        let eligible: ListRoomsResponse = read_json(response).await;
        assert!(eligible.rooms.is_empty());

        let update = UpdateMaintenanceRequest {
            status: String::from("completed"),
            completed_on: Some(String::from("2025-10-10")),
            notes: None,
        };
        let response = send(
            &app,
            "PUT",
            &format!("/maintenance/{}", task.task_id),
            Some(serde_json::to_string(&update).unwrap()),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = send(&app, "GET", "/maintenance?include_completed=true", None).await;
        let listed: ListMaintenanceResponse = read_json(response).await;
        assert_eq!(listed.tasks.len(), 1);
        assert_eq!(listed.tasks[0].status, "completed");
    }

    #[tokio::test]
    async fn test_calendar_and_dashboard_endpoints() {
        let app: Router = build_router(create_test_app_state());
        let room = create_room(&app, "105").await;
        let guest = create_guest(&app).await;
        send(
            &app,
            "POST",
            "/reservations",
            Some(reservation_body(&guest, &room, "2025-10-10", "2025-10-13")),
        )
        .await;

        let response = send(&app, "GET", "/calendar/occupancy?year=2025&month=10", None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let month: OccupancyMonthResponse = read_json(response).await;
        assert_eq!(month.days[12].reservation_count, 0);
        assert_eq!(month.days[11].reservation_count, 1);

        let response = send(&app, "GET", "/calendar/movements?date=2025-10-13", None).await;
        let movements: MovementsResponse = read_json(response).await;
        assert_eq!(movements.checkouts.len(), 1);

        let response = send(&app, "GET", "/movements?period=week", None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = send(&app, "GET", "/dashboard", None).await;
        let dashboard: DashboardResponse = read_json(response).await;
        assert_eq!(dashboard.pending_checkins, 1);
        assert_eq!(dashboard.rooms.reserved, 1);
    }

    #[tokio::test]
    async fn test_audit_timeline_attributes_header_operator() {
        let app: Router = build_router(create_test_app_state());
        create_room(&app, "105").await;

        let response = send(&app, "GET", "/audit/timeline", None).await;
        let timeline: AuditTimelineResponse = read_json(response).await;

        assert_eq!(timeline.events.len(), 1);
        assert_eq!(timeline.events[0].actor_id, "frontdesk-1");
        assert_eq!(timeline.events[0].action_name, "CreateRoom");
    }

    #[tokio::test]
    async fn test_guest_with_reservation_cannot_be_deleted() {
        let app: Router = build_router(create_test_app_state());
        let room = create_room(&app, "105").await;
        let guest = create_guest(&app).await;
        send(
            &app,
            "POST",
            "/reservations",
            Some(reservation_body(&guest, &room, "2025-10-10", "2025-10-12")),
        )
        .await;

        let uri = format!("/guests/{}", guest.guest_id);
        let response = send(&app, "DELETE", &uri, None).await;
        assert_eq!(response.status(), HttpStatusCode::CONFLICT);

        let update = UpdateGuestRequest {
            phone: Some(String::from("+55 11 99999-0000")),
            ..UpdateGuestRequest::default()
        };
        let response = send(
            &app,
            "PUT",
            &uri,
            Some(serde_json::to_string(&update).unwrap()),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let updated: GuestInfo = read_json(response).await;
        assert_eq!(updated.phone.as_deref(), Some("+55 11 99999-0000"));
    }

    #[tokio::test]
    async fn test_unreferenced_guest_is_deleted() {
        let app: Router = build_router(create_test_app_state());
        let guest = create_guest(&app).await;

        let uri = format!("/guests/{}", guest.guest_id);
        let response = send(&app, "DELETE", &uri, None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let removed: GuestInfo = read_json(response).await;
        assert_eq!(removed, guest);

        let response = send(&app, "GET", "/guests", None).await;
        let listed: ListGuestsResponse = read_json(response).await;
        assert!(listed.guests.is_empty());

        let response = send(&app, "DELETE", &uri, None).await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_finance_endpoints() {
        let app: Router = build_router(create_test_app_state());

        let response = send(
            &app,
            "POST",
            "/incomes",
            Some(String::from(
                r#"{"description":"Frigobar","date":"2025-10-05","amount":"35,50","method":"PIX"}"#,
            )),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);

        let response = send(
            &app,
            "POST",
            "/expenses",
            Some(String::from(
                r#"{"description":"Lavanderia","category":"servicos","date":"2025-10-06","amount":12.5}"#,
            )),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);

        let response = send(
            &app,
            "POST",
            "/expenses",
            Some(String::from(
                r#"{"description":"Lavanderia","category":"servicos","date":"2025-10-06","amount":0}"#,
            )),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        let response = send(&app, "GET", "/incomes", None).await;
        let incomes: ListIncomesResponse = read_json(response).await;
        assert_eq!(incomes.incomes.len(), 1);

        let response = send(&app, "GET", "/expenses", None).await;
        let expenses: ListExpensesResponse = read_json(response).await;
        assert_eq!(expenses.expenses.len(), 1);

        let response = send(&app, "GET", "/financial-dashboard", None).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let dashboard: FinancialDashboardResponse = read_json(response).await;
        assert!((dashboard.kpis.gross_revenue - 35.5).abs() < f64::EPSILON);
        assert!((dashboard.kpis.estimated_profit - 23.0).abs() < f64::EPSILON);
        assert_eq!(dashboard.insights, vec!["revenue_recorded", "expenses_recorded"]);
    }

    #[test]
    fn test_missing_actor_header_is_system() {
        let operator = operator_from_headers(&HeaderMap::new());
        assert_eq!(operator, OperatorContext::system());
    }
}
