use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use shared::{AddExpenseRequest, AddExpenseResponse, ExpenseListResponse};
use tracing::info;

use crate::domain::{ExpenseService, ReportService};

/// Application state containing the domain services.
///
/// Owns the session: the ledger shared by both services lives exactly as long
/// as this state does.
#[derive(Clone)]
pub struct AppState {
    pub expense_service: ExpenseService,
    pub report_service: ReportService,
}

impl AppState {
    pub fn new(expense_service: ExpenseService, report_service: ReportService) -> Self {
        Self {
            expense_service,
            report_service,
        }
    }
}

/// All `/api` routes; the entrypoint nests this under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/expenses", post(add_expense).get(list_expenses))
        .route("/summary", get(overall_summary))
        .route("/reports/months", get(list_months))
        .route("/reports/monthly", get(monthly_report))
        .route("/reports/budget", get(budget_status))
}

/// Query parameters for the monthly report endpoint
#[derive(Deserialize, Debug)]
pub struct MonthlyReportQuery {
    pub month: String,
}

/// Query parameters for the budget status endpoint
#[derive(Deserialize, Debug)]
pub struct BudgetStatusQuery {
    pub month: String,
    pub budget: f64,
}

/// Axum handler for POST /api/expenses
pub async fn add_expense(
    State(state): State<AppState>,
    Json(request): Json<AddExpenseRequest>,
) -> impl IntoResponse {
    info!("POST /api/expenses - request: {:?}", request);

    match state.expense_service.add_expense(request).await {
        Ok(entry) => {
            let response = AddExpenseResponse {
                entry,
                success_message: "Expense added successfully".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        // Validation failures are client errors; the message is form-ready.
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}

/// Axum handler for GET /api/expenses
pub async fn list_expenses(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/expenses");

    let entries = state.expense_service.list_expenses().await;
    (StatusCode::OK, Json(ExpenseListResponse { entries })).into_response()
}

/// Axum handler for GET /api/summary
pub async fn overall_summary(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/summary");

    let summary = state.report_service.overall_summary().await;
    (StatusCode::OK, Json(summary)).into_response()
}

/// Axum handler for GET /api/reports/months
pub async fn list_months(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/reports/months");

    let months = state.report_service.months_present().await;
    (StatusCode::OK, Json(months)).into_response()
}

/// Axum handler for GET /api/reports/monthly
pub async fn monthly_report(
    State(state): State<AppState>,
    Query(query): Query<MonthlyReportQuery>,
) -> impl IntoResponse {
    info!("GET /api/reports/monthly - query: {:?}", query);

    let report = state.report_service.monthly_report(&query.month).await;
    (StatusCode::OK, Json(report)).into_response()
}

/// Axum handler for GET /api/reports/budget
pub async fn budget_status(
    State(state): State<AppState>,
    Query(query): Query<BudgetStatusQuery>,
) -> impl IntoResponse {
    info!("GET /api/reports/budget - query: {:?}", query);

    let status = state
        .report_service
        .budget_status(&query.month, query.budget)
        .await;
    (StatusCode::OK, Json(status)).into_response()
}
