//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, info, warn};

use crate::catalog::Interest;
use crate::domain::{BudgetTier, TransportMode};
use crate::planner::{PlanError, PlanRequest, Planner};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cities", get(list_cities))
        .route("/trip/plan", post(plan_trip))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List catalog cities, optionally filtered by interest.
async fn list_cities(
    State(state): State<AppState>,
    Query(query): Query<CitiesQuery>,
) -> Result<Json<CitiesResponse>, AppError> {
    let interests = match query.interest.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => raw
            .split(',')
            .map(|s| {
                Interest::parse(s).ok_or_else(|| AppError::BadRequest {
                    message: format!("Unknown interest: {}", s.trim()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let cities = if interests.is_empty() {
        state.catalog.cities().iter().map(CityResult::from_city).collect()
    } else {
        state
            .catalog
            .cities_for_interests(&interests)
            .into_iter()
            .map(CityResult::from_city)
            .collect()
    };

    Ok(Json(CitiesResponse { cities }))
}

/// Plan a trip.
async fn plan_trip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TripPlanResult>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanTripRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, body = %String::from_utf8_lossy(&body), "Rejected plan request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let tier = req
        .tier
        .as_deref()
        .map(str::parse::<BudgetTier>)
        .transpose()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let (modes, ignored) = TransportMode::parse_all(&req.transport_modes);
    if !ignored.is_empty() {
        warn!(modes = ?ignored, "Ignoring unknown transport modes");
    }

    let mut request = PlanRequest::new(req.duration_days, req.total_budget, modes);
    request.seed = req.seed;
    request.tier = tier;

    let planner = Planner::new(&state.catalog, &state.config);
    let plan = planner.plan(&request)?;

    info!(
        days = plan.days().len(),
        seed = plan.seed,
        fallback = plan.is_fallback,
        "Served trip plan"
    );
    Ok(Json(TripPlanResult::from_plan(&plan, ignored)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(message) => AppError::BadRequest { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
