//! HTTP request handlers for the forecast API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{Credentials, verify_credentials};
use crate::calculation::{ENGINE_VERSION, forecast_employee, forecast_grant};

use super::request::{ForecastRequest, GrantForecastRequest, effective_schedule};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Header carrying the username for restricted deployments.
pub const USER_HEADER: &str = "x-forecast-user";

/// Header carrying the password for restricted deployments.
pub const PASSWORD_HEADER: &str = "x-forecast-password";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/forecast", post(forecast_handler))
        .route("/forecast/grant", post(grant_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let program = state.config().program();
    Json(serde_json::json!({
        "status": "ok",
        "program": program.code,
        "version": program.version,
        "engine_version": ENGINE_VERSION
    }))
}

/// Handler for POST /forecast.
///
/// Forecasts a single employee and returns a `ForecastReport`.
async fn forecast_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing forecast request");

    if let Err(err) = authorize(&state, &headers, correlation_id) {
        return error_response(err);
    }

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(rejection_to_error(
                rejection,
                correlation_id,
            )));
        }
    };

    let schedule = match effective_schedule(
        state.config().rate_schedule(),
        request.assumptions.as_ref(),
    ) {
        Ok(schedule) => schedule,
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error.message, "Invalid assumptions");
            return error_response(ApiErrorResponse::bad_request(error));
        }
    };
    let scenario = match request.employee.into_scenario(request.grant) {
        Ok(scenario) => scenario,
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error.message, "Invalid employee");
            return error_response(ApiErrorResponse::bad_request(error));
        }
    };

    let start_time = Instant::now();
    match forecast_employee(&scenario, &schedule) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                grade = %scenario.grade,
                days = report.breakdown.proration.days,
                total = %report.breakdown.total,
                duration_us = start_time.elapsed().as_micros(),
                "Forecast completed successfully"
            );
            json_response(StatusCode::OK, &report)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Forecast failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /forecast/grant.
///
/// Forecasts every employee on a grant and returns a `GrantSummary`.
async fn grant_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<GrantForecastRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing grant forecast request");

    if let Err(err) = authorize(&state, &headers, correlation_id) {
        return error_response(err);
    }

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(rejection_to_error(
                rejection,
                correlation_id,
            )));
        }
    };

    if request.employees.is_empty() {
        return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
            "employees must not be empty",
        )));
    }

    let schedule = match effective_schedule(
        state.config().rate_schedule(),
        request.assumptions.as_ref(),
    ) {
        Ok(schedule) => schedule,
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error.message, "Invalid assumptions");
            return error_response(ApiErrorResponse::bad_request(error));
        }
    };
    let grant = request.grant;
    let scenarios = match request
        .employees
        .into_iter()
        .map(|employee| employee.into_scenario(grant))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(scenarios) => scenarios,
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error.message, "Invalid employee");
            return error_response(ApiErrorResponse::bad_request(error));
        }
    };

    let start_time = Instant::now();
    match forecast_grant(&scenarios, &schedule) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                employees = summary.employees.len(),
                grand_total = %summary.grand_total,
                duration_us = start_time.elapsed().as_micros(),
                "Grant forecast completed successfully"
            );
            json_response(StatusCode::OK, &summary)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Grant forecast failed");
            error_response(err.into())
        }
    }
}

/// Checks the credential headers when the deployment is restricted.
fn authorize(
    state: &AppState,
    headers: &HeaderMap,
    correlation_id: Uuid,
) -> Result<(), ApiErrorResponse> {
    let Some(stored) = state.config().credential() else {
        return Ok(());
    };

    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let authorized = match (header_value(USER_HEADER), header_value(PASSWORD_HEADER)) {
        (Some(username), Some(password)) => {
            verify_credentials(&Credentials { username, password }, stored)
        }
        _ => false,
    };

    if authorized {
        Ok(())
    } else {
        warn!(correlation_id = %correlation_id, "Rejected unauthorized request");
        Err(ApiErrorResponse {
            status: StatusCode::UNAUTHORIZED,
            error: ApiError::unauthorized(),
        })
    }
}

/// Maps a JSON extraction failure to an API error.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    error.into_response()
}
