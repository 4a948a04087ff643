//! HTTP request handlers for the AIRS tax engine API.
//!
//! This module contains the handler functions for all API endpoints:
//! `/assess` returns the tax breakdown for review, and `/file` submits
//! the return and produces a filing record with a confirmation number.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::assess;
use crate::filing::generate_confirmation_number;
use crate::models::{FilingRecord, TaxReturn, Taxpayer};

use super::request::FilingRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/assess", post(assess_handler))
        .route("/file", post(file_handler))
        .with_state(state)
}

/// Handler for POST /assess.
///
/// Accepts a filing request and returns the assessed tax breakdown
/// without filing anything.
async fn assess_handler(
    State(state): State<AppState>,
    payload: Result<Json<FilingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing assessment request");

    let request = match unwrap_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let taxpayer: Taxpayer = request.taxpayer.into();
    if let Err(response) = check_model_class(&state, &taxpayer, correlation_id) {
        return response;
    }

    let tax_return: TaxReturn = request.tax_return.into();
    let assessment = assess(&tax_return, state.config().config());

    info!(
        correlation_id = %correlation_id,
        tin = %taxpayer.tin,
        gross_income = %assessment.income.gross_income,
        net_tax = %assessment.net_tax,
        "Assessment completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(assessment),
    )
        .into_response()
}

/// Handler for POST /file.
///
/// Accepts a filing request, assesses it, and returns a filing record
/// carrying a fresh confirmation number.
async fn file_handler(
    State(state): State<AppState>,
    payload: Result<Json<FilingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing filing request");

    let request = match unwrap_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let taxpayer: Taxpayer = request.taxpayer.into();
    if let Err(response) = check_model_class(&state, &taxpayer, correlation_id) {
        return response;
    }

    let tax_return: TaxReturn = request.tax_return.into();
    let config = state.config().config();
    let assessment = assess(&tax_return, config);

    let tax_year = config.authority().tax_year;
    let record = FilingRecord {
        filing_id: Uuid::new_v4(),
        confirmation_number: generate_confirmation_number(tax_year),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tax_year,
        taxpayer,
        assessment,
    };

    info!(
        correlation_id = %correlation_id,
        tin = %record.taxpayer.tin,
        confirmation_number = %record.confirmation_number,
        net_tax = %record.assessment.net_tax,
        "Return filed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(record),
    )
        .into_response()
}

/// Unwraps the JSON payload, mapping rejections to error responses.
fn unwrap_payload(
    payload: Result<Json<FilingRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<FilingRequest, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Validates the taxpayer's model class against the registry.
fn check_model_class(
    state: &AppState,
    taxpayer: &Taxpayer,
    correlation_id: Uuid,
) -> Result<(), Response> {
    if let Err(err) = state.config().get_model_class(&taxpayer.model_class) {
        warn!(
            correlation_id = %correlation_id,
            model_class = %taxpayer.model_class,
            "Model class not found"
        );
        let api_error: ApiErrorResponse = err.into();
        return Err((
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response());
    }
    Ok(())
}
