//! HTTP request handlers for the tool rental API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{ObservedHoliday, get_rental_period, holidays_for_year};
use crate::checkout::checkout;
use crate::models::{RentalAgreement, RentalPeriod, Tool};

use super::request::{CheckoutRequest, RentalPeriodRequest};
use super::response::{ApiError, ApiErrorResponse, ErrorCode};
use super::state::AppState;

/// Longest rental, in days, accepted over HTTP (a little over 100 years).
///
/// Counting is linear in the rental length. The library functions accept any
/// length the calendar can represent.
pub const MAX_RENTAL_DAYS: i64 = 36_525;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/checkout", post(checkout_handler))
        .route("/rental-period", post(rental_period_handler))
        .route("/tools", get(list_tools_handler))
        .route("/holidays/:year", get(holidays_handler))
        .with_state(state)
}

/// Handler for POST /checkout.
///
/// Validates the checkout parameters and returns the priced rental agreement.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<RentalAgreement>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing checkout request");

    let Json(request) = payload.map_err(|rejection| reject_json(correlation_id, rejection))?;
    check_rental_length(correlation_id, request.rental_days)?;

    let start_time = Instant::now();
    let agreement = checkout(
        state.catalog(),
        &request.tool_code,
        request.rental_days,
        request.discount_percent,
        request.checkout_date,
    )
    .map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            tool = %request.tool_code,
            error = %err,
            "Checkout rejected"
        );
        ApiErrorResponse::from(err)
    })?;

    info!(
        correlation_id = %correlation_id,
        tool = %agreement.tool_code,
        charge_days = agreement.charge_days,
        final_charge = %agreement.final_charge,
        duration_us = start_time.elapsed().as_micros(),
        "Checkout completed successfully"
    );

    Ok(Json(agreement))
}

/// Handler for POST /rental-period.
///
/// Runs the chargeable-days calculation for an explicit charge policy.
async fn rental_period_handler(
    payload: Result<Json<RentalPeriodRequest>, JsonRejection>,
) -> Result<Json<RentalPeriod>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rental period request");

    let Json(request) = payload.map_err(|rejection| reject_json(correlation_id, rejection))?;
    check_rental_length(correlation_id, request.rental_days)?;

    let period = get_rental_period(request.checkout_date, request.rental_days, request.policy())
        .map_err(|err| {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rental period rejected"
            );
            ApiErrorResponse::from(err)
        })?;

    info!(
        correlation_id = %correlation_id,
        rental_days = period.rental_days(),
        charge_days = period.charge_days(),
        "Rental period calculated"
    );

    Ok(Json(period))
}

/// Handler for GET /tools.
async fn list_tools_handler(State(state): State<AppState>) -> Json<Vec<Tool>> {
    Json(
        state
            .catalog()
            .find_all_tools()
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// Handler for GET /holidays/{year}.
async fn holidays_handler(Path(year): Path<i32>) -> Json<Vec<ObservedHoliday>> {
    Json(holidays_for_year(year))
}

/// Rejects rentals longer than [`MAX_RENTAL_DAYS`].
///
/// Short and negative lengths are left to the calculation's own validation.
fn check_rental_length(correlation_id: Uuid, rental_days: i64) -> Result<(), ApiErrorResponse> {
    if rental_days <= MAX_RENTAL_DAYS {
        return Ok(());
    }
    warn!(
        correlation_id = %correlation_id,
        rental_days,
        "Rental length over limit"
    );
    Err(ApiError::new(
        ErrorCode::ValidationError,
        format!(
            "Rental days must not exceed {} (got {})",
            MAX_RENTAL_DAYS, rental_days
        ),
    )
    .details("Check the 'rental_days' field of the request")
    .into())
}

/// Converts a JSON extraction failure into a `400` error response.
fn reject_json(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new(ErrorCode::ValidationError, body_text)
            } else {
                ApiError::new(ErrorCode::MalformedJson, body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::new(
                ErrorCode::MalformedJson,
                format!("Invalid JSON syntax: {}", err),
            )
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            ErrorCode::MissingContentType,
            "Content-Type must be application/json",
        ),
        _ => ApiError::new(ErrorCode::MalformedJson, "Failed to parse request body"),
    };
    error.into()
}
