//! HTTP request handlers for the rental API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::ContractRequest;

use super::request::CheckoutRequest;
use super::response::{ApiError, ApiErrorResponse, CheckoutResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tools", get(list_tools_handler))
        .route("/checkout", post(checkout_handler))
        .route("/agreements/:id", get(get_agreement_handler))
        .with_state(state)
}

/// Handler for GET /tools.
///
/// Returns every rentable tool's policy, sorted by tool code.
async fn list_tools_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.point_of_sale().list_tools() {
        Ok(tools) => {
            info!(correlation_id = %correlation_id, tools = tools.len(), "Listed tools");
            json_response(StatusCode::OK, tools)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /checkout.
///
/// Accepts a checkout request and returns the stored rental agreement with
/// its rendered report.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing checkout request");

    let request: ContractRequest = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    // Checkout is CPU bound for long rentals
    let start_time = Instant::now();
    let outcome =
        tokio::task::spawn_blocking(move || state.point_of_sale().checkout(&request)).await;

    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Checkout task failed");
            return json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("CHECKOUT_FAILED", "Checkout did not complete"),
            );
        }
    };

    match result {
        Ok(checkout) => {
            info!(
                correlation_id = %correlation_id,
                agreement_id = %checkout.agreement_id,
                tool_code = %checkout.agreement.tool_code(),
                final_charge = %checkout.agreement.final_charge(),
                duration_us = start_time.elapsed().as_micros(),
                "Checkout completed successfully"
            );
            let report = checkout.agreement.report().to_string();
            json_response(
                StatusCode::OK,
                CheckoutResponse {
                    agreement_id: checkout.agreement_id,
                    agreement: checkout.agreement,
                    report,
                },
            )
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /agreements/:id.
async fn get_agreement_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.point_of_sale().store().get(id) {
        Ok(Some(stored)) => json_response(StatusCode::OK, stored),
        Ok(None) => {
            warn!(correlation_id = %correlation_id, agreement_id = %id, "Agreement not found");
            json_response(
                StatusCode::NOT_FOUND,
                ApiError::new("AGREEMENT_NOT_FOUND", format!("No agreement with id {}", id)),
            )
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Maps a JSON extraction failure to an API error.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    if err.is_validation() {
        warn!(correlation_id = %correlation_id, error = %err, "Checkout rejected");
    } else {
        warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    }
    ApiErrorResponse::from(err).into_response()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
