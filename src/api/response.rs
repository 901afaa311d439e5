//! Response types for the rental API.
//!
//! This module defines the success and error response bodies and maps
//! engine errors onto HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::RentalAgreement;

/// Response body for a successful checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    /// Identifier the agreement was stored under.
    pub agreement_id: Uuid,
    /// The priced agreement.
    pub agreement: RentalAgreement,
    /// The agreement rendered as text.
    pub report: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(code: &str, error: &EngineError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::new(code, error.to_string()),
        }
    }

    fn internal(code: &str, message: &str, error: &EngineError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::with_details(code, message, error.to_string()),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match &error {
            EngineError::InvalidDiscountPercent { .. } => {
                Self::bad_request("INVALID_DISCOUNT_PERCENT", &error)
            }
            EngineError::InvalidRentalDayCount { .. } => {
                Self::bad_request("INVALID_RENTAL_DAY_COUNT", &error)
            }
            EngineError::UnknownToolCode { .. } => Self::bad_request("UNKNOWN_TOOL_CODE", &error),
            EngineError::ToolCodeMismatch { .. } => {
                Self::internal("CONSISTENCY_ERROR", "Catalog returned the wrong tool", &error)
            }
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                Self::internal("CONFIG_ERROR", "Tool catalog unavailable", &error)
            }
            EngineError::StoreError { .. } => {
                Self::internal("STORE_ERROR", "Agreement could not be saved", &error)
            }
        }
    }
}
