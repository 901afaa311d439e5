//! Request types for the rental API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ContractRequest;

/// Request body for the `/checkout` endpoint.
///
/// Counts are signed so that out-of-range values reach the checkout
/// validator and come back with its message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Case sensitive tool code.
    pub tool_code: String,
    /// Checkout date as `YYYY-MM-DD`.
    pub checkout_date: NaiveDate,
    /// Rental duration in days.
    pub rental_day_count: i64,
    /// Whole-number discount percentage.
    pub discount_percent: i64,
}

impl From<CheckoutRequest> for ContractRequest {
    fn from(req: CheckoutRequest) -> Self {
        ContractRequest {
            tool_code: req.tool_code,
            checkout_date: req.checkout_date,
            rental_day_count: req.rental_day_count,
            discount_percent: req.discount_percent,
        }
    }
}
