//! Contract request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The customer's choices for a single checkout attempt.
///
/// Counts are signed so out-of-range input reaches the checkout validator
/// and is rejected with a readable message rather than failing earlier.
///
/// # Example
///
/// ```
/// use rental_engine::models::ContractRequest;
/// use chrono::NaiveDate;
///
/// let request = ContractRequest {
///     tool_code: "JAKD".to_string(),
///     checkout_date: NaiveDate::from_ymd_opt(2015, 9, 3).unwrap(),
///     rental_day_count: 6,
///     discount_percent: 0,
/// };
/// assert_eq!(request.tool_code, "JAKD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRequest {
    /// Case sensitive code of the tool being rented.
    pub tool_code: String,
    /// The day the tool leaves the store. Never billable.
    pub checkout_date: NaiveDate,
    /// Number of days the tool is rented for, must be at least 1.
    pub rental_day_count: i64,
    /// Whole-number discount percentage, must be within `0..=100`.
    pub discount_percent: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_contract_request() {
        let json = r#"{
            "tool_code": "LADW",
            "checkout_date": "2020-07-02",
            "rental_day_count": 3,
            "discount_percent": 10
        }"#;

        let request: ContractRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.tool_code, "LADW");
        assert_eq!(
            request.checkout_date,
            NaiveDate::from_ymd_opt(2020, 7, 2).unwrap()
        );
        assert_eq!(request.rental_day_count, 3);
        assert_eq!(request.discount_percent, 10);
    }

    #[test]
    fn test_negative_values_deserialize() {
        let json = r#"{
            "tool_code": "JAKR",
            "checkout_date": "2015-09-03",
            "rental_day_count": -2,
            "discount_percent": -1
        }"#;

        let request: ContractRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.rental_day_count, -2);
        assert_eq!(request.discount_percent, -1);
    }
}
