//! Rental policy model.
//!
//! A [`RentalPolicy`] is the per-tool billing policy resolved from the tool
//! catalog: what the tool is, what it costs per day, and which kinds of days
//! are billable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which categories of day are billable for a tool.
///
/// # Example
///
/// ```
/// use rental_engine::models::ChargeableDays;
///
/// let ladder = ChargeableDays {
///     weekday: true,
///     weekend: true,
///     holiday: false,
/// };
/// assert!(ladder.weekend);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChargeableDays {
    /// Monday through Friday are billable.
    pub weekday: bool,
    /// Saturday and Sunday are billable.
    pub weekend: bool,
    /// Observed holidays are billable.
    pub holiday: bool,
}

/// The billing policy for a single tool.
///
/// Policies are owned by the catalog and copied into every agreement built
/// from them, so a later catalog change never alters an existing agreement.
///
/// # Example
///
/// ```
/// use rental_engine::models::{ChargeableDays, RentalPolicy};
/// use rust_decimal::Decimal;
///
/// let policy = RentalPolicy {
///     tool_code: "JAKR".to_string(),
///     tool_type: "Jackhammer".to_string(),
///     brand: "Ridgid".to_string(),
///     daily_charge: Decimal::new(299, 2),
///     chargeable_days: ChargeableDays {
///         weekday: true,
///         weekend: false,
///         holiday: false,
///     },
/// };
/// assert_eq!(policy.daily_charge.to_string(), "2.99");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPolicy {
    /// Case sensitive code identifying the tool (e.g. "CHNS").
    pub tool_code: String,
    /// The kind of tool (e.g. "Chainsaw").
    pub tool_type: String,
    /// The tool's brand (e.g. "Stihl").
    pub brand: String,
    /// Charge per billable day, never negative.
    pub daily_charge: Decimal,
    /// Which categories of day are billable.
    pub chargeable_days: ChargeableDays,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn chainsaw() -> RentalPolicy {
        RentalPolicy {
            tool_code: "CHNS".to_string(),
            tool_type: "Chainsaw".to_string(),
            brand: "Stihl".to_string(),
            daily_charge: dec("1.49"),
            chargeable_days: ChargeableDays {
                weekday: true,
                weekend: false,
                holiday: true,
            },
        }
    }

    #[test]
    fn test_policy_serialization_keeps_charge_as_string() {
        let json = serde_json::to_string(&chainsaw()).unwrap();
        assert!(json.contains("\"tool_code\":\"CHNS\""));
        assert!(json.contains("\"daily_charge\":\"1.49\""));
        assert!(json.contains("\"holiday\":true"));
    }

    #[test]
    fn test_policy_deserialization() {
        let json = r#"{
            "tool_code": "LADW",
            "tool_type": "Ladder",
            "brand": "Werner",
            "daily_charge": "1.99",
            "chargeable_days": {"weekday": true, "weekend": true, "holiday": false}
        }"#;

        let policy: RentalPolicy = serde_json::from_str(json).unwrap();
        assert_eq!(policy.tool_code, "LADW");
        assert_eq!(policy.daily_charge, dec("1.99"));
        assert!(policy.chargeable_days.weekend);
        assert!(!policy.chargeable_days.holiday);
    }

    #[test]
    fn test_cloned_policy_is_independent() {
        let original = chainsaw();
        let mut copy = original.clone();
        copy.daily_charge = dec("9.99");
        assert_eq!(original.daily_charge, dec("1.49"));
    }
}
