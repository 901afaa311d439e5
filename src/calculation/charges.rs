//! Rental charge composition.
//!
//! Turns a daily charge, a chargeable day count and a discount percentage
//! into the pre-discount charge, the discount amount and the final charge.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::AuditStep;

/// The monetary fields of a rental agreement.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::ChargeBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = ChargeBreakdown {
///     pre_discount_charge: Decimal::new(299, 2),
///     discount_amount: Decimal::new(150, 2),
///     final_charge: Decimal::new(149, 2),
/// };
/// assert_eq!(
///     breakdown.final_charge,
///     breakdown.pre_discount_charge - breakdown.discount_amount
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// Daily charge times chargeable days, unrounded.
    pub pre_discount_charge: Decimal,
    /// Discount rounded half-up to the cent.
    pub discount_amount: Decimal,
    /// Pre-discount charge minus discount amount.
    pub final_charge: Decimal,
}

/// The result of a charge calculation, including the breakdown and audit step.
#[derive(Debug, Clone)]
pub struct ChargesResult {
    /// The monetary fields.
    pub breakdown: ChargeBreakdown,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Rounds an amount to the nearest cent, ties away from zero.
///
/// The result always carries two decimal places.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::round_half_up_to_cent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_half_up_to_cent(Decimal::from_str("0.525").unwrap());
/// assert_eq!(rounded.to_string(), "0.53");
///
/// let rounded = round_half_up_to_cent(Decimal::from_str("0.5").unwrap());
/// assert_eq!(rounded.to_string(), "0.50");
/// ```
pub fn round_half_up_to_cent(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Calculates the pre-discount charge, discount amount and final charge.
///
/// # Arguments
///
/// * `daily_charge` - Charge per billable day
/// * `charge_day_count` - Number of billable days
/// * `discount_percent` - Whole-number discount in `0..=100`
/// * `step_number` - The step number for audit trail sequencing
///
/// # Rules
///
/// - The pre-discount charge is an exact product; no rounding is applied
/// - The discount is `pre_discount_charge × discount_percent / 100`,
///   rounded half-up to the cent (0.525 becomes 0.53, never 0.52)
/// - The final charge is the pre-discount charge minus the rounded discount
///
/// # Example
///
/// ```
/// use rental_engine::calculation::calculate_charges;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_charges(Decimal::from_str("1.05").unwrap(), 1, 50, 2);
/// assert_eq!(result.breakdown.discount_amount, Decimal::from_str("0.53").unwrap());
/// assert_eq!(result.breakdown.final_charge, Decimal::from_str("0.52").unwrap());
/// ```
pub fn calculate_charges(
    daily_charge: Decimal,
    charge_day_count: u32,
    discount_percent: u32,
    step_number: u32,
) -> ChargesResult {
    let pre_discount_charge = daily_charge * Decimal::from(charge_day_count);
    debug!(%pre_discount_charge, "Calculated pre-discount charge");

    let unrounded_discount =
        pre_discount_charge * Decimal::from(discount_percent) / Decimal::ONE_HUNDRED;
    let discount_amount = round_half_up_to_cent(unrounded_discount);
    debug!(%discount_amount, "Calculated discount amount");

    let final_charge = pre_discount_charge - discount_amount;
    debug!(%final_charge, "Calculated final charge");

    let audit_step = AuditStep {
        step_number,
        rule_id: "charges".to_string(),
        rule_name: "Charge Composition".to_string(),
        input: serde_json::json!({
            "daily_charge": daily_charge.to_string(),
            "charge_day_count": charge_day_count,
            "discount_percent": discount_percent,
        }),
        output: serde_json::json!({
            "pre_discount_charge": pre_discount_charge.to_string(),
            "unrounded_discount": unrounded_discount.normalize().to_string(),
            "discount_amount": discount_amount.to_string(),
            "final_charge": final_charge.to_string(),
        }),
        reasoning: format!(
            "${} × {} day(s) = ${}; {}% discount = ${} rounded half-up to ${}; final ${}",
            daily_charge,
            charge_day_count,
            pre_discount_charge,
            discount_percent,
            unrounded_discount.normalize(),
            discount_amount,
            final_charge
        ),
    };

    ChargesResult {
        breakdown: ChargeBreakdown {
            pre_discount_charge,
            discount_amount,
            final_charge,
        },
        audit_step,
    }
}
