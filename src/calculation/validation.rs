//! Checkout request validation.
//!
//! A [`ContractRequest`] is checked in a fixed order, first failure wins:
//! discount percentage, rental day count, then tool code lookup.

use chrono::NaiveDate;
use tracing::warn;

use crate::config::ToolCatalog;
use crate::error::{EngineError, EngineResult};
use crate::models::{ContractRequest, RentalPolicy};

use super::due_date;

/// Largest accepted discount percentage.
pub const MAX_DISCOUNT_PERCENT: i64 = 100;

/// A contract request that passed validation, paired with the policy it
/// resolved to.
///
/// This is the only input a [`RentalAgreement`](crate::models::RentalAgreement)
/// can be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCheckout {
    tool_code: String,
    checkout_date: NaiveDate,
    rental_day_count: u32,
    discount_percent: u32,
    policy: RentalPolicy,
}

impl ValidatedCheckout {
    /// Validates the request's discount and duration and binds it to an
    /// already resolved policy.
    ///
    /// No catalog lookup happens here, so the tool codes of `request` and
    /// `policy` are not compared; agreement construction does that.
    ///
    /// # Example
    ///
    /// ```
    /// use rental_engine::calculation::ValidatedCheckout;
    /// use rental_engine::models::{ChargeableDays, ContractRequest, RentalPolicy};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let request = ContractRequest {
    ///     tool_code: "LADW".to_string(),
    ///     checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
    ///     rental_day_count: 3,
    ///     discount_percent: 10,
    /// };
    /// let policy = RentalPolicy {
    ///     tool_code: "LADW".to_string(),
    ///     tool_type: "Ladder".to_string(),
    ///     brand: "Werner".to_string(),
    ///     daily_charge: Decimal::new(199, 2),
    ///     chargeable_days: ChargeableDays { weekday: true, weekend: true, holiday: false },
    /// };
    ///
    /// let checkout = ValidatedCheckout::new(&request, policy)?;
    /// assert_eq!(checkout.rental_day_count(), 3);
    /// # Ok::<(), rental_engine::error::EngineError>(())
    /// ```
    pub fn new(request: &ContractRequest, policy: RentalPolicy) -> EngineResult<Self> {
        let (rental_day_count, discount_percent) = validate_terms(request)?;

        Ok(Self {
            tool_code: request.tool_code.clone(),
            checkout_date: request.checkout_date,
            rental_day_count,
            discount_percent,
            policy,
        })
    }

    /// The tool code from the request.
    pub fn tool_code(&self) -> &str {
        &self.tool_code
    }

    /// The checkout date from the request.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// The validated rental duration, at least 1.
    pub fn rental_day_count(&self) -> u32 {
        self.rental_day_count
    }

    /// The validated discount percentage, within `0..=100`.
    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }

    /// The resolved rental policy.
    pub fn policy(&self) -> &RentalPolicy {
        &self.policy
    }
}

/// Validates a contract request and resolves its tool through the catalog.
///
/// # Errors
///
/// Checked in order, first failure wins:
/// 1. [`EngineError::InvalidDiscountPercent`] if the discount is outside `0..=100`
/// 2. [`EngineError::InvalidRentalDayCount`] if the duration is below 1 or
///    puts the due date beyond the representable calendar
/// 3. [`EngineError::UnknownToolCode`] if the catalog has no such tool
///
/// Catalog failures propagate unchanged.
pub fn validate_checkout(
    request: &ContractRequest,
    catalog: &dyn ToolCatalog,
) -> EngineResult<ValidatedCheckout> {
    validate_terms(request)?;

    let policy = catalog.lookup(&request.tool_code)?.ok_or_else(|| {
        warn!(tool_code = %request.tool_code, "Unrecognized tool code");
        EngineError::UnknownToolCode {
            code: request.tool_code.clone(),
        }
    })?;

    ValidatedCheckout::new(request, policy)
}

/// Checks the discount percentage and rental day count, in that order.
fn validate_terms(request: &ContractRequest) -> EngineResult<(u32, u32)> {
    let discount_percent = u32::try_from(request.discount_percent)
        .ok()
        .filter(|percent| i64::from(*percent) <= MAX_DISCOUNT_PERCENT)
        .ok_or_else(|| {
            warn!(discount_percent = request.discount_percent, "Discount percent out of range");
            EngineError::InvalidDiscountPercent {
                value: request.discount_percent,
            }
        })?;

    let rental_day_count = u32::try_from(request.rental_day_count)
        .ok()
        .filter(|days| *days >= 1 && due_date(request.checkout_date, *days).is_some())
        .ok_or_else(|| {
            warn!(rental_day_count = request.rental_day_count, "Invalid rental day count");
            EngineError::InvalidRentalDayCount {
                value: request.rental_day_count,
            }
        })?;

    Ok((rental_day_count, discount_percent))
}
