//! Rental agreement model.
//!
//! A [`RentalAgreement`] is the immutable outcome of a successful checkout.
//! Every derived value and the rendered report are computed once when the
//! agreement is built; reads never recompute.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::calculation::{ValidatedCheckout, calculate_charge_days, calculate_charges};
use crate::error::{EngineError, EngineResult};
use crate::report::render_report;

use super::{AuditTrace, ChargeableDays};

/// A priced rental agreement.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::ValidatedCheckout;
/// use rental_engine::models::{ChargeableDays, ContractRequest, RentalAgreement, RentalPolicy};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = ContractRequest {
///     tool_code: "JAKR".to_string(),
///     checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
///     rental_day_count: 4,
///     discount_percent: 50,
/// };
/// let policy = RentalPolicy {
///     tool_code: "JAKR".to_string(),
///     tool_type: "Jackhammer".to_string(),
///     brand: "Ridgid".to_string(),
///     daily_charge: Decimal::new(299, 2),
///     chargeable_days: ChargeableDays { weekday: true, weekend: false, holiday: false },
/// };
///
/// let agreement = RentalAgreement::from_validated(&ValidatedCheckout::new(&request, policy)?)?;
/// assert_eq!(agreement.charge_day_count(), 1);
/// assert_eq!(agreement.final_charge(), Decimal::new(149, 2));
/// # Ok::<(), rental_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalAgreement {
    tool_code: String,
    tool_type: String,
    tool_brand: String,
    daily_charge: Decimal,
    chargeable_days: ChargeableDays,
    rental_day_count: u32,
    checkout_date: NaiveDate,
    discount_percent: u32,
    due_date: NaiveDate,
    charge_day_count: u32,
    pre_discount_charge: Decimal,
    discount_amount: Decimal,
    final_charge: Decimal,
    audit_trace: AuditTrace,
    #[serde(skip)]
    report: String,
}

impl RentalAgreement {
    /// Builds an agreement from a validated checkout.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ToolCodeMismatch`] if the request's tool code
    /// differs from the resolved policy's. That is a wiring defect, not bad
    /// user input, and no agreement is produced.
    pub fn from_validated(checkout: &ValidatedCheckout) -> EngineResult<Self> {
        let policy = checkout.policy();
        if checkout.tool_code() != policy.tool_code {
            return Err(EngineError::ToolCodeMismatch {
                request_code: checkout.tool_code().to_string(),
                policy_code: policy.tool_code.clone(),
            });
        }

        let mut audit_trace = AuditTrace::default();

        let days = calculate_charge_days(
            checkout.checkout_date(),
            checkout.rental_day_count(),
            policy.chargeable_days,
            audit_trace.next_step_number(),
        );
        audit_trace.push(days.audit_step);

        let charges = calculate_charges(
            policy.daily_charge,
            days.charge_day_count,
            checkout.discount_percent(),
            audit_trace.next_step_number(),
        );
        audit_trace.push(charges.audit_step);

        let mut agreement = Self {
            tool_code: policy.tool_code.clone(),
            tool_type: policy.tool_type.clone(),
            tool_brand: policy.brand.clone(),
            daily_charge: policy.daily_charge,
            chargeable_days: policy.chargeable_days,
            rental_day_count: checkout.rental_day_count(),
            checkout_date: checkout.checkout_date(),
            discount_percent: checkout.discount_percent(),
            due_date: days.due_date,
            charge_day_count: days.charge_day_count,
            pre_discount_charge: charges.breakdown.pre_discount_charge,
            discount_amount: charges.breakdown.discount_amount,
            final_charge: charges.breakdown.final_charge,
            audit_trace,
            report: String::new(),
        };
        agreement.report = render_report(&agreement);
        debug!(
            tool_code = %agreement.tool_code,
            final_charge = %agreement.final_charge,
            "Built rental agreement"
        );

        Ok(agreement)
    }

    /// Code of the rented tool.
    pub fn tool_code(&self) -> &str {
        &self.tool_code
    }

    /// Kind of the rented tool.
    pub fn tool_type(&self) -> &str {
        &self.tool_type
    }

    /// Brand of the rented tool.
    pub fn tool_brand(&self) -> &str {
        &self.tool_brand
    }

    /// Charge per billable day.
    pub fn daily_charge(&self) -> Decimal {
        self.daily_charge
    }

    /// Which categories of day were billable.
    pub fn chargeable_days(&self) -> ChargeableDays {
        self.chargeable_days
    }

    /// Rental duration in days.
    pub fn rental_day_count(&self) -> u32 {
        self.rental_day_count
    }

    /// The day the tool left the store.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// Whole-number discount percentage.
    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }

    /// Checkout date plus the rental day count.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Number of billed days, never more than the rental day count.
    pub fn charge_day_count(&self) -> u32 {
        self.charge_day_count
    }

    /// Daily charge times charge days.
    pub fn pre_discount_charge(&self) -> Decimal {
        self.pre_discount_charge
    }

    /// Discount rounded half-up to the cent.
    pub fn discount_amount(&self) -> Decimal {
        self.discount_amount
    }

    /// Pre-discount charge minus discount amount.
    pub fn final_charge(&self) -> Decimal {
        self.final_charge
    }

    /// The calculation steps that produced this agreement.
    pub fn audit_trace(&self) -> &AuditTrace {
        &self.audit_trace
    }

    /// The rendered report.
    pub fn report(&self) -> &str {
        &self.report
    }
}

impl std::fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.report)
    }
}
