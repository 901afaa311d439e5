//! Rental agreement report rendering.
//!
//! The report is the customer-facing text form of a [`RentalAgreement`]:
//! twelve labelled lines, each terminated by `\n`. Amounts are US dollars
//! with thousands grouping, percentages are whole numbers and dates use
//! `MM/DD/YY`.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::round_half_up_to_cent;
use crate::models::RentalAgreement;

/// Renders the report for an agreement.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::ValidatedCheckout;
/// use rental_engine::models::{ChargeableDays, ContractRequest, RentalAgreement, RentalPolicy};
/// use rental_engine::report::render_report;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = ContractRequest {
///     tool_code: "CHNS".to_string(),
///     checkout_date: NaiveDate::from_ymd_opt(2015, 7, 2).unwrap(),
///     rental_day_count: 5,
///     discount_percent: 25,
/// };
/// let policy = RentalPolicy {
///     tool_code: "CHNS".to_string(),
///     tool_type: "Chainsaw".to_string(),
///     brand: "Stihl".to_string(),
///     daily_charge: Decimal::new(149, 2),
///     chargeable_days: ChargeableDays { weekday: true, weekend: false, holiday: true },
/// };
/// let checkout = ValidatedCheckout::new(&request, policy)?;
/// let agreement = RentalAgreement::from_validated(&checkout)?;
///
/// let report = render_report(&agreement);
/// assert!(report.starts_with("Tool code: CHNS\n"));
/// assert!(report.ends_with("Final charge: $3.35\n"));
/// # Ok::<(), rental_engine::error::EngineError>(())
/// ```
pub fn render_report(agreement: &RentalAgreement) -> String {
    format!(
        "Tool code: {}\n\
         Tool type: {}\n\
         Tool brand: {}\n\
         Rental days: {}\n\
         Check out date: {}\n\
         Due date: {}\n\
         Daily rental charge: {}\n\
         Charge days: {}\n\
         Pre-discount charge: {}\n\
         Discount percent: {}\n\
         Discount amount: {}\n\
         Final charge: {}\n",
        agreement.tool_code(),
        agreement.tool_type(),
        agreement.tool_brand(),
        agreement.rental_day_count(),
        format_date(agreement.checkout_date()),
        format_date(agreement.due_date()),
        format_currency(agreement.daily_charge()),
        agreement.charge_day_count(),
        format_currency(agreement.pre_discount_charge()),
        format_percent(agreement.discount_percent()),
        format_currency(agreement.discount_amount()),
        format_currency(agreement.final_charge()),
    )
}

/// Formats an amount as US dollars, e.g. `$1,234.50`.
///
/// Amounts with more than two decimal places are rounded half-up to the
/// cent first.
///
/// # Example
///
/// ```
/// use rental_engine::report::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(149, 2)), "$1.49");
/// assert_eq!(format_currency(Decimal::new(123450, 2)), "$1,234.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_half_up_to_cent(amount);
    let digits = rounded.abs().to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Formats a whole-number percentage, e.g. `25%`.
pub fn format_percent(percent: u32) -> String {
    format!("{}%", percent)
}

/// Formats a date as `MM/DD/YY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::ValidatedCheckout;
    use crate::models::{ChargeableDays, ContractRequest, RentalPolicy};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn chainsaw_agreement() -> RentalAgreement {
        let request = ContractRequest {
            tool_code: "CHNS".to_string(),
            checkout_date: make_date("2015-07-02"),
            rental_day_count: 5,
            discount_percent: 25,
        };
        let policy = RentalPolicy {
            tool_code: "CHNS".to_string(),
            tool_type: "Chainsaw".to_string(),
            brand: "Stihl".to_string(),
            daily_charge: dec("1.49"),
            chargeable_days: ChargeableDays {
                weekday: true,
                weekend: false,
                holiday: true,
            },
        };
        let checkout = ValidatedCheckout::new(&request, policy).unwrap();
        RentalAgreement::from_validated(&checkout).unwrap()
    }

    #[test]
    fn test_render_chainsaw_report() {
        let expected = "Tool code: CHNS\n\
                        Tool type: Chainsaw\n\
                        Tool brand: Stihl\n\
                        Rental days: 5\n\
                        Check out date: 07/02/15\n\
                        Due date: 07/07/15\n\
                        Daily rental charge: $1.49\n\
                        Charge days: 3\n\
                        Pre-discount charge: $4.47\n\
                        Discount percent: 25%\n\
                        Discount amount: $1.12\n\
                        Final charge: $3.35\n";

        assert_eq!(render_report(&chainsaw_agreement()), expected);
    }

    #[test]
    fn test_report_has_twelve_terminated_lines() {
        let report = render_report(&chainsaw_agreement());
        assert_eq!(report.matches('\n').count(), 12);
        assert!(report.ends_with('\n'));
        assert!(!report.ends_with("\n\n"));
    }

    #[test]
    fn test_format_currency_pads_cents() {
        assert_eq!(format_currency(dec("0")), "$0.00");
        assert_eq!(format_currency(dec("3.5")), "$3.50");
        assert_eq!(format_currency(dec("0.06")), "$0.06");
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(dec("999.99")), "$999.99");
        assert_eq!(format_currency(dec("1000")), "$1,000.00");
        assert_eq!(format_currency(dec("1234.5")), "$1,234.50");
        assert_eq!(format_currency(dec("1234567.89")), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_rounds_half_up() {
        assert_eq!(format_currency(dec("0.525")), "$0.53");
        assert_eq!(format_currency(dec("2.994")), "$2.99");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec("-1234.5")), "-$1,234.50");
        assert_eq!(format_currency(dec("-0.001")), "$0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0), "0%");
        assert_eq!(format_percent(25), "25%");
        assert_eq!(format_percent(100), "100%");
    }

    #[test]
    fn test_format_date_two_digit_fields() {
        assert_eq!(format_date(make_date("2015-07-02")), "07/02/15");
        assert_eq!(format_date(make_date("2020-12-31")), "12/31/20");
        assert_eq!(format_date(make_date("2105-01-09")), "01/09/05");
    }
}
