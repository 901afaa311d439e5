//! Due date and chargeable day calculation.
//!
//! The chargeable period runs from the day after checkout through the due
//! date. Each date is classified as weekday or weekend, observed holidays in
//! the period are counted year by year, and the tool's chargeable-day flags
//! decide which of those days are billed.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AuditStep, ChargeableDays};

use super::{DayType, Holiday, chargeable_period, get_day_type};

/// Observed holidays written into the audit step. Longer periods record only
/// the count past this many dates.
const AUDITED_HOLIDAY_LIMIT: usize = 4;

/// An observed holiday falling inside a chargeable period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedHoliday {
    /// Which holiday.
    pub holiday: Holiday,
    /// The date it is observed on.
    pub date: NaiveDate,
}

/// The result of a chargeable day calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeDaysResult {
    /// Checkout date plus the rental day count.
    pub due_date: NaiveDate,
    /// Weekdays in the chargeable period, holidays included.
    pub weekday_count: u32,
    /// Weekend days in the chargeable period.
    pub weekend_count: u32,
    /// Observed holidays in the chargeable period, in date order.
    pub holidays: Vec<ObservedHoliday>,
    /// Days that will be billed.
    pub charge_day_count: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the due date of a rental.
///
/// Returns `None` when the due date falls outside the representable calendar.
pub fn due_date(checkout_date: NaiveDate, rental_day_count: u32) -> Option<NaiveDate> {
    checkout_date.checked_add_days(Days::new(u64::from(rental_day_count)))
}

/// Calculates the due date and the number of billable days of a rental.
///
/// # Arguments
///
/// * `checkout_date` - The day the tool is checked out (never billed)
/// * `rental_day_count` - Rental duration in days
/// * `chargeable` - Which categories of day the tool bills for
/// * `step_number` - The step number for audit trail sequencing
///
/// # Behavior
///
/// - Weekend days are `rental_day_count` minus the weekday count
/// - Holidays are looked up for every year from the checkout year through
///   the due date year, so periods crossing one or more year boundaries
///   count each observed holiday exactly once
/// - Observed holidays are always weekdays, so holiday exclusions only ever
///   reduce the weekday tally
///
/// # Panics
///
/// Panics if the due date falls outside the representable calendar. The
/// checkout validator rejects such durations.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::calculate_charge_days;
/// use rental_engine::models::ChargeableDays;
/// use chrono::NaiveDate;
///
/// let jackhammer = ChargeableDays { weekday: true, weekend: false, holiday: false };
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
///
/// let result = calculate_charge_days(checkout, 4, jackhammer, 1);
/// assert_eq!(result.due_date, NaiveDate::from_ymd_opt(2020, 7, 6).unwrap());
/// // Friday July 3 is the observed Independence Day, Saturday and Sunday are free.
/// assert_eq!(result.charge_day_count, 1);
/// ```
pub fn calculate_charge_days(
    checkout_date: NaiveDate,
    rental_day_count: u32,
    chargeable: ChargeableDays,
    step_number: u32,
) -> ChargeDaysResult {
    let due_date = due_date(checkout_date, rental_day_count)
        .expect("due date must be validated before calculating charge days");
    debug!(%checkout_date, %due_date, rental_day_count, "Calculated due date");

    let weekday_count = chargeable_period(checkout_date, rental_day_count)
        .filter(|date| get_day_type(*date) == DayType::Weekday)
        .count() as u32;
    let weekend_count = rental_day_count - weekday_count;

    let holidays = observed_holidays_between(checkout_date, due_date);
    let holiday_count = holidays.len() as u32;
    let holiday_exclusions = if chargeable.holiday { 0 } else { holiday_count };

    let charged_weekend_days = if chargeable.weekend { weekend_count } else { 0 };
    let charged_weekdays = if chargeable.weekday {
        weekday_count - holiday_exclusions
    } else {
        0
    };
    let charge_day_count = charged_weekend_days + charged_weekdays;
    debug!(
        weekday_count,
        weekend_count, holiday_count, charge_day_count, "Calculated charge day count"
    );

    let holiday_dates: Vec<String> = holidays
        .iter()
        .take(AUDITED_HOLIDAY_LIMIT)
        .map(|h| format!("{} {}", h.holiday, h.date))
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "charge_days".to_string(),
        rule_name: "Chargeable Day Count".to_string(),
        input: serde_json::json!({
            "checkout_date": checkout_date.to_string(),
            "rental_day_count": rental_day_count,
            "chargeable_on_weekday": chargeable.weekday,
            "chargeable_on_weekend": chargeable.weekend,
            "chargeable_on_holiday": chargeable.holiday,
        }),
        output: serde_json::json!({
            "due_date": due_date.to_string(),
            "weekday_count": weekday_count,
            "weekend_count": weekend_count,
            "observed_holiday_count": holiday_count,
            "observed_holidays": holiday_dates,
            "charge_day_count": charge_day_count,
        }),
        reasoning: format!(
            "{} weekend day(s) charged + {} of {} weekday(s) charged ({} holiday exclusion(s)) = {} charge day(s)",
            charged_weekend_days,
            charged_weekdays,
            weekday_count,
            if chargeable.weekday { holiday_exclusions } else { 0 },
            charge_day_count
        ),
    };

    ChargeDaysResult {
        due_date,
        weekday_count,
        weekend_count,
        holidays,
        charge_day_count,
        audit_step,
    }
}

/// Returns the observed holidays strictly after `checkout_date` and on or
/// before `due_date`, in date order.
fn observed_holidays_between(checkout_date: NaiveDate, due_date: NaiveDate) -> Vec<ObservedHoliday> {
    let mut holidays: Vec<ObservedHoliday> = (checkout_date.year()..=due_date.year())
        .flat_map(|year| {
            Holiday::ALL.into_iter().map(move |holiday| ObservedHoliday {
                holiday,
                date: holiday.observed_date(year),
            })
        })
        .filter(|observed| observed.date > checkout_date && observed.date <= due_date)
        .collect();
    holidays.sort_by_key(|observed| observed.date);
    holidays
}
