//! Day detection and chargeable period enumeration.
//!
//! This module classifies calendar dates as weekdays or weekend days and
//! enumerates the dates of a rental's chargeable period.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for billing.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::DayType;
///
/// assert!(DayType::Saturday.is_weekend());
/// assert!(!DayType::Weekday.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns `true` for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2020-07-04 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2020, 7, 4).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2020-07-06 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2020, 7, 6).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns the dates of the chargeable period, in order.
///
/// The period starts the day after `checkout_date` and ends on the due
/// date, so it holds exactly `rental_day_count` dates. The checkout date
/// itself is never part of it.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::chargeable_period;
/// use chrono::NaiveDate;
///
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let period: Vec<NaiveDate> = chargeable_period(checkout, 3).collect();
///
/// assert_eq!(period.len(), 3);
/// assert_eq!(period[0], NaiveDate::from_ymd_opt(2020, 7, 3).unwrap());
/// assert_eq!(period[2], NaiveDate::from_ymd_opt(2020, 7, 5).unwrap());
/// ```
pub fn chargeable_period(
    checkout_date: NaiveDate,
    rental_day_count: u32,
) -> impl Iterator<Item = NaiveDate> {
    checkout_date
        .iter_days()
        .skip(1)
        .take(rental_day_count as usize)
}
