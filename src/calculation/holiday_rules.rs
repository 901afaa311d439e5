//! Observed holiday rules.
//!
//! Two holidays are recognized for billing. Independence Day moves off the
//! weekend to the nearest weekday; Labor Day is the first Monday of September
//! and never needs moving.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A holiday recognized for billing purposes.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::Holiday;
/// use chrono::NaiveDate;
///
/// // July 4, 2020 was a Saturday, so it was observed on Friday July 3.
/// assert_eq!(
///     Holiday::IndependenceDay.observed_date(2020),
///     NaiveDate::from_ymd_opt(2020, 7, 3).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    /// July 4, observed on the nearest weekday.
    IndependenceDay,
    /// First Monday in September.
    LaborDay,
}

impl Holiday {
    /// Every recognized holiday.
    pub const ALL: [Holiday; 2] = [Holiday::IndependenceDay, Holiday::LaborDay];

    /// Returns the date this holiday is observed in `year`.
    ///
    /// # Panics
    ///
    /// Panics if `year` lies outside the range chrono can represent.
    pub fn observed_date(self, year: i32) -> NaiveDate {
        match self {
            Holiday::IndependenceDay => observed_independence_day(year),
            Holiday::LaborDay => labor_day(year),
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Holiday::IndependenceDay => write!(f, "Independence Day"),
            Holiday::LaborDay => write!(f, "Labor Day"),
        }
    }
}

/// Returns the observed Independence Day for `year`.
///
/// July 4 on a weekday is observed as is. A Saturday holiday is observed on
/// the preceding Friday and a Sunday holiday on the following Monday, so the
/// result is always a weekday.
///
/// # Panics
///
/// Panics if `year` lies outside the range chrono can represent.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::observed_independence_day;
/// use chrono::NaiveDate;
///
/// // Sunday July 4, 2021 was observed on Monday July 5.
/// assert_eq!(
///     observed_independence_day(2021),
///     NaiveDate::from_ymd_opt(2021, 7, 5).unwrap()
/// );
/// ```
pub fn observed_independence_day(year: i32) -> NaiveDate {
    let holiday = NaiveDate::from_ymd_opt(year, 7, 4).expect("July 4 exists in every supported year");

    match holiday.weekday() {
        Weekday::Sat => holiday - Days::new(1),
        Weekday::Sun => holiday + Days::new(1),
        _ => holiday,
    }
}

/// Returns Labor Day, the first Monday of September, for `year`.
///
/// # Panics
///
/// Panics if `year` lies outside the range chrono can represent.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::labor_day;
/// use chrono::NaiveDate;
///
/// assert_eq!(labor_day(2015), NaiveDate::from_ymd_opt(2015, 9, 7).unwrap());
/// ```
pub fn labor_day(year: i32) -> NaiveDate {
    NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1)
        .expect("September has a first Monday in every supported year")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_independence_day_on_weekday_is_unchanged() {
        // 2024-07-04 is a Thursday
        assert_eq!(observed_independence_day(2024), make_date("2024-07-04"));
    }

    #[test]
    fn test_independence_day_on_saturday_moves_to_friday() {
        // 2020-07-04 is a Saturday
        assert_eq!(observed_independence_day(2020), make_date("2020-07-03"));
        // 2015-07-04 is a Saturday
        assert_eq!(observed_independence_day(2015), make_date("2015-07-03"));
    }

    #[test]
    fn test_independence_day_on_sunday_moves_to_monday() {
        // 2021-07-04 is a Sunday
        assert_eq!(observed_independence_day(2021), make_date("2021-07-05"));
    }

    #[test]
    fn test_independence_day_is_always_a_weekday() {
        for year in 1990..2060 {
            let observed = observed_independence_day(year);
            assert!(
                !matches!(observed.weekday(), Weekday::Sat | Weekday::Sun),
                "{} observed on a weekend",
                observed
            );
        }
    }

    #[test]
    fn test_labor_day_on_september_1() {
        assert_eq!(labor_day(2025), make_date("2025-09-01"));
    }

    #[test]
    fn test_labor_day_on_september_2() {
        assert_eq!(labor_day(2024), make_date("2024-09-02"));
    }

    #[test]
    fn test_labor_day_on_september_7() {
        assert_eq!(labor_day(2020), make_date("2020-09-07"));
        assert_eq!(labor_day(2015), make_date("2015-09-07"));
    }

    #[test]
    fn test_labor_day_is_always_first_monday() {
        for year in 1990..2060 {
            let day = labor_day(year);
            assert_eq!(day.weekday(), Weekday::Mon);
            assert_eq!(day.month(), 9);
            assert!(day.day() <= 7);
        }
    }

    #[test]
    fn test_holiday_observed_date_dispatch() {
        assert_eq!(
            Holiday::IndependenceDay.observed_date(2020),
            observed_independence_day(2020)
        );
        assert_eq!(Holiday::LaborDay.observed_date(2020), labor_day(2020));
    }

    #[test]
    fn test_holiday_display() {
        assert_eq!(Holiday::IndependenceDay.to_string(), "Independence Day");
        assert_eq!(Holiday::LaborDay.to_string(), "Labor Day");
    }

    #[test]
    fn test_holiday_serialization() {
        let json = serde_json::to_string(&Holiday::LaborDay).unwrap();
        assert_eq!(json, "\"labor_day\"");
    }
}
