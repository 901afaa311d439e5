//! Calculation logic for the rental charge engine.
//!
//! This module contains the building blocks of a rental agreement: day
//! classification, observed holiday rules, due date and chargeable day
//! counting, charge composition with half-up discount rounding, and checkout
//! request validation.

mod charge_calendar;
mod charges;
mod day_detection;
mod holiday_rules;
mod validation;

pub use charge_calendar::{ChargeDaysResult, ObservedHoliday, calculate_charge_days, due_date};
pub use charges::{ChargeBreakdown, ChargesResult, calculate_charges, round_half_up_to_cent};
pub use day_detection::{DayType, chargeable_period, get_day_type};
pub use holiday_rules::{Holiday, labor_day, observed_independence_day};
pub use validation::{MAX_DISCOUNT_PERCENT, ValidatedCheckout, validate_checkout};
