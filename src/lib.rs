//! Tool rental charge engine
//!
//! This crate prices tool rentals at a point of sale. Given a tool, a
//! checkout date, a duration and a discount, it works out the due date, the
//! billable days (weekends and the observed Independence Day and Labor Day
//! holidays are billed per tool type), the charges with half-up discount
//! rounding, and a printable rental agreement.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod point_of_sale;
pub mod report;
pub mod store;
