//! Core data models for the rental charge engine.
//!
//! This module contains the domain models used throughout the engine.

mod audit;
mod contract_request;
mod rental_agreement;
mod rental_policy;

pub use audit::{AuditStep, AuditTrace};
pub use contract_request::ContractRequest;
pub use rental_agreement::RentalAgreement;
pub use rental_policy::{ChargeableDays, RentalPolicy};
