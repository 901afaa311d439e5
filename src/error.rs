//! Error types for the rental charge engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine and its collaborators can report.

use thiserror::Error;

/// The main error type for the rental charge engine.
///
/// Variants fall into three groups:
/// - validation errors, caused by user input and recoverable by re-entry
///   (see [`EngineError::is_validation`]);
/// - the consistency error [`EngineError::ToolCodeMismatch`], which signals
///   a wiring defect and must not be retried;
/// - collaborator errors from the catalog and the agreement store.
///
/// # Example
///
/// ```
/// use rental_engine::error::EngineError;
///
/// let error = EngineError::UnknownToolCode {
///     code: "INVD".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unrecognized tool code. You specified: INVD");
/// assert!(error.is_validation());
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The discount percentage was outside `0..=100`.
    #[error("Discount percentage must be between 0 and 100 (inclusive). You specified: {value}")]
    InvalidDiscountPercent {
        /// The rejected percentage.
        value: i64,
    },

    /// The rental duration was less than one day.
    #[error("The number of rental days must be 1 or greater. You specified: {value}")]
    InvalidRentalDayCount {
        /// The rejected day count.
        value: i64,
    },

    /// The tool code does not resolve to a tool in the catalog.
    #[error("Unrecognized tool code. You specified: {code}")]
    UnknownToolCode {
        /// The code that was not found.
        code: String,
    },

    /// The request and the resolved policy disagree on the tool code.
    #[error("Tool codes do not match: request '{request_code}', policy '{policy_code}'")]
    ToolCodeMismatch {
        /// The tool code on the contract request.
        request_code: String,
        /// The tool code on the resolved rental policy.
        policy_code: String,
    },

    /// Catalog file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed or is internally inconsistent.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The agreement store failed to read or write.
    #[error("Agreement store error: {message}")]
    StoreError {
        /// A description of the store failure.
        message: String,
    },
}

impl EngineError {
    /// Returns `true` for errors caused by user input.
    ///
    /// Callers should surface the message and allow the user to re-enter
    /// the request. Every other error is a defect or a collaborator failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidDiscountPercent { .. }
                | EngineError::InvalidRentalDayCount { .. }
                | EngineError::UnknownToolCode { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
