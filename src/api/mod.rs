//! HTTP API module for the rental charge engine.
//!
//! This module provides the REST endpoints for listing tools, checking a
//! tool out and fetching stored agreements.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CheckoutRequest;
pub use response::{ApiError, ApiErrorResponse, CheckoutResponse};
pub use state::AppState;
