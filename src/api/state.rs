//! Application state for the rental API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::point_of_sale::PointOfSale;

/// Shared application state.
///
/// Holds the point of sale that every handler checks tools out through.
#[derive(Clone)]
pub struct AppState {
    point_of_sale: Arc<PointOfSale>,
}

impl AppState {
    /// Creates a new application state around a point of sale.
    pub fn new(point_of_sale: PointOfSale) -> Self {
        Self {
            point_of_sale: Arc::new(point_of_sale),
        }
    }

    /// Returns the point of sale.
    pub fn point_of_sale(&self) -> &PointOfSale {
        &self.point_of_sale
    }
}
