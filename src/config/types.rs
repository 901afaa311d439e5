//! Catalog file types.
//!
//! This module contains the strongly-typed structures deserialized from the
//! catalog YAML files. A tool type carries pricing and chargeable-day flags
//! and is shared by every tool of that type.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::ChargeableDays;

/// Pricing and billable days for one kind of tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolTypeConfig {
    /// Charge per billable day.
    pub daily_charge: Decimal,
    /// Weekdays are billable.
    pub weekday_charge: bool,
    /// Weekend days are billable.
    pub weekend_charge: bool,
    /// Observed holidays are billable.
    pub holiday_charge: bool,
}

impl ToolTypeConfig {
    /// Returns the chargeable-day flags of this tool type.
    pub fn chargeable_days(&self) -> ChargeableDays {
        ChargeableDays {
            weekday: self.weekday_charge,
            weekend: self.weekend_charge,
            holiday: self.holiday_charge,
        }
    }
}

/// `tool_types.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolTypesConfig {
    /// Map of tool type name to its pricing.
    pub tool_types: HashMap<String, ToolTypeConfig>,
}

/// A single rentable tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    /// Case sensitive tool code.
    pub code: String,
    /// Name of the tool type, a key of [`ToolTypesConfig::tool_types`].
    pub tool_type: String,
    /// The tool's brand.
    pub brand: String,
}

/// `tools.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    /// Every rentable tool.
    pub tools: Vec<ToolConfig>,
}
