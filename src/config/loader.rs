//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the tool
//! catalog from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::RentalPolicy;

use super::ToolCatalog;
use super::types::{ToolTypesConfig, ToolsConfig};

/// Path reported for catalogs built in memory.
const IN_MEMORY_PATH: &str = "<in-memory>";

/// Loads and provides access to the tool catalog.
///
/// # Directory Structure
///
/// ```text
/// config/catalog/
/// ├── tool_types.yaml  # Pricing and chargeable days per tool type
/// └── tools.yaml       # Tool codes with their type and brand
/// ```
///
/// # Example
///
/// ```no_run
/// use rental_engine::config::{CatalogLoader, ToolCatalog};
///
/// let catalog = CatalogLoader::load("./config/catalog")?;
/// let ladder = catalog.lookup("LADW")?.expect("ladder is stocked");
/// println!("{} {} at ${}/day", ladder.brand, ladder.tool_type, ladder.daily_charge);
/// # Ok::<(), rental_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    policies: BTreeMap<String, RentalPolicy>,
}

impl CatalogLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if either file is missing
    /// - [`EngineError::ConfigParseError`] if a file contains invalid YAML,
    ///   a tool names an unknown tool type, a tool code appears twice, or a
    ///   daily charge is negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tool_types_path = path.join("tool_types.yaml");
        let tool_types = Self::load_yaml::<ToolTypesConfig>(&tool_types_path)?;

        for (name, tool_type) in &tool_types.tool_types {
            if tool_type.daily_charge.is_sign_negative() && !tool_type.daily_charge.is_zero() {
                return Err(EngineError::ConfigParseError {
                    path: tool_types_path.display().to_string(),
                    message: format!("Tool type '{}' has a negative daily charge", name),
                });
            }
        }

        let tools_path = path.join("tools.yaml");
        let tools = Self::load_yaml::<ToolsConfig>(&tools_path)?;
        let tools_path_str = tools_path.display().to_string();

        let policies = tools
            .tools
            .into_iter()
            .map(|tool| -> EngineResult<RentalPolicy> {
                let tool_type = tool_types.tool_types.get(&tool.tool_type).ok_or_else(|| {
                    EngineError::ConfigParseError {
                        path: tools_path_str.clone(),
                        message: format!(
                            "Tool '{}' refers to unknown tool type '{}'",
                            tool.code, tool.tool_type
                        ),
                    }
                })?;

                Ok(RentalPolicy {
                    daily_charge: tool_type.daily_charge,
                    chargeable_days: tool_type.chargeable_days(),
                    tool_code: tool.code,
                    tool_type: tool.tool_type,
                    brand: tool.brand,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let catalog = Self::index(policies, &tools_path_str)?;
        debug!(path = %path.display(), tools = catalog.policies.len(), "Loaded tool catalog");
        Ok(catalog)
    }

    /// Builds a catalog from policies held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParseError`] if a tool code appears twice
    /// or a daily charge is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use rental_engine::config::{CatalogLoader, ToolCatalog};
    /// use rental_engine::models::{ChargeableDays, RentalPolicy};
    /// use rust_decimal::Decimal;
    ///
    /// let catalog = CatalogLoader::from_policies(vec![RentalPolicy {
    ///     tool_code: "CHNS".to_string(),
    ///     tool_type: "Chainsaw".to_string(),
    ///     brand: "Stihl".to_string(),
    ///     daily_charge: Decimal::new(149, 2),
    ///     chargeable_days: ChargeableDays { weekday: true, weekend: false, holiday: true },
    /// }])?;
    ///
    /// assert!(catalog.lookup("CHNS")?.is_some());
    /// assert!(catalog.lookup("chns")?.is_none());
    /// # Ok::<(), rental_engine::error::EngineError>(())
    /// ```
    pub fn from_policies(policies: Vec<RentalPolicy>) -> EngineResult<Self> {
        if let Some(policy) = policies
            .iter()
            .find(|p| p.daily_charge.is_sign_negative() && !p.daily_charge.is_zero())
        {
            return Err(EngineError::ConfigParseError {
                path: IN_MEMORY_PATH.to_string(),
                message: format!("Tool '{}' has a negative daily charge", policy.tool_code),
            });
        }

        Self::index(policies, IN_MEMORY_PATH)
    }

    /// Indexes policies by tool code, rejecting duplicates.
    fn index(policies: Vec<RentalPolicy>, path: &str) -> EngineResult<Self> {
        let mut indexed = BTreeMap::new();

        for policy in policies {
            let code = policy.tool_code.clone();
            if indexed.insert(code.clone(), policy).is_some() {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!("Duplicate tool code '{}'", code),
                });
            }
        }

        Ok(Self { policies: indexed })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Returns `true` if the catalog holds no tools.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl ToolCatalog for CatalogLoader {
    fn lookup(&self, tool_code: &str) -> EngineResult<Option<RentalPolicy>> {
        Ok(self.policies.get(tool_code).cloned())
    }

    fn list_tools(&self) -> EngineResult<Vec<RentalPolicy>> {
        Ok(self.policies.values().cloned().collect())
    }
}
