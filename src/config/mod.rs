//! Tool catalog configuration for the rental charge engine.
//!
//! This module loads the tool catalog from YAML files: tool types with their
//! daily charge and billable days, and the tools stocked under each type.
//!
//! # Example
//!
//! ```no_run
//! use rental_engine::config::{CatalogLoader, ToolCatalog};
//!
//! let catalog = CatalogLoader::load("./config/catalog").unwrap();
//! for policy in catalog.list_tools().unwrap() {
//!     println!("{} {}", policy.tool_code, policy.tool_type);
//! }
//! ```

mod catalog;
mod loader;
mod types;

pub use catalog::ToolCatalog;
pub use loader::CatalogLoader;
pub use types::{ToolConfig, ToolTypeConfig, ToolTypesConfig, ToolsConfig};
