//! The tool catalog seam.

use crate::error::EngineResult;
use crate::models::RentalPolicy;

/// Read access to the rentable tools and their policies.
///
/// Implementations must be safe to share between request handlers.
pub trait ToolCatalog: Send + Sync {
    /// Looks up the policy for a tool code.
    ///
    /// Codes are case sensitive. Returns `Ok(None)` when no such tool exists;
    /// errors are reserved for failures of the catalog itself.
    fn lookup(&self, tool_code: &str) -> EngineResult<Option<RentalPolicy>>;

    /// Returns every tool's policy, sorted by tool code.
    fn list_tools(&self) -> EngineResult<Vec<RentalPolicy>>;
}
