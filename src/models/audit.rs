//! Audit trace models.
//!
//! Every derivation step of a rental agreement records its inputs, outputs
//! and reasoning so a charge can be explained line by line.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// # Example
///
/// ```
/// use rental_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "charge_days".to_string(),
///     rule_name: "Chargeable Day Count".to_string(),
///     input: serde_json::json!({"rental_day_count": 4}),
///     output: serde_json::json!({"charge_day_count": 1}),
///     reasoning: "1 weekday charged".to_string(),
/// };
/// assert_eq!(step.rule_id, "charge_days");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The ordered steps that produced a rental agreement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}

impl AuditTrace {
    /// Returns the number the next pushed step should carry.
    pub fn next_step_number(&self) -> u32 {
        self.steps.len() as u32 + 1
    }

    /// Appends a step to the trace.
    pub fn push(&mut self, step: AuditStep) {
        self.steps.push(step);
    }
}
