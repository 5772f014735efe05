use prospect_types::Decision;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregated view of one run's audit chain, for downstream reporting.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuditSummary {
    /// Total iterations recorded.
    pub total_iterations: u32,
    /// Count per decision wire form (`ACCEPT`, `WEAK_ACCEPT`, ...).
    pub decisions: HashMap<String, u32>,
    /// Confidence after the last recorded iteration, if any.
    pub final_confidence: Option<f64>,
    /// Total cost recorded across the run.
    pub total_cost_usd: f64,
    /// Terminal reason, once the run has stopped.
    pub stop_reason: Option<String>,
}

impl AuditSummary {
    /// Count recorded for one decision kind.
    pub fn count(&self, decision: Decision) -> u32 {
        self.decisions.get(decision.as_str()).copied().unwrap_or(0)
    }
}
