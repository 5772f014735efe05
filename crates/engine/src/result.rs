use prospect_audit::AuditSummary;
use prospect_budget::StopReason;
use prospect_types::{EntityId, Hypothesis, HypothesisId, RunId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Final outcome of one entity's exploration run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExplorationResult {
    pub entity_id: EntityId,
    pub run_id: RunId,
    /// Final confidence per hypothesis.
    pub final_confidence: HashMap<HypothesisId, f64>,
    /// Hypotheses that crossed the promotion threshold.
    pub promoted: Vec<HypothesisId>,
    /// Why the run ended.
    pub stop_reason: StopReason,
    /// Aggregated audit view.
    pub audit: AuditSummary,
    /// The archived hypotheses, with their full evidence logs.
    pub hypotheses: Vec<Hypothesis>,
}

impl ExplorationResult {
    /// Final confidence for one hypothesis.
    pub fn confidence_of(&self, id: &HypothesisId) -> Option<f64> {
        self.final_confidence.get(id).copied()
    }
}
