use chrono::{DateTime, Utc};
use prospect_types::{CostModel, SignalCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// External calls made during one iteration, for cost accounting.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct IterationCost {
    pub searches: u32,
    pub fetches: u32,
    pub evaluations: u32,
}

impl IterationCost {
    /// Total estimated cost under the given model.
    pub fn total_usd(&self, model: &CostModel) -> f64 {
        self.searches as f64 * model.search_cost_usd
            + self.fetches as f64 * model.fetch_cost_usd
            + self.evaluations as f64 * model.evaluate_cost_usd
    }
}

/// Per-entity budget bookkeeping. Mutated only by the budget controller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BudgetState {
    /// Accumulated estimated cost.
    pub cost_spent_usd: f64,
    /// Iterations recorded so far.
    pub iterations_used: u32,
    /// Iterations per category.
    pub category_iterations: HashMap<SignalCategory, u32>,
    /// Evidence-bearing records so far.
    pub evidence_total: u32,
    /// Consecutive iterations at or above the high-confidence threshold.
    pub high_confidence_streak: u32,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    // Caps, copied from config when the run starts.
    pub cost_cap_usd: f64,
    pub iteration_cap: u32,
    pub time_cap_seconds: u64,
}

impl BudgetState {
    pub fn new(cost_cap_usd: f64, iteration_cap: u32, time_cap_seconds: u64) -> Self {
        Self {
            cost_spent_usd: 0.0,
            iterations_used: 0,
            category_iterations: HashMap::new(),
            evidence_total: 0,
            high_confidence_streak: 0,
            started_at: Utc::now(),
            cost_cap_usd,
            iteration_cap,
            time_cap_seconds,
        }
    }

    /// Seconds elapsed since the run started, measured at `now`.
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        (now - self.started_at).num_seconds().max(0) as u64
    }

    /// Iterations used in one category.
    pub fn iterations_in(&self, category: SignalCategory) -> u32 {
        self.category_iterations.get(&category).copied().unwrap_or(0)
    }

    /// Number of categories that have seen at least one iteration.
    pub fn categories_started(&self) -> u32 {
        self.category_iterations.len() as u32
    }
}
