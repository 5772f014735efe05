use prospect_types::{ExplorationConfig, Hypothesis};
use serde::{Deserialize, Serialize};

/// Novelty never decays below this floor.
const NOVELTY_FLOOR: f64 = 0.8;
/// Geometric decay rate per category revisit.
const NOVELTY_DECAY: f64 = 0.5;

/// Optional context multipliers supplied by the caller.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScoreContext {
    /// Boost for fresh external evidence (default 1.0).
    pub temporal_boost: f64,
    /// Boost from related-entity corroboration (default 1.0).
    pub network_boost: f64,
}

impl Default for ScoreContext {
    fn default() -> Self {
        Self {
            temporal_boost: 1.0,
            network_boost: 1.0,
        }
    }
}

/// Computes a priority score per hypothesis.
///
/// `score = (1 − confidence) × novelty × category_value × temporal × network`
///
/// Pure function of current state: no side effects, no learned weights.
/// Category value multipliers come from the immutable config passed at
/// construction.
pub struct InfoGainScorer {
    config: ExplorationConfig,
}

impl InfoGainScorer {
    pub fn new(config: ExplorationConfig) -> Self {
        Self { config }
    }

    /// Priority score for a hypothesis whose category has been visited
    /// `category_visits` times already this run.
    pub fn score(
        &self,
        hypothesis: &Hypothesis,
        category_visits: u32,
        ctx: &ScoreContext,
    ) -> f64 {
        // Confidence outside [0, 1] would poison the product; clamp first.
        let confidence = hypothesis.confidence.clamp(0.0, 1.0);
        let uncertainty = 1.0 - confidence;
        let novelty = Self::novelty_factor(category_visits);
        let category_value = self.config.category_multiplier(hypothesis.category);
        uncertainty * novelty * category_value * ctx.temporal_boost * ctx.network_boost
    }

    /// Novelty decays geometrically toward [`NOVELTY_FLOOR`] with each
    /// revisit of the same category, discouraging repeated focus on an
    /// already-explored category.
    pub fn novelty_factor(category_visits: u32) -> f64 {
        NOVELTY_FLOOR + (1.0 - NOVELTY_FLOOR) * NOVELTY_DECAY.powi(category_visits as i32)
    }
}
