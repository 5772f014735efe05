use crate::category::SignalCategory;
use crate::channel::Channel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-call cost estimates for the external services, in USD.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CostModel {
    pub search_cost_usd: f64,
    pub fetch_cost_usd: f64,
    pub evaluate_cost_usd: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            search_cost_usd: 0.005,
            fetch_cost_usd: 0.001,
            evaluate_cost_usd: 0.02,
        }
    }
}

/// Immutable configuration for one exploration run.
///
/// Constructed once, passed by reference into the scorer, selector, and
/// budget controller — there is no mutable global registry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExplorationConfig {
    /// Monetary ceiling per entity run.
    pub cost_cap_usd: f64,
    /// Iteration cap per category.
    pub max_iterations_per_category: u32,
    /// Maximum number of categories explored per run.
    pub max_categories: u32,
    /// Total iteration cap per run.
    pub max_total_iterations: u32,
    /// Wall-clock ceiling per run.
    pub max_time_seconds: u64,
    /// Window length for the confidence-plateau check.
    pub confidence_saturation_window: usize,
    /// Minimum total gain over the window to stay unsaturated.
    pub confidence_saturation_threshold: f64,
    /// Confidence level treated as "high" by the early-stop streak rule.
    pub high_confidence_threshold: f64,
    /// Consecutive high-confidence iterations before stopping early.
    pub high_confidence_consecutive: u32,
    /// Cap on evidence-bearing records per run.
    pub max_evidence_total: u32,
    /// Confidence at or above which a hypothesis is promoted.
    pub promote_threshold: f64,
    /// Confidence at or below which a hypothesis is degraded.
    pub degrade_threshold: f64,
    /// Offline-calibrated per-category value multipliers.
    pub category_value_multipliers: HashMap<SignalCategory, f64>,
    /// Historical yield per channel.
    pub channel_historical_roi: HashMap<Channel, f64>,
    /// Per-call cost estimates.
    pub cost_model: CostModel,
    /// Bounded worker-pool width for the batch runner.
    pub max_concurrent_runs: usize,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            cost_cap_usd: 2.0,
            max_iterations_per_category: 3,
            max_categories: 8,
            max_total_iterations: 24,
            max_time_seconds: 300,
            confidence_saturation_window: 10,
            confidence_saturation_threshold: 0.01,
            high_confidence_threshold: 0.9,
            high_confidence_consecutive: 3,
            max_evidence_total: 20,
            promote_threshold: 0.8,
            degrade_threshold: 0.2,
            category_value_multipliers: default_category_multipliers(),
            channel_historical_roi: default_channel_roi(),
            cost_model: CostModel::default(),
            max_concurrent_runs: 8,
        }
    }
}

impl ExplorationConfig {
    /// Relaxed configuration for demos and tests: tiny budgets, fast stops.
    pub fn demo() -> Self {
        Self {
            cost_cap_usd: 0.5,
            max_total_iterations: 12,
            max_time_seconds: 60,
            ..Self::default()
        }
    }

    /// Production configuration: wider budgets, stricter promotion.
    pub fn production() -> Self {
        Self {
            cost_cap_usd: 10.0,
            max_total_iterations: 48,
            max_time_seconds: 900,
            promote_threshold: 0.85,
            ..Self::default()
        }
    }

    /// Value multiplier for a category (1.0 when unlisted).
    pub fn category_multiplier(&self, category: SignalCategory) -> f64 {
        self.category_value_multipliers
            .get(&category)
            .copied()
            .unwrap_or(1.0)
    }

    /// Historical ROI for a channel (1.0 when unlisted).
    pub fn channel_roi(&self, channel: Channel) -> f64 {
        self.channel_historical_roi
            .get(&channel)
            .copied()
            .unwrap_or(1.0)
    }
}

fn default_category_multipliers() -> HashMap<SignalCategory, f64> {
    HashMap::from([
        (SignalCategory::Hiring, 1.3),
        (SignalCategory::Procurement, 1.4),
        (SignalCategory::Expansion, 1.2),
        (SignalCategory::ProductLaunch, 1.1),
        (SignalCategory::Funding, 1.2),
        (SignalCategory::Leadership, 0.9),
        (SignalCategory::Partnership, 1.0),
        (SignalCategory::Technology, 1.0),
    ])
}

fn default_channel_roi() -> HashMap<Channel, f64> {
    HashMap::from([
        (Channel::OfficialSite, 1.0),
        (Channel::CareersPage, 1.2),
        (Channel::PressRelease, 1.1),
        (Channel::NewsMedia, 0.9),
        (Channel::RegulatoryFiling, 0.8),
        (Channel::IndustryForum, 0.6),
    ])
}
