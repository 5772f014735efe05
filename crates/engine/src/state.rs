use prospect_types::{Channel, Decision, SignalCategory};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Per-category exploration bookkeeping for one entity run.
///
/// Read by the channel selector (failure exclusion) and the validator
/// (consecutive rejects, accepted count); updated by the coordinator after
/// each iteration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExplorationState {
    pub category: SignalCategory,
    pub consecutive_rejects: u32,
    pub accepted_count: u32,
    pub visited_channels: HashSet<Channel>,
    pub failed_channels: HashMap<Channel, u32>,
    pub confidence_history: Vec<f64>,
    /// Set when the category stops accepting iterations: three consecutive
    /// rejects, exhausted channels, or a budget lock.
    pub saturated: bool,
}

impl ExplorationState {
    pub fn new(category: SignalCategory) -> Self {
        Self {
            category,
            consecutive_rejects: 0,
            accepted_count: 0,
            visited_channels: HashSet::new(),
            failed_channels: HashMap::new(),
            confidence_history: Vec::new(),
            saturated: false,
        }
    }

    /// Iterations recorded against this category so far.
    pub fn visits(&self) -> u32 {
        self.confidence_history.len() as u32
    }

    /// Fold one validated decision into the category state.
    ///
    /// Only `Reject` feeds the consecutive-reject counter; `NoProgress`
    /// neither increments nor resets it.
    pub fn record_decision(&mut self, decision: Decision, confidence_after: f64) {
        self.confidence_history.push(confidence_after);
        match decision {
            Decision::Accept => {
                self.accepted_count += 1;
                self.consecutive_rejects = 0;
            }
            Decision::WeakAccept => {
                self.consecutive_rejects = 0;
            }
            Decision::Reject => {
                self.consecutive_rejects += 1;
            }
            Decision::NoProgress => {}
        }
    }

    pub fn record_channel_visit(&mut self, channel: Channel) {
        self.visited_channels.insert(channel);
    }

    /// All queries for a channel failed; counts toward its exclusion.
    pub fn record_channel_failure(&mut self, channel: Channel) {
        *self.failed_channels.entry(channel).or_insert(0) += 1;
    }

    pub fn mark_saturated(&mut self) {
        self.saturated = true;
    }
}
