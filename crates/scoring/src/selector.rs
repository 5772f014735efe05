use prospect_types::{Channel, ExplorationConfig};
use std::collections::HashMap;
use tracing::debug;

/// A channel is excluded once it has failed this many times.
pub const MAX_CHANNEL_FAILURES: u32 = 2;

/// Errors from channel selection.
#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    /// Every channel has failed [`MAX_CHANNEL_FAILURES`] times — the
    /// category is saturated for the remainder of the run.
    #[error("all channels excluded after repeated failures")]
    ChannelsExhausted,
}

/// Picks the next evidence channel for a hypothesis.
///
/// `channel_score = channel_historical_roi × hypothesis_score`; the
/// highest-scoring non-excluded channel wins. Ties break on the canonical
/// channel order, keeping selection deterministic.
pub struct ChannelSelector {
    config: ExplorationConfig,
}

impl ChannelSelector {
    pub fn new(config: ExplorationConfig) -> Self {
        Self { config }
    }

    /// Select the best channel given the hypothesis's priority score and
    /// the per-channel failure counts accumulated this run.
    pub fn select(
        &self,
        hypothesis_score: f64,
        failed_channels: &HashMap<Channel, u32>,
    ) -> Result<Channel, SelectorError> {
        let mut best: Option<(Channel, f64)> = None;
        for channel in Channel::ALL {
            let failures = failed_channels.get(&channel).copied().unwrap_or(0);
            if failures >= MAX_CHANNEL_FAILURES {
                debug!(channel = %channel, failures, "channel excluded");
                continue;
            }
            let score = self.config.channel_roi(channel) * hypothesis_score;
            // Strict `>` keeps the earliest channel on ties.
            let better = match best {
                None => true,
                Some((_, best_score)) => score > best_score,
            };
            if better {
                best = Some((channel, score));
            }
        }
        match best {
            Some((channel, score)) => {
                debug!(channel = %channel, score, "channel selected");
                Ok(channel)
            }
            None => Err(SelectorError::ChannelsExhausted),
        }
    }
}
