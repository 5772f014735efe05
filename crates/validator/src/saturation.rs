use serde::{Deserialize, Serialize};

/// Consecutive rejects after which a category is saturated.
pub const CATEGORY_REJECT_SATURATION: u32 = 3;

/// Detects the run-level confidence plateau.
///
/// Records every post-iteration confidence value; the run is saturated when
/// the newest `window` values show less than `threshold` total gain. Only
/// `Reject` bears on category saturation — that lives with the per-category
/// state; this tracker watches the run as a whole.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SaturationTracker {
    history: Vec<f64>,
}

impl SaturationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the confidence value after one iteration.
    pub fn record(&mut self, confidence: f64) {
        self.history.push(confidence);
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Total gain over the newest `window` values is below `threshold`.
    ///
    /// Not saturated until at least `window` values exist.
    pub fn confidence_saturated(&self, window: usize, threshold: f64) -> bool {
        if window == 0 || self.history.len() < window {
            return false;
        }
        let newest = self.history[self.history.len() - 1];
        let oldest = self.history[self.history.len() - window];
        (newest - oldest) < threshold
    }
}
