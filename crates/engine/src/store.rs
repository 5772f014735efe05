use crate::error::EngineError;
use prospect_types::{EvidenceRecord, Hypothesis, HypothesisId, HypothesisStatus};

/// Owns all hypotheses for one entity run.
///
/// Mutation happens only through [`HypothesisStore::apply_outcome`], which
/// the coordinator calls with the validator's result; the store is consumed
/// by [`HypothesisStore::archive`] when the run ends.
#[derive(Debug)]
pub struct HypothesisStore {
    hypotheses: Vec<Hypothesis>,
}

impl HypothesisStore {
    pub fn new(hypotheses: Vec<Hypothesis>) -> Result<Self, EngineError> {
        if hypotheses.is_empty() {
            return Err(EngineError::NoHypotheses);
        }
        Ok(Self { hypotheses })
    }

    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    pub fn get(&self, id: &HypothesisId) -> Option<&Hypothesis> {
        self.hypotheses.iter().find(|h| &h.id == id)
    }

    /// Hypotheses still open for exploration.
    pub fn active(&self) -> impl Iterator<Item = &Hypothesis> {
        self.hypotheses
            .iter()
            .filter(|h| h.status == HypothesisStatus::Active)
    }

    pub fn all(&self) -> &[Hypothesis] {
        &self.hypotheses
    }

    /// Apply one validated outcome: evidence record, new confidence, and a
    /// status check against the promotion/degradation thresholds.
    pub fn apply_outcome(
        &mut self,
        id: &HypothesisId,
        record: EvidenceRecord,
        new_confidence: f64,
        promote_threshold: f64,
        degrade_threshold: f64,
    ) -> Result<&Hypothesis, EngineError> {
        let hypothesis = self
            .hypotheses
            .iter_mut()
            .find(|h| &h.id == id)
            .ok_or_else(|| EngineError::UnknownHypothesis(id.clone()))?;
        hypothesis.apply_evidence(record, new_confidence);
        hypothesis.update_status(promote_threshold, degrade_threshold);
        Ok(hypothesis)
    }

    /// End the run: hand the hypotheses to the caller for archival.
    pub fn archive(self) -> Vec<Hypothesis> {
        self.hypotheses
    }
}
