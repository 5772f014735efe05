use crate::category::SignalCategory;
use crate::channel::Channel;
use crate::decision::Decision;
use crate::hash::ContentHash;
use crate::ids::{EntityId, HypothesisId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lower clamp bound for hypothesis confidence.
pub const CONFIDENCE_FLOOR: f64 = 0.05;
/// Upper clamp bound for hypothesis confidence.
pub const CONFIDENCE_CEIL: f64 = 0.95;

/// Lifecycle status of a hypothesis within one run.
///
/// Transitions are monotone: `Active` may move to `Promoted` or `Degraded`
/// once, and neither terminal status is ever reversed within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HypothesisStatus {
    Active,
    Promoted,
    Degraded,
}

/// One validated piece of evidence attached to a hypothesis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// Channel the evidence came from.
    pub channel: Channel,
    /// URL or other reference to the source document.
    pub source_ref: String,
    /// Confirmed decision for this evidence.
    pub decision: Decision,
    /// Confidence delta actually applied (post-multiplier).
    pub applied_delta: f64,
    /// Hash of the normalized evidence excerpt, for dedup.
    pub excerpt_hash: ContentHash,
    /// When the evidence was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// A testable claim about an entity within one category.
///
/// Owned by the hypothesis store for the duration of a single entity run
/// and mutated only through [`Hypothesis::apply_evidence`], which the
/// decision validator drives.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: HypothesisId,
    pub entity_id: EntityId,
    /// Human-readable entity name; the rubric's entity-match criterion
    /// checks evidence text against this.
    pub entity_name: String,
    pub category: SignalCategory,
    /// The claim under investigation.
    pub statement: String,
    /// Confidence in [`CONFIDENCE_FLOOR`, `CONFIDENCE_CEIL`].
    pub confidence: f64,
    pub iterations_attempted: u32,
    pub iterations_accepted: u32,
    pub iterations_weak_accepted: u32,
    pub iterations_rejected: u32,
    pub iterations_no_progress: u32,
    pub status: HypothesisStatus,
    /// Ordered evidence history, oldest first.
    pub evidence_log: Vec<EvidenceRecord>,
}

impl Hypothesis {
    pub fn new(
        id: impl Into<HypothesisId>,
        entity_id: impl Into<EntityId>,
        entity_name: impl Into<String>,
        category: SignalCategory,
        statement: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            entity_id: entity_id.into(),
            entity_name: entity_name.into(),
            category,
            statement: statement.into(),
            confidence: 0.5,
            iterations_attempted: 0,
            iterations_accepted: 0,
            iterations_weak_accepted: 0,
            iterations_rejected: 0,
            iterations_no_progress: 0,
            status: HypothesisStatus::Active,
            evidence_log: Vec::new(),
        }
    }

    pub fn with_confidence(mut self, c: f64) -> Self {
        self.confidence = c.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEIL);
        self
    }

    /// Apply one validated evidence outcome: bump the matching iteration
    /// counter, append to the evidence log, and move confidence to
    /// `new_confidence` (clamped).
    pub fn apply_evidence(&mut self, record: EvidenceRecord, new_confidence: f64) {
        self.iterations_attempted += 1;
        match record.decision {
            Decision::Accept => self.iterations_accepted += 1,
            Decision::WeakAccept => self.iterations_weak_accepted += 1,
            Decision::Reject => self.iterations_rejected += 1,
            Decision::NoProgress => self.iterations_no_progress += 1,
        }
        self.evidence_log.push(record);
        self.confidence = new_confidence.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEIL);
    }

    /// Promote or degrade based on thresholds. Terminal statuses stick.
    pub fn update_status(&mut self, promote_threshold: f64, degrade_threshold: f64) {
        if self.status != HypothesisStatus::Active {
            return;
        }
        if self.confidence >= promote_threshold {
            self.status = HypothesisStatus::Promoted;
        } else if self.confidence <= degrade_threshold {
            self.status = HypothesisStatus::Degraded;
        }
    }

    /// Counter identity: attempts must equal the sum of the four outcomes.
    pub fn counters_consistent(&self) -> bool {
        self.iterations_attempted
            == self.iterations_accepted
                + self.iterations_weak_accepted
                + self.iterations_rejected
                + self.iterations_no_progress
    }

    /// Evidence-bearing records (everything except `NoProgress`).
    pub fn evidence_count(&self) -> usize {
        self.evidence_log
            .iter()
            .filter(|r| r.decision.is_evidence_bearing())
            .count()
    }
}
