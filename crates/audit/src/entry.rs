use chrono::{DateTime, Utc};
use prospect_types::{Channel, ContentHash, Decision, EntityId, RunId, SignalCategory};
use serde::{Deserialize, Serialize};

/// The unsealed fields of one iteration record.
///
/// A draft carries everything except the chain linkage; sealing it against
/// the previous entry's hash produces the immutable [`AuditEntry`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditDraft {
    pub entity_id: EntityId,
    pub run_id: RunId,
    pub category: SignalCategory,
    pub iteration_number: u32,
    pub channel: Channel,
    pub decision: Decision,
    pub rationale: String,
    pub confidence_before: f64,
    pub confidence_after: f64,
    pub applied_delta: f64,
    pub category_multiplier: f64,
    pub cost_this_iteration_usd: f64,
    pub recorded_at: DateTime<Utc>,
}

impl AuditDraft {
    /// Seal the draft against the chain head, computing the entry hash.
    pub fn seal(self, previous_hash: ContentHash) -> AuditEntry {
        let entry_hash = AuditEntry::compute_hash(&previous_hash, &self);
        AuditEntry {
            entity_id: self.entity_id,
            run_id: self.run_id,
            category: self.category,
            iteration_number: self.iteration_number,
            channel: self.channel,
            decision: self.decision,
            rationale: self.rationale,
            confidence_before: self.confidence_before,
            confidence_after: self.confidence_after,
            applied_delta: self.applied_delta,
            category_multiplier: self.category_multiplier,
            cost_this_iteration_usd: self.cost_this_iteration_usd,
            recorded_at: self.recorded_at,
            previous_hash,
            entry_hash,
        }
    }
}

/// One sealed iteration record. Immutable once appended.
///
/// `entry_hash = blake3(previous_hash ‖ canonical_json(fields))`, so any
/// later modification of a field invalidates this entry and every entry
/// chained after it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditEntry {
    pub entity_id: EntityId,
    pub run_id: RunId,
    pub category: SignalCategory,
    pub iteration_number: u32,
    pub channel: Channel,
    pub decision: Decision,
    pub rationale: String,
    pub confidence_before: f64,
    pub confidence_after: f64,
    pub applied_delta: f64,
    pub category_multiplier: f64,
    pub cost_this_iteration_usd: f64,
    pub previous_hash: ContentHash,
    pub entry_hash: ContentHash,
    pub recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Compute the chain hash for a draft sealed against `previous_hash`.
    fn compute_hash(previous_hash: &ContentHash, draft: &AuditDraft) -> ContentHash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(previous_hash.as_bytes());
        let body = serde_json::to_vec(draft).expect("serializable");
        hasher.update(&body);
        ContentHash::from_bytes(*hasher.finalize().as_bytes())
    }

    /// Recompute this entry's hash from its current field values.
    pub fn recompute_hash(&self) -> ContentHash {
        let draft = AuditDraft {
            entity_id: self.entity_id.clone(),
            run_id: self.run_id,
            category: self.category,
            iteration_number: self.iteration_number,
            channel: self.channel,
            decision: self.decision,
            rationale: self.rationale.clone(),
            confidence_before: self.confidence_before,
            confidence_after: self.confidence_after,
            applied_delta: self.applied_delta,
            category_multiplier: self.category_multiplier,
            cost_this_iteration_usd: self.cost_this_iteration_usd,
            recorded_at: self.recorded_at,
        };
        Self::compute_hash(&self.previous_hash, &draft)
    }

    /// Does the stored hash match the field values and the expected link?
    pub fn verify_against(&self, expected_previous: &ContentHash) -> bool {
        self.previous_hash == *expected_previous && self.entry_hash == self.recompute_hash()
    }
}
