use crate::entry::{AuditDraft, AuditEntry};
use crate::error::AuditError;
use crate::summary::AuditSummary;
use prospect_types::{ContentHash, EntityId, RunId};
use serde::{Deserialize, Serialize};

/// Arena-style, append-only audit chain for one entity run.
///
/// Entries live in a flat `Vec`; each entry's hash links to its
/// predecessor by index, so the whole chain verifies with a single linear
/// scan — no pointer chasing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditLog {
    pub entity_id: EntityId,
    pub run_id: RunId,
    entries: Vec<AuditEntry>,
    stop_reason: Option<String>,
}

impl AuditLog {
    pub fn new(entity_id: EntityId, run_id: RunId) -> Self {
        Self {
            entity_id,
            run_id,
            entries: Vec::new(),
            stop_reason: None,
        }
    }

    /// Rebuild a chain from stored entries, e.g. on the reporting side.
    ///
    /// No validation happens here; call [`AuditLog::verify_integrity`] on
    /// the result.
    pub fn from_entries(entity_id: EntityId, run_id: RunId, entries: Vec<AuditEntry>) -> Self {
        Self {
            entity_id,
            run_id,
            entries,
            stop_reason: None,
        }
    }

    /// Hash of the newest entry; the zero hash for an empty chain.
    pub fn head_hash(&self) -> ContentHash {
        self.entries
            .last()
            .map(|e| e.entry_hash.clone())
            .unwrap_or_else(ContentHash::zero)
    }

    /// Seal a draft against the chain head and append it.
    /// Returns the new entry's hash.
    pub fn append(&mut self, draft: AuditDraft) -> ContentHash {
        let entry = draft.seal(self.head_hash());
        let hash = entry.entry_hash.clone();
        self.entries.push(entry);
        hash
    }

    /// Record the terminal reason for this run.
    pub fn set_stop_reason(&mut self, reason: impl Into<String>) {
        self.stop_reason = Some(reason.into());
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replay the chain; `true` when every entry verifies against its
    /// predecessor's hash.
    pub fn verify_integrity(&self) -> bool {
        self.first_broken_index().is_none()
    }

    /// Index of the first entry that fails verification, if any.
    ///
    /// Every entry after a broken one is also unverifiable, since its
    /// expected link can no longer be trusted.
    pub fn first_broken_index(&self) -> Option<usize> {
        let mut expected = ContentHash::zero();
        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.verify_against(&expected) {
                return Some(index);
            }
            expected = entry.entry_hash.clone();
        }
        None
    }

    /// Aggregate the chain into a reporting summary.
    pub fn summary(&self) -> AuditSummary {
        let mut summary = AuditSummary {
            total_iterations: self.entries.len() as u32,
            stop_reason: self.stop_reason.clone(),
            final_confidence: self.entries.last().map(|e| e.confidence_after),
            ..AuditSummary::default()
        };
        for entry in &self.entries {
            *summary
                .decisions
                .entry(entry.decision.as_str().to_string())
                .or_insert(0) += 1;
            summary.total_cost_usd += entry.cost_this_iteration_usd;
        }
        summary
    }

    /// Validate the chain, reporting the first broken index.
    pub fn check(&self) -> Result<(), AuditError> {
        match self.first_broken_index() {
            None => Ok(()),
            Some(index) => Err(AuditError::ChainBroken { index }),
        }
    }
}
