use serde::{Deserialize, Serialize};
use std::fmt;

/// The four-way outcome of validating one piece of evidence.
///
/// Confidence deltas attached to each decision are fixed constants applied
/// by the validator; this enum deliberately carries no numeric payload so
/// the arithmetic cannot drift per call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// New, entity-specific, actionable, credible evidence.
    Accept,
    /// New evidence missing exactly one acceptance criterion.
    WeakAccept,
    /// Duplicate, paraphrase, or contradicting evidence.
    Reject,
    /// No relevant evidence found.
    NoProgress,
}

impl Decision {
    pub const ALL: [Decision; 4] = [
        Decision::Accept,
        Decision::WeakAccept,
        Decision::Reject,
        Decision::NoProgress,
    ];

    /// Wire form used in audit entries and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Accept => "ACCEPT",
            Decision::WeakAccept => "WEAK_ACCEPT",
            Decision::Reject => "REJECT",
            Decision::NoProgress => "NO_PROGRESS",
        }
    }

    /// Does this decision consume an evidence slot?
    ///
    /// `NoProgress` records an attempt without contributing evidence.
    pub fn is_evidence_bearing(&self) -> bool {
        !matches!(self, Decision::NoProgress)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
