use crate::rubric::CriteriaReport;
use prospect_types::Decision;
use serde::{Deserialize, Serialize};

/// One acceptance criterion from the rubric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    /// Not a duplicate of prior evidence.
    Novel,
    /// The evidence names the entity explicitly.
    EntityMatch,
    /// The evidence implies a concrete future action.
    ConcreteAction,
    /// The source kind is primary/official.
    CredibleSource,
}

impl Criterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Novel => "novel",
            Criterion::EntityMatch => "entity_match",
            Criterion::ConcreteAction => "concrete_action",
            Criterion::CredibleSource => "credible_source",
        }
    }
}

/// Why evidence was rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RejectCause {
    /// Exact or near-duplicate of prior evidence.
    Duplicate { similarity: f64 },
    /// The evidence contradicts the hypothesis.
    Contradiction,
}

/// Confirmed outcome of validating one piece of evidence.
///
/// A closed vocabulary with associated data: downstream code matches on the
/// variant and can never see an unrecognized decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// All four criteria satisfied.
    Accept { criteria: CriteriaReport },
    /// New evidence missing exactly one criterion.
    WeakAccept {
        criteria: CriteriaReport,
        missing: Criterion,
    },
    /// Duplicate or contradicting evidence.
    Reject { cause: RejectCause },
    /// No relevant evidence in the fetched content.
    NoProgress { reason: String },
}

impl Verdict {
    /// The flat decision code used by arithmetic, budgets, and audit.
    pub fn decision(&self) -> Decision {
        match self {
            Verdict::Accept { .. } => Decision::Accept,
            Verdict::WeakAccept { .. } => Decision::WeakAccept,
            Verdict::Reject { .. } => Decision::Reject,
            Verdict::NoProgress { .. } => Decision::NoProgress,
        }
    }

    /// Human-readable rationale for the audit trail.
    pub fn rationale(&self) -> String {
        match self {
            Verdict::Accept { .. } => {
                "evidence is new, names the entity, implies concrete action, credible source"
                    .to_string()
            }
            Verdict::WeakAccept { missing, .. } => {
                format!("new evidence, but missing criterion: {}", missing.as_str())
            }
            Verdict::Reject { cause } => match cause {
                RejectCause::Duplicate { similarity } => {
                    format!("duplicate of prior evidence (similarity {:.2})", similarity)
                }
                RejectCause::Contradiction => "evidence contradicts the hypothesis".to_string(),
            },
            Verdict::NoProgress { reason } => reason.clone(),
        }
    }
}
