use prospect_audit::AuditError;
use prospect_types::HypothesisId;

/// Errors that abort an entity run.
///
/// External-service failures never appear here — they degrade into
/// `NO_PROGRESS` iterations. What does abort a run is losing the audit
/// trail: confidence updates without a durable audit entry would break the
/// log's completeness guarantee.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("audit trail unavailable: {0}")]
    Audit(#[from] AuditError),
    #[error("exploration started with no hypotheses")]
    NoHypotheses,
    #[error("unknown hypothesis: {0}")]
    UnknownHypothesis(HypothesisId),
}
