use prospect_types::EntityId;

/// Errors from the audit trail.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("no audit log for entity: {0}")]
    LogNotFound(EntityId),
    #[error("audit log already exists for entity: {0}")]
    LogAlreadyExists(EntityId),
    #[error("audit chain broken at entry {index}")]
    ChainBroken { index: usize },
    #[error("audit storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}
