use crate::entry::{AuditDraft, AuditEntry};
use crate::error::AuditError;
use crate::log::AuditLog;
use crate::summary::AuditSummary;
use async_trait::async_trait;
use prospect_types::{ContentHash, EntityId, RunId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Durability boundary for audit chains.
///
/// The coordinator awaits `append` before an iteration is considered
/// finished; an implementation must not acknowledge a write it could lose.
/// Append failures are fatal for the affected run only.
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Open a fresh chain for an entity run. Fails if one is already open.
    async fn begin_run(&self, entity_id: EntityId, run_id: RunId) -> Result<(), AuditError>;

    /// Seal and append one iteration record; returns the new chain head.
    async fn append(&self, entity_id: &EntityId, draft: AuditDraft)
        -> Result<ContentHash, AuditError>;

    /// Record the terminal reason for a run.
    async fn set_stop_reason(&self, entity_id: &EntityId, reason: &str) -> Result<(), AuditError>;

    /// All entries for an entity's current run, oldest first.
    async fn entries(&self, entity_id: &EntityId) -> Result<Vec<AuditEntry>, AuditError>;

    /// Replay the chain; `Ok(true)` when intact.
    async fn verify_integrity(&self, entity_id: &EntityId) -> Result<bool, AuditError>;

    /// Aggregate summary for reporting.
    async fn summary(&self, entity_id: &EntityId) -> Result<AuditSummary, AuditError>;
}

/// In-memory audit store for tests, demos, and single-process deployments.
#[derive(Clone, Default)]
pub struct InMemoryAuditStore {
    logs: Arc<RwLock<HashMap<EntityId, AuditLog>>>,
}

impl InMemoryAuditStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditStore for InMemoryAuditStore {
    async fn begin_run(&self, entity_id: EntityId, run_id: RunId) -> Result<(), AuditError> {
        let mut logs = self
            .logs
            .write()
            .map_err(|e| AuditError::StorageUnavailable(format!("lock poisoned: {}", e)))?;
        if logs.contains_key(&entity_id) {
            return Err(AuditError::LogAlreadyExists(entity_id));
        }
        logs.insert(entity_id.clone(), AuditLog::new(entity_id, run_id));
        Ok(())
    }

    async fn append(
        &self,
        entity_id: &EntityId,
        draft: AuditDraft,
    ) -> Result<ContentHash, AuditError> {
        let mut logs = self
            .logs
            .write()
            .map_err(|e| AuditError::StorageUnavailable(format!("lock poisoned: {}", e)))?;
        let log = logs
            .get_mut(entity_id)
            .ok_or_else(|| AuditError::LogNotFound(entity_id.clone()))?;
        Ok(log.append(draft))
    }

    async fn set_stop_reason(&self, entity_id: &EntityId, reason: &str) -> Result<(), AuditError> {
        let mut logs = self
            .logs
            .write()
            .map_err(|e| AuditError::StorageUnavailable(format!("lock poisoned: {}", e)))?;
        let log = logs
            .get_mut(entity_id)
            .ok_or_else(|| AuditError::LogNotFound(entity_id.clone()))?;
        log.set_stop_reason(reason);
        Ok(())
    }

    async fn entries(&self, entity_id: &EntityId) -> Result<Vec<AuditEntry>, AuditError> {
        let logs = self
            .logs
            .read()
            .map_err(|e| AuditError::StorageUnavailable(format!("lock poisoned: {}", e)))?;
        let log = logs
            .get(entity_id)
            .ok_or_else(|| AuditError::LogNotFound(entity_id.clone()))?;
        Ok(log.entries().to_vec())
    }

    async fn verify_integrity(&self, entity_id: &EntityId) -> Result<bool, AuditError> {
        let logs = self
            .logs
            .read()
            .map_err(|e| AuditError::StorageUnavailable(format!("lock poisoned: {}", e)))?;
        let log = logs
            .get(entity_id)
            .ok_or_else(|| AuditError::LogNotFound(entity_id.clone()))?;
        Ok(log.verify_integrity())
    }

    async fn summary(&self, entity_id: &EntityId) -> Result<AuditSummary, AuditError> {
        let logs = self
            .logs
            .read()
            .map_err(|e| AuditError::StorageUnavailable(format!("lock poisoned: {}", e)))?;
        let log = logs
            .get(entity_id)
            .ok_or_else(|| AuditError::LogNotFound(entity_id.clone()))?;
        Ok(log.summary())
    }
}

/// Audit store whose writes always fail — exercises the run-abort path.
#[derive(Clone, Default)]
pub struct FailingAuditStore;

#[async_trait]
impl AuditStore for FailingAuditStore {
    async fn begin_run(&self, _entity_id: EntityId, _run_id: RunId) -> Result<(), AuditError> {
        Ok(())
    }

    async fn append(
        &self,
        _entity_id: &EntityId,
        _draft: AuditDraft,
    ) -> Result<ContentHash, AuditError> {
        Err(AuditError::StorageUnavailable("simulated outage".into()))
    }

    async fn set_stop_reason(&self, _entity_id: &EntityId, _reason: &str) -> Result<(), AuditError> {
        Err(AuditError::StorageUnavailable("simulated outage".into()))
    }

    async fn entries(&self, entity_id: &EntityId) -> Result<Vec<AuditEntry>, AuditError> {
        Err(AuditError::LogNotFound(entity_id.clone()))
    }

    async fn verify_integrity(&self, entity_id: &EntityId) -> Result<bool, AuditError> {
        Err(AuditError::LogNotFound(entity_id.clone()))
    }

    async fn summary(&self, entity_id: &EntityId) -> Result<AuditSummary, AuditError> {
        Err(AuditError::LogNotFound(entity_id.clone()))
    }
}
