use crate::coordinator::ExplorationCoordinator;
use crate::error::EngineError;
use crate::result::ExplorationResult;
use futures::stream::{self, StreamExt};
use prospect_types::{EntityId, Hypothesis};
use std::sync::Arc;
use tracing::info;

/// One entity's exploration request.
#[derive(Clone, Debug)]
pub struct ExplorationRequest {
    pub entity_id: EntityId,
    pub entity_name: String,
    pub hypotheses: Vec<Hypothesis>,
}

/// Fans entity runs out over a bounded worker pool.
///
/// Runs are independent: no state is shared between them except the
/// coordinator's rate limiter. One run failing (for example, audit storage
/// going away) surfaces in its own result slot and never aborts the batch.
pub struct BatchRunner {
    coordinator: Arc<ExplorationCoordinator>,
}

impl BatchRunner {
    pub fn new(coordinator: Arc<ExplorationCoordinator>) -> Self {
        Self { coordinator }
    }

    /// Run every request, at most `max_concurrent_runs` at a time.
    pub async fn run(
        &self,
        requests: Vec<ExplorationRequest>,
    ) -> Vec<(EntityId, Result<ExplorationResult, EngineError>)> {
        let width = self.coordinator.config().max_concurrent_runs.max(1);
        info!(entities = requests.len(), width, "batch started");
        stream::iter(requests)
            .map(|request| {
                let coordinator = self.coordinator.clone();
                async move {
                    let entity_id = request.entity_id.clone();
                    let result = coordinator
                        .run_exploration(
                            request.entity_id,
                            &request.entity_name,
                            request.hypotheses,
                        )
                        .await;
                    (entity_id, result)
                }
            })
            .buffer_unordered(width)
            .collect()
            .await
    }
}
