//! End-to-end: entity runs in a batch are independent — separate audit
//! chains, separate budgets, a shared rate limiter, and per-slot failures.

use prospect_audit::{AuditStore, InMemoryAuditStore};
use prospect_collector::{RateLimiter, SimulatedCollector, SimulatedEvaluator};
use prospect_engine::{BatchRunner, ExplorationCoordinator, ExplorationRequest};
use prospect_types::{EntityId, ExplorationConfig, Hypothesis, SignalCategory};
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn request(entity: &str, category: SignalCategory) -> ExplorationRequest {
    let name = format!("{} Corp", entity);
    ExplorationRequest {
        entity_id: EntityId::new(entity),
        entity_name: name.clone(),
        hypotheses: vec![Hypothesis::new(
            format!("{}-h1", entity),
            entity,
            name,
            category,
            "expanding operations",
        )],
    }
}

fn runner(audit: Arc<InMemoryAuditStore>, limiter: RateLimiter) -> BatchRunner {
    let coordinator = ExplorationCoordinator::new(
        ExplorationConfig::demo(),
        Arc::new(SimulatedCollector::new()),
        Arc::new(SimulatedEvaluator::new()),
        audit,
        limiter,
    );
    BatchRunner::new(Arc::new(coordinator))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn every_entity_gets_its_own_verified_chain() {
    let audit = Arc::new(InMemoryAuditStore::new());
    let runner = runner(audit.clone(), RateLimiter::unlimited());

    let results = runner
        .run(vec![
            request("acme", SignalCategory::Hiring),
            request("borealis", SignalCategory::Funding),
            request("cobalt", SignalCategory::Expansion),
            request("dorado", SignalCategory::Technology),
        ])
        .await;

    assert_eq!(results.len(), 4);
    for (entity_id, result) in &results {
        let result = result.as_ref().expect("run succeeded");
        assert_eq!(&result.entity_id, entity_id);
        assert!(audit.verify_integrity(entity_id).await.unwrap());
        let summary = audit.summary(entity_id).await.unwrap();
        assert!(summary.stop_reason.is_some());
        // Chains never mix entities.
        for entry in audit.entries(entity_id).await.unwrap() {
            assert_eq!(&entry.entity_id, entity_id);
        }
    }
}

#[tokio::test]
async fn shared_rate_limiter_does_not_deadlock_the_pool() {
    let audit = Arc::new(InMemoryAuditStore::new());
    // Tight limiter: two in-flight calls, 2ms spacing, across all runs.
    let runner = runner(audit, RateLimiter::new(2, Duration::from_millis(2)));

    let results = runner
        .run(vec![
            request("acme", SignalCategory::Hiring),
            request("borealis", SignalCategory::Funding),
            request("cobalt", SignalCategory::Expansion),
        ])
        .await;

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|(_, r)| r.is_ok()));
}

#[tokio::test]
async fn one_failing_slot_leaves_the_rest_intact() {
    let audit = Arc::new(InMemoryAuditStore::new());
    let runner = runner(audit.clone(), RateLimiter::unlimited());

    // An empty hypothesis list fails its own slot; the others complete.
    let mut bad = request("empty", SignalCategory::Hiring);
    bad.hypotheses.clear();

    let results = runner
        .run(vec![
            request("acme", SignalCategory::Hiring),
            bad,
            request("borealis", SignalCategory::Funding),
        ])
        .await;

    let ok = results.iter().filter(|(_, r)| r.is_ok()).count();
    assert_eq!(ok, 2);
    let failed: Vec<_> = results.iter().filter(|(_, r)| r.is_err()).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].0, EntityId::new("empty"));
}
