//! End-to-end: the canonical confidence walk.
//!
//! A hypothesis starts at 0.50, takes a full accept (multiplier 1.0) to
//! 0.56, a second accept in the same category (multiplier 0.5) to 0.59, a
//! duplicate reject that leaves confidence unchanged, and then the
//! category's three-iteration allowance locks it for the rest of the run.

use prospect_audit::{AuditStore, InMemoryAuditStore};
use prospect_budget::StopReason;
use prospect_collector::{RateLimiter, SimulatedCollector, SimulatedEvaluator};
use prospect_engine::ExplorationCoordinator;
use prospect_types::{Decision, EntityId, ExplorationConfig, Hypothesis, SignalCategory};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const STORY_A: &str =
    "Acme Corp is hiring 40 warehouse staff for its new Rotterdam distribution hub.";
const STORY_B: &str =
    "Acme Corp will open a second fulfilment centre and plans to recruit drivers.";

fn hypothesis() -> Hypothesis {
    Hypothesis::new(
        "h1",
        "acme",
        "Acme Corp",
        SignalCategory::Hiring,
        "Acme Corp is scaling its logistics operation",
    )
}

fn coordinator(audit: Arc<InMemoryAuditStore>) -> ExplorationCoordinator {
    // Every query resolves to one URL whose content rotates A, B, A.
    let collector = SimulatedCollector::new()
        .with_result("\"Acme Corp\"", "https://acme.example/story")
        .with_rotating_pages(
            "acme.example/story",
            vec![STORY_A.into(), STORY_B.into(), STORY_A.into()],
        );
    ExplorationCoordinator::new(
        ExplorationConfig::default(),
        Arc::new(collector),
        Arc::new(SimulatedEvaluator::new()),
        audit,
        RateLimiter::unlimited(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn accept_accept_reject_walk() {
    let audit = Arc::new(InMemoryAuditStore::new());
    let entity = EntityId::new("acme");
    let result = coordinator(audit.clone())
        .run_exploration(entity.clone(), "Acme Corp", vec![hypothesis()])
        .await
        .unwrap();

    let entries = audit.entries(&entity).await.unwrap();
    assert_eq!(entries.len(), 3);

    // Iteration 1: full accept at multiplier 1.0.
    assert_eq!(entries[0].decision, Decision::Accept);
    assert!((entries[0].category_multiplier - 1.0).abs() < 1e-9);
    assert!((entries[0].applied_delta - 0.06).abs() < 1e-9);
    assert!((entries[0].confidence_before - 0.50).abs() < 1e-9);
    assert!((entries[0].confidence_after - 0.56).abs() < 1e-9);

    // Iteration 2: second accept in the category, multiplier halves.
    assert_eq!(entries[1].decision, Decision::Accept);
    assert!((entries[1].category_multiplier - 0.5).abs() < 1e-9);
    assert!((entries[1].applied_delta - 0.03).abs() < 1e-9);
    assert!((entries[1].confidence_after - 0.59).abs() < 1e-9);

    // Iteration 3: duplicate evidence rejects with zero delta.
    assert_eq!(entries[2].decision, Decision::Reject);
    assert_eq!(entries[2].applied_delta, 0.0);
    assert!((entries[2].confidence_after - 0.59).abs() < 1e-9);

    // The category's three-iteration allowance is spent; no 4th happened.
    assert_eq!(result.audit.total_iterations, 3);
    assert_eq!(result.stop_reason, StopReason::CategorySaturated);
    assert!((result.confidence_of(&"h1".into()).unwrap() - 0.59).abs() < 1e-9);
}

#[tokio::test]
async fn walk_leaves_chain_intact_and_counters_consistent() {
    let audit = Arc::new(InMemoryAuditStore::new());
    let entity = EntityId::new("acme");
    let result = coordinator(audit.clone())
        .run_exploration(entity.clone(), "Acme Corp", vec![hypothesis()])
        .await
        .unwrap();

    assert!(audit.verify_integrity(&entity).await.unwrap());
    let h = &result.hypotheses[0];
    assert!(h.counters_consistent());
    assert_eq!(h.iterations_accepted, 2);
    assert_eq!(h.iterations_rejected, 1);
    assert_eq!(h.evidence_log.len(), 3);
}

#[tokio::test]
async fn stop_reason_lands_in_audit_summary() {
    let audit = Arc::new(InMemoryAuditStore::new());
    let entity = EntityId::new("acme");
    coordinator(audit.clone())
        .run_exploration(entity.clone(), "Acme Corp", vec![hypothesis()])
        .await
        .unwrap();

    let summary = audit.summary(&entity).await.unwrap();
    assert_eq!(summary.stop_reason.as_deref(), Some("CATEGORY_SATURATED"));
    assert_eq!(summary.final_confidence.map(|c| (c * 100.0).round()), Some(59.0));
}
