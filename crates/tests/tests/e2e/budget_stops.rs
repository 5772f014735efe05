//! End-to-end: every budget ceiling ends the run cleanly with its own
//! terminal reason — never an error.

use prospect_audit::InMemoryAuditStore;
use prospect_budget::StopReason;
use prospect_collector::{RateLimiter, SimulatedCollector, SimulatedEvaluator};
use prospect_engine::ExplorationCoordinator;
use prospect_types::{EntityId, ExplorationConfig, Hypothesis, SignalCategory};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const STORY_A: &str =
    "Acme Corp is hiring 40 warehouse staff for its new Rotterdam distribution hub.";
const STORY_B: &str =
    "Acme Corp will open a second fulfilment centre and plans to recruit drivers.";
const STORY_C: &str =
    "Acme Corp announces an expanded night shift, recruiting a further sixty operators.";

fn hypothesis() -> Hypothesis {
    Hypothesis::new(
        "h1",
        "acme",
        "Acme Corp",
        SignalCategory::Hiring,
        "Acme Corp is scaling its logistics operation",
    )
}

fn accepting_collector() -> SimulatedCollector {
    SimulatedCollector::new()
        .with_result("\"Acme Corp\"", "https://acme.example/story")
        .with_rotating_pages(
            "acme.example/story",
            vec![STORY_A.into(), STORY_B.into(), STORY_C.into()],
        )
}

fn coordinator(config: ExplorationConfig) -> ExplorationCoordinator {
    ExplorationCoordinator::new(
        config,
        Arc::new(accepting_collector()),
        Arc::new(SimulatedEvaluator::new()),
        Arc::new(InMemoryAuditStore::new()),
        RateLimiter::unlimited(),
    )
}

async fn run(config: ExplorationConfig) -> (StopReason, u32) {
    let result = coordinator(config)
        .run_exploration(EntityId::new("acme"), "Acme Corp", vec![hypothesis()])
        .await
        .unwrap();
    (result.stop_reason, result.audit.total_iterations)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn total_iteration_cap_stops_with_max_iterations() {
    let config = ExplorationConfig {
        max_total_iterations: 2,
        max_iterations_per_category: 5,
        ..ExplorationConfig::default()
    };
    let (reason, iterations) = run(config).await;
    assert_eq!(reason, StopReason::MaxIterations);
    assert_eq!(iterations, 2);
}

#[tokio::test]
async fn cost_cap_stops_with_budget_exceeded() {
    // Default cost model spends ~0.026 per full iteration; a one-cent cap
    // is blown by the very first one.
    let config = ExplorationConfig {
        cost_cap_usd: 0.01,
        ..ExplorationConfig::default()
    };
    let (reason, iterations) = run(config).await;
    assert_eq!(reason, StopReason::BudgetExceeded);
    assert_eq!(iterations, 1);
}

#[tokio::test]
async fn zero_time_budget_stops_immediately() {
    let config = ExplorationConfig {
        max_time_seconds: 0,
        ..ExplorationConfig::default()
    };
    let (reason, iterations) = run(config).await;
    assert_eq!(reason, StopReason::TimeExceeded);
    assert_eq!(iterations, 0);
}

#[tokio::test]
async fn high_confidence_streak_stops_as_saturated() {
    // Promotion is pushed out of reach so the streak rule, not the
    // promotion threshold, ends the run.
    let config = ExplorationConfig {
        high_confidence_threshold: 0.9,
        high_confidence_consecutive: 2,
        promote_threshold: 0.99,
        ..ExplorationConfig::default()
    };
    let coordinator = coordinator(config);
    let result = coordinator
        .run_exploration(
            EntityId::new("acme"),
            "Acme Corp",
            vec![hypothesis().with_confidence(0.93)],
        )
        .await
        .unwrap();
    assert_eq!(result.stop_reason, StopReason::ConfidenceSaturated);
    assert_eq!(result.audit.total_iterations, 2);
}

#[tokio::test]
async fn evidence_cap_stops_with_max_iterations() {
    let config = ExplorationConfig {
        max_evidence_total: 1,
        max_iterations_per_category: 5,
        ..ExplorationConfig::default()
    };
    let (reason, iterations) = run(config).await;
    assert_eq!(reason, StopReason::MaxIterations);
    assert_eq!(iterations, 1);
}
