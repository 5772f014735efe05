//! Adversarial: a channel that keeps serving the same story (or light
//! rewordings of it) cannot inflate confidence. The first accept counts;
//! everything after is a duplicate reject, and the category saturates.

use prospect_audit::InMemoryAuditStore;
use prospect_budget::StopReason;
use prospect_collector::{RateLimiter, SimulatedCollector, SimulatedEvaluator};
use prospect_engine::ExplorationCoordinator;
use prospect_types::{Decision, EntityId, ExplorationConfig, Hypothesis, SignalCategory};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const STORY: &str =
    "Acme Corp is hiring 40 warehouse staff for its new Rotterdam distribution hub.";

fn spam_config() -> ExplorationConfig {
    ExplorationConfig {
        // Plenty of room: only saturation should stop the spam.
        max_iterations_per_category: 10,
        max_total_iterations: 40,
        ..ExplorationConfig::default()
    }
}

fn hypothesis() -> Hypothesis {
    Hypothesis::new(
        "h1",
        "acme",
        "Acme Corp",
        SignalCategory::Hiring,
        "Acme Corp is scaling its logistics operation",
    )
}

async fn run_against(collector: SimulatedCollector) -> (StopReason, f64, u32, u32) {
    let coordinator = ExplorationCoordinator::new(
        spam_config(),
        Arc::new(collector),
        Arc::new(SimulatedEvaluator::new()),
        Arc::new(InMemoryAuditStore::new()),
        RateLimiter::unlimited(),
    );
    let result = coordinator
        .run_exploration(EntityId::new("acme"), "Acme Corp", vec![hypothesis()])
        .await
        .unwrap();
    (
        result.stop_reason,
        result.confidence_of(&"h1".into()).unwrap(),
        result.audit.count(Decision::Accept),
        result.audit.count(Decision::Reject),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn identical_story_spam_gains_exactly_one_accept() {
    let collector = SimulatedCollector::new()
        .with_result("\"Acme Corp\"", "https://spam.example/story")
        .with_page("spam.example/story", STORY);

    let (reason, confidence, accepts, rejects) = run_against(collector).await;
    assert_eq!(accepts, 1);
    assert_eq!(rejects, 3);
    assert!((confidence - 0.56).abs() < 1e-9);
    assert_eq!(reason, StopReason::CategorySaturated);
}

#[tokio::test]
async fn reworded_spam_is_caught_by_near_duplicate_check() {
    // Each "new" page swaps one word of the same press release.
    let collector = SimulatedCollector::new()
        .with_result("\"Acme Corp\"", "https://spam.example/story")
        .with_rotating_pages(
            "spam.example/story",
            vec![
                STORY.into(),
                STORY.replace("hiring", "recruiting"),
                STORY.replace("warehouse", "logistics"),
                STORY.replace("new", "large"),
            ],
        );

    let (reason, confidence, accepts, _rejects) = run_against(collector).await;
    assert_eq!(accepts, 1);
    assert!((confidence - 0.56).abs() < 1e-9);
    assert_eq!(reason, StopReason::CategorySaturated);
}
