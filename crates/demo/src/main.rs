#![deny(unsafe_code)]
//! Prospect demo binary.
//!
//! Runs a self-contained demonstration of:
//! 1. A single-entity exploration with the full iteration trace
//! 2. A multi-entity batch over the bounded worker pool
//! 3. Audit-chain verification and summaries
//!
//! No external services required -- all collaborators are simulated.

mod workload;

use anyhow::Context;
use prospect_audit::{AuditStore, InMemoryAuditStore};
use prospect_collector::{RateLimiter, SimulatedEvaluator};
use prospect_engine::{BatchRunner, ExplorationCoordinator};
use prospect_types::{EntityId, ExplorationConfig};
use std::sync::Arc;
use std::time::Duration;

const BANNER: &str = r#"
 ╔══════════════════════════════════════════════════════════════╗
 ║                    Prospect  --  Demo                        ║
 ║                                                              ║
 ║   Bounded, cost-governed hypothesis exploration with a       ║
 ║   hash-chained audit trail.                                  ║
 ╚══════════════════════════════════════════════════════════════╝
"#;

fn section(title: &str) {
    let width: usize = 60;
    let pad = width.saturating_sub(title.len() + 4);
    let left = pad / 2;
    let right = pad - left;
    println!();
    println!(" ┌{}┐", "─".repeat(width));
    println!(" │{}  {}  {}│", " ".repeat(left), title, " ".repeat(right));
    println!(" └{}┘", "─".repeat(width));
}

fn ok(msg: &str) {
    println!("   [OK]  {}", msg);
}

fn info(msg: &str) {
    println!("   [--]  {}", msg);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(tracing::Level::WARN)
        .init();

    println!("{}", BANNER);

    if let Err(e) = run_demo().await {
        eprintln!();
        eprintln!("   [FATAL]  Demo failed: {:#}", e);
        std::process::exit(1);
    }

    println!();
    println!(" ══════════════════════════════════════════════════════════════");
    println!("  Demo complete.");
    println!(" ══════════════════════════════════════════════════════════════");
    println!();
}

async fn run_demo() -> anyhow::Result<()> {
    // ── Phase A: Wiring ─────────────────────────────────────────────
    section("Phase A: Wiring");

    let config = ExplorationConfig::demo();
    info(&format!(
        "ExplorationConfig::demo()  cost_cap=${:.2}  max_iterations={}",
        config.cost_cap_usd, config.max_total_iterations
    ));

    let audit = Arc::new(InMemoryAuditStore::new());
    let coordinator = Arc::new(ExplorationCoordinator::new(
        config,
        Arc::new(workload::seeded_collector()),
        Arc::new(SimulatedEvaluator::new()),
        audit.clone(),
        RateLimiter::new(4, Duration::from_millis(5)),
    ));
    ok("Coordinator online (simulated collector + evaluator)");

    // ── Phase B: Batch Exploration ──────────────────────────────────
    section("Phase B: Batch Exploration");

    let requests = workload::demo_requests();
    info(&format!("Exploring {} entities", requests.len()));

    let runner = BatchRunner::new(coordinator);
    let results = runner.run(requests).await;

    for (entity_id, result) in &results {
        let result = result
            .as_ref()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("run failed for {}", entity_id))?;
        ok(&format!(
            "{}  stop={}  iterations={}  cost=${:.3}",
            entity_id,
            result.stop_reason,
            result.audit.total_iterations,
            result.audit.total_cost_usd,
        ));
        for h in &result.hypotheses {
            info(&format!(
                "  {}  {:?}  confidence {:.2} (started 0.50)",
                h.id, h.status, h.confidence
            ));
        }
    }

    // ── Phase C: Audit Verification ─────────────────────────────────
    section("Phase C: Audit Verification");

    for (entity_id, _) in &results {
        let intact = audit.verify_integrity(entity_id).await?;
        anyhow::ensure!(intact, "audit chain broken for {}", entity_id);
        let summary = audit.summary(entity_id).await?;
        ok(&format!(
            "{}  chain intact  {} entries  reason={}",
            entity_id,
            summary.total_iterations,
            summary.stop_reason.as_deref().unwrap_or("-"),
        ));
    }

    // Show the full trace for one entity.
    let acme = EntityId::new("acme");
    info("Iteration trace for acme:");
    for entry in audit.entries(&acme).await? {
        info(&format!(
            "  #{} {} {} {} Δ{:+.3} → {:.2}",
            entry.iteration_number,
            entry.category,
            entry.channel,
            entry.decision,
            entry.applied_delta,
            entry.confidence_after,
        ));
    }

    Ok(())
}
