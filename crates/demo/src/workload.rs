//! Canned entities, hypotheses, and evidence pages for the demo run.

use prospect_collector::SimulatedCollector;
use prospect_engine::ExplorationRequest;
use prospect_types::{EntityId, Hypothesis, SignalCategory};

/// A simulated collector seeded with stories for two entities.
pub fn seeded_collector() -> SimulatedCollector {
    SimulatedCollector::new()
        .with_latency_jitter()
        // Acme: a healthy hiring signal with two independent stories.
        .with_result("\"Acme Corp\" careers", "https://acme.example/careers")
        .with_rotating_pages(
            "acme.example/careers",
            vec![
                "Acme Corp is hiring 40 warehouse staff for its new Rotterdam \
                 distribution hub, opening next quarter."
                    .into(),
                "Acme Corp plans to recruit a night-shift logistics team as the \
                 second phase of its build-out."
                    .into(),
            ],
        )
        .with_result("\"Acme Corp\"", "https://acme.example/news")
        .with_page(
            "acme.example/news",
            "Acme Corp announces an expanded partnership with a Benelux haulage group.",
        )
        // Borealis: a denial — the hypothesis should not gain confidence.
        .with_result("\"Borealis Ltd\"", "https://borealis.example/statement")
        .with_page(
            "borealis.example/statement",
            "Borealis Ltd denies reports that it plans to enter the battery market.",
        )
}

/// Exploration requests for the demo batch.
pub fn demo_requests() -> Vec<ExplorationRequest> {
    vec![
        ExplorationRequest {
            entity_id: EntityId::new("acme"),
            entity_name: "Acme Corp".into(),
            hypotheses: vec![
                Hypothesis::new(
                    "acme-hiring",
                    "acme",
                    "Acme Corp",
                    SignalCategory::Hiring,
                    "Acme Corp is scaling its logistics workforce",
                ),
                Hypothesis::new(
                    "acme-partnership",
                    "acme",
                    "Acme Corp",
                    SignalCategory::Partnership,
                    "Acme Corp is building a distribution alliance",
                ),
            ],
        },
        ExplorationRequest {
            entity_id: EntityId::new("borealis"),
            entity_name: "Borealis Ltd".into(),
            hypotheses: vec![Hypothesis::new(
                "borealis-launch",
                "borealis",
                "Borealis Ltd",
                SignalCategory::ProductLaunch,
                "Borealis Ltd is entering the battery market",
            )],
        },
    ]
}
