//! Property tests: the fixed confidence arithmetic cannot drift.
//!
//! For every decision, `applied_delta ∈ {0.06 × m, 0.02 × m, 0}` with
//! `m = 1 / (1 + accepted_count)`, and confidence never leaves
//! [0.05, 0.95] for any input sequence.

use proptest::prelude::*;
use prospect_types::{
    Channel, Decision, Hypothesis, SignalCategory, CONFIDENCE_CEIL, CONFIDENCE_FLOOR,
};
use prospect_validator::{
    DecisionValidator, ValidationInput, ACCEPT_DELTA, WEAK_ACCEPT_DELTA,
};

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn hypothesis(confidence: f64) -> Hypothesis {
    Hypothesis::new(
        "h",
        "acme",
        "Acme Corp",
        SignalCategory::Hiring,
        "Acme Corp is scaling its logistics operation",
    )
    .with_confidence(confidence)
}

/// Unique accept-worthy evidence text per step.
fn accept_text(step: usize) -> String {
    format!(
        "Acme Corp announces phase p{} of its build-out and is hiring crew unit u{}.",
        step,
        step * 7 + 1
    )
}

fn arb_confidence() -> impl Strategy<Value = f64> {
    0.05f64..=0.95f64
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Accept deltas follow 0.06 / (1 + accepted_count) exactly.
    #[test]
    fn accept_delta_matches_formula(
        confidence in arb_confidence(),
        accepted in 0u32..40,
    ) {
        let h = hypothesis(confidence);
        let mut validator = DecisionValidator::new();
        let outcome = validator.validate(&ValidationInput {
            hypothesis: &h,
            channel: Channel::PressRelease,
            source_ref: "https://acme.example/pr",
            evidence_text: &accept_text(accepted as usize),
            proposed: Some(Decision::Accept),
            accepted_in_category: accepted,
            consecutive_rejects: 0,
        });
        prop_assert_eq!(outcome.decision, Decision::Accept);
        let m = 1.0 / (1.0 + accepted as f64);
        prop_assert!((outcome.category_multiplier - m).abs() < 1e-12);
        prop_assert!((outcome.applied_delta - ACCEPT_DELTA * m).abs() < 1e-12);
    }

    /// Weak accepts carry 0.02 / (1 + accepted_count) exactly.
    #[test]
    fn weak_accept_delta_matches_formula(
        confidence in arb_confidence(),
        accepted in 0u32..40,
    ) {
        let h = hypothesis(confidence);
        let mut validator = DecisionValidator::new();
        // A secondary source misses exactly the credibility criterion.
        let outcome = validator.validate(&ValidationInput {
            hypothesis: &h,
            channel: Channel::NewsMedia,
            source_ref: "https://news.example/item",
            evidence_text: &accept_text(accepted as usize),
            proposed: Some(Decision::Accept),
            accepted_in_category: accepted,
            consecutive_rejects: 0,
        });
        prop_assert_eq!(outcome.decision, Decision::WeakAccept);
        let m = 1.0 / (1.0 + accepted as f64);
        prop_assert!((outcome.applied_delta - WEAK_ACCEPT_DELTA * m).abs() < 1e-12);
    }

    /// Confidence stays inside [0.05, 0.95] under any run of forced accepts.
    #[test]
    fn confidence_never_escapes_bounds(
        start in arb_confidence(),
        steps in 1usize..60,
    ) {
        let mut h = hypothesis(start);
        let mut validator = DecisionValidator::new();
        for step in 0..steps {
            let outcome = validator.validate(&ValidationInput {
                hypothesis: &h,
                channel: Channel::PressRelease,
                source_ref: "https://acme.example/pr",
                evidence_text: &accept_text(step),
                proposed: Some(Decision::Accept),
                accepted_in_category: 0, // full delta every time
                consecutive_rejects: 0,
            });
            h.apply_evidence(outcome.record.clone(), outcome.new_confidence);
            prop_assert!(h.confidence >= CONFIDENCE_FLOOR);
            prop_assert!(h.confidence <= CONFIDENCE_CEIL);
        }
    }

    /// The iteration-counter identity holds for any decision sequence.
    #[test]
    fn counters_always_consistent(decisions in prop::collection::vec(0u8..4, 0..50)) {
        let mut h = hypothesis(0.5);
        let mut validator = DecisionValidator::new();
        for (step, kind) in decisions.iter().enumerate() {
            let (channel, text, proposed) = match kind {
                0 => (Channel::PressRelease, accept_text(step), Some(Decision::Accept)),
                1 => (Channel::NewsMedia, accept_text(step), Some(Decision::Accept)),
                2 => (
                    Channel::PressRelease,
                    format!("Acme Corp denies rumour number {}.", step),
                    Some(Decision::Reject),
                ),
                _ => (Channel::PressRelease, String::new(), Some(Decision::NoProgress)),
            };
            let outcome = validator.validate(&ValidationInput {
                hypothesis: &h,
                channel,
                source_ref: "https://example.com",
                evidence_text: &text,
                proposed,
                accepted_in_category: h.iterations_accepted,
                consecutive_rejects: 0,
            });
            h.apply_evidence(outcome.record.clone(), outcome.new_confidence);
        }
        prop_assert!(h.counters_consistent());
        prop_assert_eq!(h.iterations_attempted as usize, decisions.len());
    }

    /// Every applied delta is one of the three legal magnitudes.
    #[test]
    fn applied_delta_in_legal_set(
        kind in 0u8..4,
        accepted in 0u32..20,
        step in 0usize..1000,
    ) {
        let h = hypothesis(0.5);
        let mut validator = DecisionValidator::new();
        let (channel, text, proposed) = match kind {
            0 => (Channel::PressRelease, accept_text(step), Some(Decision::Accept)),
            1 => (Channel::NewsMedia, accept_text(step), Some(Decision::Accept)),
            2 => (
                Channel::PressRelease,
                format!("Acme Corp denies rumour number {}.", step),
                Some(Decision::Reject),
            ),
            _ => (Channel::PressRelease, String::new(), Some(Decision::NoProgress)),
        };
        let outcome = validator.validate(&ValidationInput {
            hypothesis: &h,
            channel,
            source_ref: "https://example.com",
            evidence_text: &text,
            proposed,
            accepted_in_category: accepted,
            consecutive_rejects: 0,
        });
        let m = 1.0 / (1.0 + accepted as f64);
        let legal = [ACCEPT_DELTA * m, WEAK_ACCEPT_DELTA * m, 0.0];
        prop_assert!(legal.iter().any(|d| (outcome.applied_delta - d).abs() < 1e-12));
    }
}
