//! Property tests: the audit chain verifies iff nothing was altered.

use chrono::Utc;
use proptest::prelude::*;
use prospect_audit::{AuditDraft, AuditLog};
use prospect_types::{Channel, Decision, EntityId, RunId, SignalCategory};

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn arb_decision() -> impl Strategy<Value = Decision> {
    prop_oneof![
        Just(Decision::Accept),
        Just(Decision::WeakAccept),
        Just(Decision::Reject),
        Just(Decision::NoProgress),
    ]
}

fn arb_draft() -> impl Strategy<Value = (Decision, f64, f64, String)> {
    (
        arb_decision(),
        0.05f64..=0.95,
        0.0f64..=0.06,
        "[a-z ]{5,40}",
    )
}

fn build_log(drafts: &[(Decision, f64, f64, String)]) -> AuditLog {
    let entity = EntityId::new("acme");
    let run = RunId::new();
    let mut log = AuditLog::new(entity.clone(), run);
    for (i, (decision, confidence, delta, rationale)) in drafts.iter().enumerate() {
        log.append(AuditDraft {
            entity_id: entity.clone(),
            run_id: run,
            category: SignalCategory::ALL[i % SignalCategory::ALL.len()],
            iteration_number: i as u32 + 1,
            channel: Channel::ALL[i % Channel::ALL.len()],
            decision: *decision,
            rationale: rationale.clone(),
            confidence_before: *confidence,
            confidence_after: (confidence + delta).min(0.95),
            applied_delta: *delta,
            category_multiplier: 1.0,
            cost_this_iteration_usd: 0.026,
            recorded_at: Utc::now(),
        });
    }
    log
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// An untouched chain of any length and content verifies.
    #[test]
    fn untouched_chain_verifies(drafts in prop::collection::vec(arb_draft(), 0..30)) {
        let log = build_log(&drafts);
        prop_assert!(log.verify_integrity());
        prop_assert_eq!(log.len(), drafts.len());
    }

    /// Altering any one entry breaks the chain exactly at that entry.
    #[test]
    fn any_single_alteration_detected(
        drafts in prop::collection::vec(arb_draft(), 1..20),
        tamper_seed in any::<usize>(),
    ) {
        let log = build_log(&drafts);
        let index = tamper_seed % log.len();

        let mut entries = log.entries().to_vec();
        entries[index].applied_delta += 0.011;
        let tampered = AuditLog::from_entries(
            log.entity_id.clone(),
            log.run_id,
            entries,
        );

        prop_assert!(!tampered.verify_integrity());
        prop_assert_eq!(tampered.first_broken_index(), Some(index));
    }

    /// Re-sealing a forged entry cannot hide it (unless it is the newest):
    /// the successor's stored link no longer matches.
    #[test]
    fn resealed_forgery_breaks_successor(
        drafts in prop::collection::vec(arb_draft(), 2..20),
        tamper_seed in any::<usize>(),
    ) {
        let log = build_log(&drafts);
        // Forge anywhere except the last entry.
        let index = tamper_seed % (log.len() - 1);

        let mut entries = log.entries().to_vec();
        entries[index].rationale.push_str(" forged");
        entries[index].entry_hash = entries[index].recompute_hash();
        let tampered = AuditLog::from_entries(
            log.entity_id.clone(),
            log.run_id,
            entries,
        );

        prop_assert!(!tampered.verify_integrity());
        prop_assert_eq!(tampered.first_broken_index(), Some(index + 1));
    }
}
