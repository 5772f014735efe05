use crate::dedup::{DedupIndex, DuplicateCheck};
use crate::rubric::{self, CriteriaReport};
use crate::saturation::CATEGORY_REJECT_SATURATION;
use crate::verdict::{Criterion, RejectCause, Verdict};
use chrono::Utc;
use prospect_types::{
    Channel, ContentHash, Decision, EvidenceRecord, Hypothesis, HypothesisId, CONFIDENCE_CEIL,
    CONFIDENCE_FLOOR,
};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Confidence delta for a full accept, before the category multiplier.
pub const ACCEPT_DELTA: f64 = 0.06;
/// Confidence delta for a weak accept, before the category multiplier.
pub const WEAK_ACCEPT_DELTA: f64 = 0.02;

/// Everything the validator needs to judge one piece of evidence.
#[derive(Debug)]
pub struct ValidationInput<'a> {
    pub hypothesis: &'a Hypothesis,
    pub channel: Channel,
    pub source_ref: &'a str,
    pub evidence_text: &'a str,
    /// The external evaluator's proposed decision — advisory only.
    /// `None` models malformed evaluator output.
    pub proposed: Option<Decision>,
    /// Accepts already recorded in this hypothesis's category this run.
    pub accepted_in_category: u32,
    /// Consecutive rejects in this category before this iteration.
    pub consecutive_rejects: u32,
}

/// Confirmed decision plus the exact arithmetic that was applied.
#[derive(Clone, Debug)]
pub struct ValidationOutcome {
    pub verdict: Verdict,
    pub decision: Decision,
    pub raw_delta: f64,
    pub category_multiplier: f64,
    pub applied_delta: f64,
    pub confidence_before: f64,
    pub new_confidence: f64,
    pub excerpt_hash: ContentHash,
    /// True when this decision saturates the category.
    pub category_saturated: bool,
    /// Ready-to-apply evidence record for the hypothesis store.
    pub record: EvidenceRecord,
}

/// Applies the hard rubric and the fixed confidence arithmetic.
///
/// Holds the per-hypothesis dedup registries for the duration of one run;
/// it is the sole component that produces confidence updates.
#[derive(Default)]
pub struct DecisionValidator {
    dedup: HashMap<HypothesisId, DedupIndex>,
}

impl DecisionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Judge one piece of evidence and compute the confidence update.
    pub fn validate(&mut self, input: &ValidationInput<'_>) -> ValidationOutcome {
        let verdict = self.classify(input);
        let decision = verdict.decision();

        let raw_delta = match decision {
            Decision::Accept => ACCEPT_DELTA,
            Decision::WeakAccept => WEAK_ACCEPT_DELTA,
            Decision::Reject | Decision::NoProgress => 0.0,
        };
        let category_multiplier = 1.0 / (1.0 + input.accepted_in_category as f64);
        let applied_delta = raw_delta * category_multiplier;

        let confidence_before = input.hypothesis.confidence;
        let new_confidence =
            (confidence_before + applied_delta).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEIL);

        let category_saturated = decision == Decision::Reject
            && input.consecutive_rejects + 1 >= CATEGORY_REJECT_SATURATION;

        let excerpt_hash = DedupIndex::excerpt_hash(input.evidence_text);
        debug!(
            hypothesis = %input.hypothesis.id,
            decision = %decision,
            applied_delta,
            category_multiplier,
            "evidence validated"
        );

        ValidationOutcome {
            decision,
            raw_delta,
            category_multiplier,
            applied_delta,
            confidence_before,
            new_confidence,
            excerpt_hash: excerpt_hash.clone(),
            category_saturated,
            record: EvidenceRecord {
                channel: input.channel,
                source_ref: input.source_ref.to_string(),
                decision,
                applied_delta,
                excerpt_hash,
                recorded_at: Utc::now(),
            },
            verdict,
        }
    }

    /// The hard rubric. The evaluator's label is consulted only where the
    /// rubric itself cannot decide (relevance, contradiction).
    fn classify(&mut self, input: &ValidationInput<'_>) -> Verdict {
        let proposed = match input.proposed {
            Some(p) => p,
            None => {
                warn!(
                    hypothesis = %input.hypothesis.id,
                    "malformed evaluator output; recording NO_PROGRESS"
                );
                return Verdict::NoProgress {
                    reason: "evaluator output missing or unparseable".into(),
                };
            }
        };
        if proposed == Decision::NoProgress {
            return Verdict::NoProgress {
                reason: "no relevant evidence found in fetched content".into(),
            };
        }

        // Novelty is checked first and independently of the evaluator.
        let index = self.dedup.entry(input.hypothesis.id.clone()).or_default();
        match index.check(input.evidence_text) {
            DuplicateCheck::Exact => {
                return Verdict::Reject {
                    cause: RejectCause::Duplicate { similarity: 1.0 },
                }
            }
            DuplicateCheck::Near { similarity } => {
                return Verdict::Reject {
                    cause: RejectCause::Duplicate { similarity },
                }
            }
            DuplicateCheck::New => {}
        }

        // Contradiction: textual cues, or the evaluator's reject confirmed
        // against the text.
        if rubric::contradicts(input.evidence_text) || proposed == Decision::Reject {
            index.register(input.evidence_text);
            return Verdict::Reject {
                cause: RejectCause::Contradiction,
            };
        }

        let criteria = CriteriaReport {
            novel: true,
            entity_match: rubric::names_entity(input.evidence_text, &input.hypothesis.entity_name),
            concrete_action: rubric::implies_concrete_action(input.evidence_text),
            credible_source: rubric::credible_source(input.channel),
        };

        match criteria.missing_count() {
            0 => {
                index.register(input.evidence_text);
                Verdict::Accept { criteria }
            }
            1 => {
                let missing = if !criteria.entity_match {
                    Criterion::EntityMatch
                } else if !criteria.concrete_action {
                    Criterion::ConcreteAction
                } else {
                    Criterion::CredibleSource
                };
                index.register(input.evidence_text);
                Verdict::WeakAccept { criteria, missing }
            }
            // Too thin to count as evidence at all.
            _ => Verdict::NoProgress {
                reason: format!(
                    "evidence missing {} acceptance criteria",
                    criteria.missing_count()
                ),
            },
        }
    }
}
