use crate::error::EngineError;
use crate::result::ExplorationResult;
use crate::state::ExplorationState;
use crate::store::HypothesisStore;
use chrono::Utc;
use prospect_audit::{AuditDraft, AuditStore};
use prospect_budget::{BudgetController, ContinueDecision, IterationCost, StopReason};
use prospect_collector::{Evaluator, EvidenceCollector, HypothesisContext, RateLimiter};
use prospect_scoring::{queries_for, ChannelSelector, InfoGainScorer, ScoreContext, SelectorError};
use prospect_types::{
    Channel, ContentHash, Decision, EntityId, EvidenceRecord, ExplorationConfig, Hypothesis,
    HypothesisId, HypothesisStatus, RunId, SignalCategory,
};
use prospect_validator::{DecisionValidator, SaturationTracker, ValidationInput};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Drives one entity's exploration runs end to end.
///
/// Construction wires the pure components (scorer, selector, budget
/// controller) to the external collaborators (collector, evaluator, audit
/// store). A single coordinator is reused across entities; all per-run
/// state is local to [`ExplorationCoordinator::run_exploration`].
pub struct ExplorationCoordinator {
    config: ExplorationConfig,
    scorer: InfoGainScorer,
    selector: ChannelSelector,
    budget: BudgetController,
    collector: Arc<dyn EvidenceCollector>,
    evaluator: Arc<dyn Evaluator>,
    audit: Arc<dyn AuditStore>,
    limiter: RateLimiter,
}

impl ExplorationCoordinator {
    pub fn new(
        config: ExplorationConfig,
        collector: Arc<dyn EvidenceCollector>,
        evaluator: Arc<dyn Evaluator>,
        audit: Arc<dyn AuditStore>,
        limiter: RateLimiter,
    ) -> Self {
        Self {
            scorer: InfoGainScorer::new(config.clone()),
            selector: ChannelSelector::new(config.clone()),
            budget: BudgetController::new(config.clone()),
            config,
            collector,
            evaluator,
            audit,
            limiter,
        }
    }

    pub fn config(&self) -> &ExplorationConfig {
        &self.config
    }

    /// Run the full exploration loop for one entity.
    ///
    /// Iterations are strictly sequential; the audit append at the end of
    /// each iteration is the durability boundary — its failure aborts the
    /// run rather than letting state and log diverge.
    pub async fn run_exploration(
        &self,
        entity_id: EntityId,
        entity_name: &str,
        hypotheses: Vec<Hypothesis>,
    ) -> Result<ExplorationResult, EngineError> {
        let run_id = RunId::new();
        let mut store = HypothesisStore::new(hypotheses)?;
        self.audit.begin_run(entity_id.clone(), run_id).await?;
        info!(entity = %entity_id, run = %run_id, hypotheses = store.len(), "exploration started");

        let mut states: HashMap<SignalCategory, ExplorationState> = HashMap::new();
        let mut validator = DecisionValidator::new();
        let mut tracker = SaturationTracker::new();
        let mut budget_state = self.budget.new_state();
        let mut iteration: u32 = 0;

        let stop_reason = loop {
            // Advisory saturation flag, turned into a stop here.
            if tracker.confidence_saturated(
                self.config.confidence_saturation_window,
                self.config.confidence_saturation_threshold,
            ) {
                break StopReason::ConfidenceSaturated;
            }

            let Some((hyp_id, category, score)) = self.pick_hypothesis(&store, &states) else {
                break if store.all().iter().any(|h| h.status == HypothesisStatus::Promoted) {
                    StopReason::ConfidenceSaturated
                } else {
                    StopReason::CategorySaturated
                };
            };

            match self.budget.can_continue(&budget_state, category) {
                ContinueDecision::Stop(reason) => break reason,
                ContinueDecision::CategoryLocked => {
                    debug!(category = %category, "category locked by budget");
                    states
                        .entry(category)
                        .or_insert_with(|| ExplorationState::new(category))
                        .mark_saturated();
                    continue;
                }
                ContinueDecision::Proceed => {}
            }

            let state = states
                .entry(category)
                .or_insert_with(|| ExplorationState::new(category));

            let channel = match self.selector.select(score, &state.failed_channels) {
                Ok(channel) => channel,
                Err(SelectorError::ChannelsExhausted) => {
                    debug!(category = %category, "all channels exhausted; category saturated");
                    state.mark_saturated();
                    continue;
                }
            };

            iteration += 1;
            let mut cost = IterationCost::default();

            // Primary query, then fallbacks, until one yields a reference.
            let reference = self
                .search_with_fallbacks(channel, entity_name, category, &mut cost)
                .await;

            let Some(url) = reference else {
                self.record_no_progress(
                    &entity_id,
                    run_id,
                    iteration,
                    &hyp_id,
                    category,
                    channel,
                    &cost,
                    &mut store,
                    &mut states,
                    &mut tracker,
                    &mut budget_state,
                    format!("all queries for channel {} returned no usable reference", channel),
                    true,
                )
                .await?;
                continue;
            };

            // Fetch; a failed fetch is a failed hop for the channel.
            cost.fetches += 1;
            let content = {
                let _permit = self.limiter.acquire().await;
                self.collector.fetch(&url).await
            };
            let content = match content {
                Ok(page) => page.content,
                Err(e) => {
                    warn!(channel = %channel, url = %url, error = %e, "fetch failed");
                    self.record_no_progress(
                        &entity_id,
                        run_id,
                        iteration,
                        &hyp_id,
                        category,
                        channel,
                        &cost,
                        &mut store,
                        &mut states,
                        &mut tracker,
                        &mut budget_state,
                        format!("fetch failed for {}", url),
                        true,
                    )
                    .await?;
                    continue;
                }
            };

            // Evaluate; a dead evaluator degrades to malformed output,
            // which the validator records as NO_PROGRESS.
            cost.evaluations += 1;
            let hypothesis = store.get(&hyp_id).expect("picked from store");
            let context = HypothesisContext {
                entity_name: entity_name.to_string(),
                category,
                statement: hypothesis.statement.clone(),
            };
            let evaluation = {
                let _permit = self.limiter.acquire().await;
                self.evaluator.evaluate(&context, &content).await
            };
            let (proposed, excerpt) = match evaluation {
                Ok(eval) => {
                    let excerpt = if eval.evidence_excerpt.is_empty() {
                        content.clone()
                    } else {
                        eval.evidence_excerpt
                    };
                    (eval.proposed_decision, excerpt)
                }
                Err(e) => {
                    warn!(error = %e, "evaluator unreachable");
                    (None, content.clone())
                }
            };

            let state = states.get(&category).expect("state created above");
            let outcome = validator.validate(&ValidationInput {
                hypothesis,
                channel,
                source_ref: &url,
                evidence_text: &excerpt,
                proposed,
                accepted_in_category: state.accepted_count,
                consecutive_rejects: state.consecutive_rejects,
            });

            store.apply_outcome(
                &hyp_id,
                outcome.record.clone(),
                outcome.new_confidence,
                self.config.promote_threshold,
                self.config.degrade_threshold,
            )?;

            let state = states.get_mut(&category).expect("state created above");
            state.record_channel_visit(channel);
            state.record_decision(outcome.decision, outcome.new_confidence);
            if outcome.category_saturated {
                debug!(category = %category, "category saturated by consecutive rejects");
                state.mark_saturated();
            }
            tracker.record(outcome.new_confidence);
            self.budget.record_iteration(
                &mut budget_state,
                category,
                &cost,
                outcome.decision,
                outcome.new_confidence,
            );

            // Durability boundary: the iteration is not finished until the
            // audit entry is written.
            self.audit
                .append(
                    &entity_id,
                    AuditDraft {
                        entity_id: entity_id.clone(),
                        run_id,
                        category,
                        iteration_number: iteration,
                        channel,
                        decision: outcome.decision,
                        rationale: outcome.verdict.rationale(),
                        confidence_before: outcome.confidence_before,
                        confidence_after: outcome.new_confidence,
                        applied_delta: outcome.applied_delta,
                        category_multiplier: outcome.category_multiplier,
                        cost_this_iteration_usd: cost.total_usd(&self.config.cost_model),
                        recorded_at: Utc::now(),
                    },
                )
                .await?;
        };

        info!(entity = %entity_id, reason = %stop_reason, iterations = iteration, "exploration stopped");
        self.audit
            .set_stop_reason(&entity_id, stop_reason.as_str())
            .await?;
        let audit_summary = self.audit.summary(&entity_id).await?;

        let hypotheses = store.archive();
        let final_confidence: HashMap<HypothesisId, f64> = hypotheses
            .iter()
            .map(|h| (h.id.clone(), h.confidence))
            .collect();
        let promoted: Vec<HypothesisId> = hypotheses
            .iter()
            .filter(|h| h.status == HypothesisStatus::Promoted)
            .map(|h| h.id.clone())
            .collect();

        Ok(ExplorationResult {
            entity_id,
            run_id,
            final_confidence,
            promoted,
            stop_reason,
            audit: audit_summary,
            hypotheses,
        })
    }

    /// Highest-priority active hypothesis in an unsaturated category.
    fn pick_hypothesis(
        &self,
        store: &HypothesisStore,
        states: &HashMap<SignalCategory, ExplorationState>,
    ) -> Option<(HypothesisId, SignalCategory, f64)> {
        let ctx = ScoreContext::default();
        store
            .active()
            .filter(|h| {
                states
                    .get(&h.category)
                    .map(|s| !s.saturated)
                    .unwrap_or(true)
            })
            .map(|h| {
                let visits = states.get(&h.category).map(|s| s.visits()).unwrap_or(0);
                (h.id.clone(), h.category, self.scorer.score(h, visits, &ctx))
            })
            .max_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Try the channel's primary query, then its fallbacks.
    async fn search_with_fallbacks(
        &self,
        channel: Channel,
        entity_name: &str,
        category: SignalCategory,
        cost: &mut IterationCost,
    ) -> Option<String> {
        for query in queries_for(channel).render(entity_name, category) {
            cost.searches += 1;
            let result = {
                let _permit = self.limiter.acquire().await;
                self.collector.search(&query).await
            };
            match result {
                Ok(response) => {
                    if let Some(url) = response.top_url() {
                        return Some(url.to_string());
                    }
                    debug!(channel = %channel, query = %query, "query returned no results");
                }
                Err(e) => {
                    warn!(channel = %channel, query = %query, error = %e, "search failed");
                }
            }
        }
        None
    }

    /// Record a `NO_PROGRESS` iteration that produced no evidence.
    ///
    /// `channel_failed` distinguishes an exhausted channel (counts toward
    /// its exclusion) from other empty-handed iterations.
    #[allow(clippy::too_many_arguments)]
    async fn record_no_progress(
        &self,
        entity_id: &EntityId,
        run_id: RunId,
        iteration: u32,
        hyp_id: &HypothesisId,
        category: SignalCategory,
        channel: Channel,
        cost: &IterationCost,
        store: &mut HypothesisStore,
        states: &mut HashMap<SignalCategory, ExplorationState>,
        tracker: &mut SaturationTracker,
        budget_state: &mut prospect_budget::BudgetState,
        rationale: String,
        channel_failed: bool,
    ) -> Result<(), EngineError> {
        let confidence = store.get(hyp_id).expect("picked from store").confidence;

        let record = EvidenceRecord {
            channel,
            source_ref: String::new(),
            decision: Decision::NoProgress,
            applied_delta: 0.0,
            excerpt_hash: ContentHash::zero(),
            recorded_at: Utc::now(),
        };
        store.apply_outcome(
            hyp_id,
            record,
            confidence,
            self.config.promote_threshold,
            self.config.degrade_threshold,
        )?;

        let state = states
            .entry(category)
            .or_insert_with(|| ExplorationState::new(category));
        if channel_failed {
            state.record_channel_failure(channel);
        }
        state.record_decision(Decision::NoProgress, confidence);
        tracker.record(confidence);
        self.budget.record_iteration(
            budget_state,
            category,
            cost,
            Decision::NoProgress,
            confidence,
        );

        self.audit
            .append(
                entity_id,
                AuditDraft {
                    entity_id: entity_id.clone(),
                    run_id,
                    category,
                    iteration_number: iteration,
                    channel,
                    decision: Decision::NoProgress,
                    rationale,
                    confidence_before: confidence,
                    confidence_after: confidence,
                    applied_delta: 0.0,
                    category_multiplier: 1.0,
                    cost_this_iteration_usd: cost.total_usd(&self.config.cost_model),
                    recorded_at: Utc::now(),
                },
            )
            .await?;
        Ok(())
    }
}
