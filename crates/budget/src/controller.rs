use crate::reason::StopReason;
use crate::state::{BudgetState, IterationCost};
use chrono::{DateTime, Utc};
use prospect_types::{Decision, ExplorationConfig, SignalCategory};
use tracing::debug;

/// Outcome of a budget check at the top of an iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContinueDecision {
    /// Budget allows another iteration on this category.
    Proceed,
    /// This category has used its iteration allowance; others may continue.
    CategoryLocked,
    /// The whole run must stop.
    Stop(StopReason),
}

/// Enforces iteration, cost, and time ceilings plus the early-stop rules.
///
/// Checks are evaluated in severity order: run-terminal caps first, then
/// the per-category lock. The controller owns all mutation of
/// [`BudgetState`]; callers only read it.
pub struct BudgetController {
    config: ExplorationConfig,
}

impl BudgetController {
    pub fn new(config: ExplorationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExplorationConfig {
        &self.config
    }

    /// Fresh budget state for one run, caps copied from config.
    pub fn new_state(&self) -> BudgetState {
        BudgetState::new(
            self.config.cost_cap_usd,
            self.config.max_total_iterations,
            self.config.max_time_seconds,
        )
    }

    /// May the run spend another iteration on `category`?
    pub fn can_continue(&self, state: &BudgetState, category: SignalCategory) -> ContinueDecision {
        self.can_continue_at(state, category, Utc::now())
    }

    /// Clock-injected variant of [`BudgetController::can_continue`].
    pub fn can_continue_at(
        &self,
        state: &BudgetState,
        category: SignalCategory,
        now: DateTime<Utc>,
    ) -> ContinueDecision {
        if state.elapsed_seconds(now) >= state.time_cap_seconds {
            return ContinueDecision::Stop(StopReason::TimeExceeded);
        }
        if state.cost_spent_usd >= state.cost_cap_usd {
            return ContinueDecision::Stop(StopReason::BudgetExceeded);
        }
        if state.iterations_used >= state.iteration_cap {
            return ContinueDecision::Stop(StopReason::MaxIterations);
        }
        if state.evidence_total >= self.config.max_evidence_total {
            return ContinueDecision::Stop(StopReason::MaxIterations);
        }
        if state.high_confidence_streak >= self.config.high_confidence_consecutive {
            return ContinueDecision::Stop(StopReason::ConfidenceSaturated);
        }
        if state.iterations_in(category) >= self.config.max_iterations_per_category {
            return ContinueDecision::CategoryLocked;
        }
        // A category not yet started counts against the category cap.
        if state.iterations_in(category) == 0
            && state.categories_started() >= self.config.max_categories
        {
            return ContinueDecision::CategoryLocked;
        }
        ContinueDecision::Proceed
    }

    /// Record one completed iteration: cost, counters, and the
    /// high-confidence streak used by the early-stop rule.
    pub fn record_iteration(
        &self,
        state: &mut BudgetState,
        category: SignalCategory,
        cost: &IterationCost,
        decision: Decision,
        confidence_after: f64,
    ) {
        let spent = cost.total_usd(&self.config.cost_model);
        state.cost_spent_usd += spent;
        state.iterations_used += 1;
        *state.category_iterations.entry(category).or_insert(0) += 1;
        if decision.is_evidence_bearing() {
            state.evidence_total += 1;
        }
        if confidence_after >= self.config.high_confidence_threshold {
            state.high_confidence_streak += 1;
        } else {
            state.high_confidence_streak = 0;
        }
        debug!(
            category = %category,
            iterations = state.iterations_used,
            cost_usd = state.cost_spent_usd,
            "iteration recorded"
        );
    }
}
