use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal reason for ending an exploration run.
///
/// The wire form is carried into the final result and the audit trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// Monetary cost ceiling reached.
    BudgetExceeded,
    /// Wall-clock ceiling reached.
    TimeExceeded,
    /// Confidence stopped moving — plateau window or sustained high streak.
    ConfidenceSaturated,
    /// Every category is saturated or locked.
    CategorySaturated,
    /// Total iteration cap or evidence cap reached.
    MaxIterations,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::BudgetExceeded => "BUDGET_EXCEEDED",
            StopReason::TimeExceeded => "TIME_EXCEEDED",
            StopReason::ConfidenceSaturated => "CONFIDENCE_SATURATED",
            StopReason::CategorySaturated => "CATEGORY_SATURATED",
            StopReason::MaxIterations => "MAX_ITERATIONS",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
