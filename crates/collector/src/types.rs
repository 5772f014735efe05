use prospect_types::{Decision, SignalCategory};
use serde::{Deserialize, Serialize};

/// One search result reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
}

/// Result of one search call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}

impl SearchResponse {
    /// The first usable reference, if the search produced any.
    pub fn top_url(&self) -> Option<&str> {
        self.results.first().map(|hit| hit.url.as_str())
    }
}

/// Result of fetching one URL.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FetchResponse {
    pub content: String,
}

/// Hypothesis context handed to the evaluator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HypothesisContext {
    pub entity_name: String,
    pub category: SignalCategory,
    pub statement: String,
}

/// The evaluator's judgment of one piece of evidence.
///
/// `proposed_decision` is advisory input to the validator's rubric; `None`
/// models output that could not be parsed into the decision vocabulary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Evaluation {
    pub proposed_decision: Option<Decision>,
    pub rationale: String,
    pub evidence_excerpt: String,
}
