use crate::error::CollectorError;
use crate::types::{Evaluation, FetchResponse, HypothesisContext, SearchResponse};
use async_trait::async_trait;

/// The external search/fetch service.
///
/// Turns a query into references and a reference into page content. Both
/// calls may fail; the coordinator treats a failure as a failed hop and
/// moves on to the next fallback query.
#[async_trait]
pub trait EvidenceCollector: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResponse, CollectorError>;

    async fn fetch(&self, url: &str) -> Result<FetchResponse, CollectorError>;
}

/// The external language-model evaluator.
///
/// Its proposed decision is advisory: the validator re-checks the rubric
/// criteria rather than trusting the label outright.
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(
        &self,
        context: &HypothesisContext,
        evidence_text: &str,
    ) -> Result<Evaluation, CollectorError>;
}
