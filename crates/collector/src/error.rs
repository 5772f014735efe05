/// Errors from the external collaborators.
///
/// These never propagate out of the coordinator as faults: a failed call
/// triggers the fallback-query sequence and ultimately a `NO_PROGRESS`
/// outcome.
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("search failed: {0}")]
    SearchFailed(String),
    #[error("fetch failed: {0}")]
    FetchFailed(String),
    #[error("evaluator failed: {0}")]
    EvaluatorFailed(String),
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
}
