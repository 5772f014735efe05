use crate::error::CollectorError;
use crate::traits::{Evaluator, EvidenceCollector};
use crate::types::{Evaluation, FetchResponse, HypothesisContext, SearchHit, SearchResponse};
use async_trait::async_trait;
use prospect_types::{ContentHash, Decision};
use rand::Rng;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Simulated search/fetch backend for tests and demos.
///
/// Deterministic by default: a query resolves to a synthetic URL derived
/// from its hash, and a URL fetches synthetic content echoing it. Builder
/// knobs pin specific queries to specific results.
pub struct SimulatedCollector {
    /// (query substring, url) — first match wins.
    canned_results: Vec<(String, String)>,
    /// Query substrings that return no results.
    dead_queries: Vec<String>,
    /// (url, content) — first match wins.
    canned_pages: Vec<(String, String)>,
    /// (url, contents) — successive fetches of a matching url walk the list.
    rotating_pages: Vec<(String, Vec<String>, Mutex<usize>)>,
    /// Add a small random delay to each call.
    latency_jitter: bool,
}

impl SimulatedCollector {
    pub fn new() -> Self {
        Self {
            canned_results: Vec::new(),
            dead_queries: Vec::new(),
            canned_pages: Vec::new(),
            rotating_pages: Vec::new(),
            latency_jitter: false,
        }
    }

    /// Pin queries containing `query_part` to `url`.
    pub fn with_result(mut self, query_part: impl Into<String>, url: impl Into<String>) -> Self {
        self.canned_results.push((query_part.into(), url.into()));
        self
    }

    /// Make queries containing `query_part` return no results.
    pub fn with_no_results_for(mut self, query_part: impl Into<String>) -> Self {
        self.dead_queries.push(query_part.into());
        self
    }

    /// Pin `url` to `content`.
    pub fn with_page(mut self, url: impl Into<String>, content: impl Into<String>) -> Self {
        self.canned_pages.push((url.into(), content.into()));
        self
    }

    /// Successive fetches of a matching url walk `contents` in order,
    /// repeating the last page once the list is exhausted.
    pub fn with_rotating_pages(
        mut self,
        url: impl Into<String>,
        contents: Vec<String>,
    ) -> Self {
        if !contents.is_empty() {
            self.rotating_pages
                .push((url.into(), contents, Mutex::new(0)));
        }
        self
    }

    /// Sleep 1–5 ms per call, approximating a remote service.
    pub fn with_latency_jitter(mut self) -> Self {
        self.latency_jitter = true;
        self
    }

    async fn maybe_sleep(&self) {
        if self.latency_jitter {
            let ms = rand::thread_rng().gen_range(1..=5);
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

impl Default for SimulatedCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EvidenceCollector for SimulatedCollector {
    async fn search(&self, query: &str) -> Result<SearchResponse, CollectorError> {
        self.maybe_sleep().await;
        if self.dead_queries.iter().any(|part| query.contains(part)) {
            return Ok(SearchResponse::default());
        }
        if let Some((_, url)) = self
            .canned_results
            .iter()
            .find(|(part, _)| query.contains(part))
        {
            return Ok(SearchResponse {
                results: vec![SearchHit { url: url.clone() }],
            });
        }
        let digest = ContentHash::hash(query.as_bytes());
        Ok(SearchResponse {
            results: vec![SearchHit {
                url: format!("https://sim.example/doc/{}", &digest.to_hex()[..12]),
            }],
        })
    }

    async fn fetch(&self, url: &str) -> Result<FetchResponse, CollectorError> {
        self.maybe_sleep().await;
        if let Some((_, contents, cursor)) = self
            .rotating_pages
            .iter()
            .find(|(u, _, _)| url.contains(u.as_str()))
        {
            let mut index = cursor.lock().expect("cursor lock");
            let content = contents[(*index).min(contents.len() - 1)].clone();
            *index += 1;
            return Ok(FetchResponse { content });
        }
        if let Some((_, content)) = self.canned_pages.iter().find(|(u, _)| url.contains(u.as_str()))
        {
            return Ok(FetchResponse {
                content: content.clone(),
            });
        }
        Ok(FetchResponse {
            content: format!("Simulated page content for {}", url),
        })
    }
}

/// Collector whose calls always fail — exercises the fallback path.
pub struct FailingCollector;

#[async_trait]
impl EvidenceCollector for FailingCollector {
    async fn search(&self, _query: &str) -> Result<SearchResponse, CollectorError> {
        Err(CollectorError::SearchFailed("simulated outage".into()))
    }

    async fn fetch(&self, _url: &str) -> Result<FetchResponse, CollectorError> {
        Err(CollectorError::FetchFailed("simulated outage".into()))
    }
}

/// Simulated evaluator: keyword-driven judgment with optional scripting.
///
/// Without a script, it proposes `Reject` for contradiction wording,
/// `NoProgress` for thin content, and `Accept` otherwise — the validator's
/// rubric makes the final call either way.
pub struct SimulatedEvaluator {
    script: Mutex<VecDeque<Option<Decision>>>,
}

impl SimulatedEvaluator {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
        }
    }

    /// Pre-seed proposed decisions, consumed in order before the keyword
    /// rules apply.
    pub fn with_script(self, proposals: impl IntoIterator<Item = Option<Decision>>) -> Self {
        self.script.lock().expect("script lock").extend(proposals);
        self
    }

    fn keyword_proposal(evidence_text: &str) -> Option<Decision> {
        let lower = evidence_text.to_lowercase();
        if evidence_text.trim().len() < 40 {
            Some(Decision::NoProgress)
        } else if lower.contains("denies") || lower.contains("no plans") {
            Some(Decision::Reject)
        } else {
            Some(Decision::Accept)
        }
    }
}

impl Default for SimulatedEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Evaluator for SimulatedEvaluator {
    async fn evaluate(
        &self,
        context: &HypothesisContext,
        evidence_text: &str,
    ) -> Result<Evaluation, CollectorError> {
        let scripted = self.script.lock().expect("script lock").pop_front();
        let proposed = match scripted {
            Some(proposal) => proposal,
            None => Self::keyword_proposal(evidence_text),
        };
        let excerpt: String = evidence_text.chars().take(120).collect();
        Ok(Evaluation {
            proposed_decision: proposed,
            rationale: format!(
                "simulated judgment of evidence for '{}'",
                context.statement
            ),
            evidence_excerpt: excerpt,
        })
    }
}

/// Evaluator that always returns unparseable output.
pub struct MalformedEvaluator;

#[async_trait]
impl Evaluator for MalformedEvaluator {
    async fn evaluate(
        &self,
        _context: &HypothesisContext,
        _evidence_text: &str,
    ) -> Result<Evaluation, CollectorError> {
        Ok(Evaluation {
            proposed_decision: None,
            rationale: "¯\\_(ツ)_/¯".into(),
            evidence_excerpt: String::new(),
        })
    }
}

/// Evaluator whose calls always fail.
pub struct FailingEvaluator;

#[async_trait]
impl Evaluator for FailingEvaluator {
    async fn evaluate(
        &self,
        _context: &HypothesisContext,
        _evidence_text: &str,
    ) -> Result<Evaluation, CollectorError> {
        Err(CollectorError::EvaluatorFailed("simulated outage".into()))
    }
}
