use crate::error::CollectorError;
use crate::traits::EvidenceCollector;
use crate::types::{FetchResponse, SearchResponse};
use async_trait::async_trait;
use std::time::Duration;

/// HTTP-backed evidence collector.
///
/// Talks to a search endpoint that accepts `GET {endpoint}?q={query}` and
/// answers `{"results": [{"url": "..."}]}`; fetches page content with a
/// plain GET. Transport and non-success statuses surface as
/// [`CollectorError`] and feed the coordinator's fallback sequence.
pub struct HttpCollector {
    client: reqwest::Client,
    search_endpoint: String,
    api_key: Option<String>,
}

impl HttpCollector {
    pub fn new(search_endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .user_agent(concat!("prospect/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client");
        Self {
            client,
            search_endpoint: search_endpoint.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

#[async_trait]
impl EvidenceCollector for HttpCollector {
    async fn search(&self, query: &str) -> Result<SearchResponse, CollectorError> {
        let mut request = self
            .client
            .get(&self.search_endpoint)
            .query(&[("q", query)]);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(CollectorError::SearchFailed(format!(
                "search endpoint returned {}",
                response.status()
            )));
        }
        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| CollectorError::SearchFailed(format!("malformed response: {}", e)))?;
        Ok(parsed)
    }

    async fn fetch(&self, url: &str) -> Result<FetchResponse, CollectorError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CollectorError::FetchFailed(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }
        let content = response
            .text()
            .await
            .map_err(|e| CollectorError::FetchFailed(format!("body read failed: {}", e)))?;
        Ok(FetchResponse { content })
    }
}
