#![deny(unsafe_code)]
//! # prospect-collector
//!
//! Interfaces to the two external collaborators — the search/fetch service
//! and the language-model evaluator — plus simulated backends for tests and
//! demos, an HTTP connector, and the global rate limiter that protects the
//! external services from a full worker pool.

pub mod error;
pub mod http;
pub mod ratelimit;
pub mod simulated;
pub mod traits;
pub mod types;

pub use error::CollectorError;
pub use http::HttpCollector;
pub use ratelimit::RateLimiter;
pub use simulated::{
    FailingCollector, FailingEvaluator, MalformedEvaluator, SimulatedCollector, SimulatedEvaluator,
};
pub use traits::{Evaluator, EvidenceCollector};
pub use types::{Evaluation, FetchResponse, HypothesisContext, SearchHit, SearchResponse};
