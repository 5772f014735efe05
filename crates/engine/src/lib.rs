#![deny(unsafe_code)]
//! # prospect-engine
//!
//! The exploration control loop. Within one entity run, iterations are
//! strictly sequential: select hypothesis → select channel → search →
//! fetch → evaluate → validate → persist, with the audit append as the
//! durability boundary of each iteration. Across entities, runs are
//! independent and fan out over a bounded worker pool sharing only the
//! external-service rate limiter.

pub mod coordinator;
pub mod error;
pub mod result;
pub mod runner;
pub mod state;
pub mod store;

pub use coordinator::ExplorationCoordinator;
pub use error::EngineError;
pub use result::ExplorationResult;
pub use runner::{BatchRunner, ExplorationRequest};
pub use state::ExplorationState;
pub use store::HypothesisStore;
