#![deny(unsafe_code)]
//! # prospect-types
//!
//! Shared data model for the Prospect exploration engine.
//!
//! ## Key Types
//!
//! - [`Hypothesis`] — a testable claim about an entity, carrying a clamped confidence score
//! - [`SignalCategory`] / [`Channel`] — the closed vocabularies for claims and evidence sources
//! - [`Decision`] — the four-way outcome of validating one piece of evidence
//! - [`ContentHash`] — BLAKE3 content hash used for dedup and the audit chain
//! - [`ExplorationConfig`] — immutable per-run configuration

pub mod category;
pub mod channel;
pub mod config;
pub mod decision;
pub mod hash;
pub mod hypothesis;
pub mod ids;

pub use category::SignalCategory;
pub use channel::{Channel, SourceKind};
pub use config::{CostModel, ExplorationConfig};
pub use decision::Decision;
pub use hash::{ContentHash, ContentHashError};
pub use hypothesis::{
    EvidenceRecord, Hypothesis, HypothesisStatus, CONFIDENCE_CEIL, CONFIDENCE_FLOOR,
};
pub use ids::{EntityId, HypothesisId, RunId};
