#![deny(unsafe_code)]
//! # prospect-audit
//!
//! Append-only, hash-chained audit trail for exploration runs.
//!
//! Every iteration of an exploration run is sealed into an [`AuditEntry`]
//! whose hash covers the previous entry's hash plus the entry's serialized
//! fields. Altering any past entry breaks the chain for that entry and all
//! later ones, detectable by a linear replay.
//!
//! ## Key Types
//!
//! - [`AuditEntry`] / [`AuditDraft`] — one sealed iteration record
//! - [`AuditLog`] — arena-style per-run chain with [`AuditLog::verify_integrity`]
//! - [`AuditStore`] — async durability boundary, with [`InMemoryAuditStore`]
//! - [`AuditSummary`] — decision breakdown for downstream reporting

pub mod entry;
pub mod error;
pub mod log;
pub mod store;
pub mod summary;

pub use entry::{AuditDraft, AuditEntry};
pub use error::AuditError;
pub use log::AuditLog;
pub use store::{AuditStore, FailingAuditStore, InMemoryAuditStore};
pub use summary::AuditSummary;
