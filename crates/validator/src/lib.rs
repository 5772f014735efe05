#![deny(unsafe_code)]
//! # prospect-validator
//!
//! Rule-based validation of collected evidence.
//!
//! The external evaluator's proposed decision is advisory input only: this
//! crate re-checks novelty, entity match, action concreteness, and source
//! credibility against a hard rubric, then applies fixed (non-adaptive)
//! confidence arithmetic. Keeping the arithmetic in one place, behind
//! constants, is what makes the scores auditable and immune to drift.
//!
//! ## Key Types
//!
//! - [`DecisionValidator`] — rubric + arithmetic + dedup registry
//! - [`Verdict`] — closed outcome vocabulary with matched-criteria data
//! - [`DedupIndex`] — exact and near-duplicate detection
//! - [`SaturationTracker`] — confidence-plateau detection over a window

pub mod dedup;
pub mod rubric;
pub mod saturation;
pub mod validator;
pub mod verdict;

pub use dedup::{DedupIndex, DuplicateCheck, NEAR_DUPLICATE_JACCARD};
pub use rubric::CriteriaReport;
pub use saturation::{SaturationTracker, CATEGORY_REJECT_SATURATION};
pub use validator::{
    DecisionValidator, ValidationInput, ValidationOutcome, ACCEPT_DELTA, WEAK_ACCEPT_DELTA,
};
pub use verdict::{Criterion, RejectCause, Verdict};
