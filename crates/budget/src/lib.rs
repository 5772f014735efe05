#![deny(unsafe_code)]
//! # prospect-budget
//!
//! Resource governance for exploration runs: iteration caps, per-category
//! caps, monetary cost ceilings, wall-clock ceilings, and the early-stop
//! rules. The controller is consulted at the top of every iteration; hitting
//! a cap is a clean terminal state, never an error.

pub mod controller;
pub mod reason;
pub mod state;

pub use controller::{BudgetController, ContinueDecision};
pub use reason::StopReason;
pub use state::{BudgetState, IterationCost};
