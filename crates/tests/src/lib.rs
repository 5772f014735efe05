//! Integration-test crate for the Prospect workspace.
//!
//! All tests live under `tests/`: end-to-end scenarios, property-based
//! invariants, and adversarial audit-trail attacks.
