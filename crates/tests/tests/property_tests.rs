#[path = "property/confidence_arithmetic.rs"]
mod confidence_arithmetic;

#[path = "property/audit_chain.rs"]
mod audit_chain;
