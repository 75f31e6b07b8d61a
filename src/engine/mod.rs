//! Validation engine.
//!
//! Drives rule evaluation: parse the rule strings, resolve each rule
//! against the registry, run predicates, and collect failures into a
//! report.

pub mod validator;

pub use validator::Validator;
