//! Core types for the Niyama validation engine.
//!
//! This module contains the foundational types that the rest of the crate
//! builds on:
//! - Scalar values and data records
//! - Error types and the validation report

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{ErrorMap, NiyamaError, NiyamaResult, ValidationReport};
pub use types::{DataRecord, Value};
