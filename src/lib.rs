//! # Niyama - Declarative Field Validation
//!
//! Niyama is a declarative validation library for flat data records.
//! Rules are written as compact pipe-delimited strings, resolved against
//! a registry of named predicates, and evaluated into an ordered report
//! of failure messages.
//!
//! ## Features
//!
//! - **Rule Strings**: `"required|email|max:64"` reads the way it runs
//! - **Uniform Registry**: built-in and custom rules live in one registry
//! - **Pure Validation**: data, rules and message overrides go in, a report
//!   comes out; calls never interfere with each other
//! - **Custom Messages**: per-rule and per-field message overrides with
//!   positional parameter interpolation
//! - **Stable Ordering**: error maps follow rule declaration order
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use niyama::prelude::*;
//!
//! // The record under validation
//! let mut data = DataRecord::new();
//! data.insert("name".to_string(), Value::from("Ada"));
//! data.insert("email".to_string(), Value::from("ada(at)example.com"));
//!
//! // One rule string per field
//! let mut rules = RuleStrings::new();
//! rules.insert("name".to_string(), "required|max:32".to_string());
//! rules.insert("email".to_string(), "required|email".to_string());
//!
//! // Validate
//! let validator = Validator::new();
//! let report = validator.validate(&data, &rules, None).unwrap();
//!
//! assert!(!report.is_valid());
//! assert_eq!(
//!     report.field_errors("email"),
//!     Some(&["Invalid Email provided".to_string()][..])
//! );
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`core`]: Scalar values, data records, errors, and the report
//! - [`rules`]: Rule grammar, the registry, and the built-in rules
//! - [`messages`]: Failure texts, overrides, and resolution priority
//! - [`engine`]: The validator that ties the pieces together
//!
//! ## Custom Rules
//!
//! Register a descriptor and a predicate; the rule then works like any
//! built-in, custom messages included:
//!
//! ```rust,ignore
//! use niyama::prelude::*;
//!
//! let mut validator = Validator::new();
//! validator.register(
//!     RuleDescriptor::new("even", "Value must be even")
//!         .with_description("Passes for even integers")
//!         .with_category(Category::Custom),
//!     |value, _params| value.as_integer().map(|n| n % 2 == 0).unwrap_or(false),
//! ).unwrap();
//!
//! // "even" now resolves in rule strings like "required|even"
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod engine;
pub mod messages;
pub mod rules;

pub use crate::core::error::{ErrorMap, NiyamaError, NiyamaResult, ValidationReport};
pub use crate::core::types::{DataRecord, Value};
pub use crate::engine::Validator;
pub use crate::messages::MessageOverrides;
pub use crate::rules::parse::RuleStrings;
pub use crate::rules::registry::{RuleDescriptor, RuleRegistry};

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use niyama::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{DataRecord, Value};

    // Errors and the report
    pub use crate::core::error::{ErrorMap, NiyamaError, NiyamaResult, ValidationReport};

    // Rule grammar and registry
    pub use crate::rules::parse::{RuleExpr, RuleSet, RuleStrings};
    pub use crate::rules::patterns::{PatternCache, PatternStats, SharedPatterns};
    pub use crate::rules::registry::{
        Category, Predicate, RegistryBuilder, RegistryEntry, RuleDescriptor, RuleRegistry,
    };

    // Messages
    pub use crate::messages::{interpolate, MessageOverrides, MessageResolver, FALLBACK_MESSAGE};

    // Engine
    pub use crate::engine::Validator;
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Validate a record with the built-in rules only.
///
/// Shorthand for a one-off check without configuring a [`Validator`].
pub fn validate(data: &DataRecord, rules: &RuleStrings) -> NiyamaResult<ValidationReport> {
    Validator::new().validate(data, rules, None)
}
