//! Rules module.
//!
//! Contains the rule expression grammar, the rule registry, the built-in
//! rules, and the compiled-pattern cache for the dynamic `regex` rule.

pub mod builtin;
pub mod parse;
pub mod patterns;
pub mod registry;

pub use parse::{RuleExpr, RuleSet, RuleStrings};
pub use patterns::{PatternCache, PatternStats, SharedPatterns};
pub use registry::{Category, Predicate, RegistryBuilder, RegistryEntry, RuleDescriptor, RuleRegistry};
