//! Built-in rule implementations.
//!
//! This module contains the standard rules that ship with Niyama:
//! `required`, `max`, `min`, `email`, `url`, `integer`, `json`, `date`
//! and `regex`.

mod content;
mod format;
mod length;
mod presence;

use crate::rules::registry::RuleRegistry;

/// Register all built-in rules.
pub fn register_all(registry: &mut RuleRegistry) {
    presence::register(registry);
    length::register(registry);
    format::register(registry);
    content::register(registry);
}
