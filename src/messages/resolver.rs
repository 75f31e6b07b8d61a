//! Message resolution for rule failures.
//!
//! Picks the text for one failure and interpolates the rule's parameters
//! into it. Priority, highest first:
//!
//! 1. override keyed `rule.field`
//! 2. override keyed `rule`
//! 3. the registered rule's default message
//! 4. [`FALLBACK_MESSAGE`](crate::messages::template::FALLBACK_MESSAGE)

use crate::messages::overrides::MessageOverrides;
use crate::messages::template::{interpolate, FALLBACK_MESSAGE};
use crate::rules::registry::RuleRegistry;

/// Borrows one call's overrides and the registry for the duration of a
/// validation pass.
pub struct MessageResolver<'a> {
    registry: &'a RuleRegistry,
    overrides: Option<&'a MessageOverrides>,
}

impl<'a> MessageResolver<'a> {
    /// Create a resolver over the registry and optional per-call
    /// overrides.
    pub fn new(registry: &'a RuleRegistry, overrides: Option<&'a MessageOverrides>) -> Self {
        Self {
            registry,
            overrides,
        }
    }

    /// Resolve the failure message for `rule` on `field`.
    pub fn resolve(&self, field: &str, rule: &str, params: &[String]) -> String {
        let template = self
            .overrides
            .and_then(|o| o.for_field_rule(rule, field))
            .or_else(|| self.overrides.and_then(|o| o.for_rule(rule)))
            .or_else(|| self.registry.descriptor(rule).map(|d| d.message.as_str()))
            .unwrap_or(FALLBACK_MESSAGE);

        interpolate(template, params)
    }
}
