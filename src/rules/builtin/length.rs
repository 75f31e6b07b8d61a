//! Length rules: Max, Min
//!
//! Both compare the character count of the value's text rendering against
//! a numeric first parameter. A missing or unparsable parameter fails the
//! check rather than silently passing.

use crate::core::types::Value;
use crate::rules::registry::{Category, RuleDescriptor, RuleRegistry};

fn text_len(value: &Value) -> usize {
    value.as_text().chars().count()
}

fn limit(params: &[String]) -> Option<f64> {
    params.first().and_then(|p| p.parse::<f64>().ok())
}

/// Register length rules.
pub fn register(registry: &mut RuleRegistry) {
    registry.register_static(
        RuleDescriptor::new("max", "More than {0} characters are not allowed")
            .with_description("Text length must not exceed the first parameter")
            .with_category(Category::Length),
        |value, params| match limit(params) {
            Some(n) => text_len(value) as f64 <= n,
            None => false,
        },
    );

    registry.register_static(
        RuleDescriptor::new("min", "Less than {0} characters are not allowed")
            .with_description("Text length must reach at least the first parameter")
            .with_category(Category::Length),
        |value, params| match limit(params) {
            Some(n) => text_len(value) as f64 >= n,
            None => false,
        },
    );
}
