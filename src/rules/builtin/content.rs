//! Content rules: Json, Date, Regex
//!
//! These parse or match the value's text rendering rather than checking
//! its shape.

use crate::rules::patterns::{new_shared_patterns, DEFAULT_PATTERN_CAPACITY};
use crate::rules::registry::{Category, RuleDescriptor, RuleRegistry};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date formats accepted by the `date` rule, tried in order after the
/// RFC 3339 and RFC 2822 parsers.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

fn parses_as_date(text: &str) -> bool {
    DateTime::parse_from_rfc3339(text).is_ok()
        || DateTime::parse_from_rfc2822(text).is_ok()
        || DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(text, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(text, fmt).is_ok())
}

/// Register content rules.
pub fn register(registry: &mut RuleRegistry) {
    registry.register_static(
        RuleDescriptor::new("json", "Invalid Json provided")
            .with_description("Text must parse as a JSON document")
            .with_category(Category::Content),
        |value, _params| serde_json::from_str::<serde_json::Value>(value.as_text().as_ref()).is_ok(),
    );

    registry.register_static(
        RuleDescriptor::new("date", "Invalid Date provided")
            .with_description("Text must parse as a calendar date or datetime")
            .with_category(Category::Content),
        |value, _params| parses_as_date(value.as_text().as_ref()),
    );

    // The pattern comes from the rule string, so it is only known at
    // evaluation time; compiled forms are cached across calls.
    let patterns = new_shared_patterns(DEFAULT_PATTERN_CAPACITY);
    registry.register_static(
        RuleDescriptor::new("regex", "Data provided do not match regular expression")
            .with_description("Text must match the pattern given as the rule parameter")
            .with_category(Category::Content),
        move |value, params| {
            if params.is_empty() {
                return false;
            }
            // parameters re-join with ':' so patterns containing colons survive
            let pattern = params.join(":");
            if pattern.is_empty() {
                return false;
            }
            patterns.matches(&pattern, value.as_text().as_ref())
        },
    );
}
