//! Format rules: Email, Url, Integer
//!
//! Each matches the value's text rendering against a fixed pattern,
//! compiled once on first use.

use crate::rules::registry::{Category, RuleDescriptor, RuleRegistry};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?|ftp)://[^\s/$.?#][^\s]*$").expect("valid url pattern")
});

// Accepts decimal integers with an optional sign and an optional all-zero
// fractional part, so "12" and "12.00" both count as integers.
static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(?:\.0+)?$").expect("valid integer pattern"));

/// Register format rules.
pub fn register(registry: &mut RuleRegistry) {
    registry.register_static(
        RuleDescriptor::new("email", "Invalid Email provided")
            .with_description("Text must look like an email address")
            .with_category(Category::Format),
        |value, _params| EMAIL_PATTERN.is_match(value.as_text().as_ref()),
    );

    registry.register_static(
        RuleDescriptor::new("url", "Invalid URL provided")
            .with_description("Text must look like an http(s) or ftp URL")
            .with_category(Category::Format),
        |value, _params| URL_PATTERN.is_match(value.as_text().as_ref()),
    );

    registry.register_static(
        RuleDescriptor::new("integer", "Data provided is not type [integer]")
            .with_description("Text must spell a decimal integer")
            .with_category(Category::Format),
        |value, _params| INTEGER_PATTERN.is_match(value.as_text().as_ref()),
    );
}
