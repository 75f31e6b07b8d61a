//! Per-call message overrides.
//!
//! Overrides are keyed either by bare rule name (`"email"`) or by the
//! composite `rule.field` form (`"required.name"`); the composite form
//! wins when both apply to a failure. They are scoped to a single
//! `validate` call and never alter the registry's default messages.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Custom failure texts supplied for one validation call.
///
/// Serializes transparently as a plain JSON object, so an overrides file
/// is just `{"required.name": "Name please", "email": "Check the email"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageOverrides {
    entries: IndexMap<String, String>,
}

impl MessageOverrides {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an override keyed by rule name or `rule.field`.
    ///
    /// Later entries for the same key win.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Chaining form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Override for a rule regardless of field.
    pub fn for_rule(&self, rule: &str) -> Option<&str> {
        self.entries.get(rule).map(|s| s.as_str())
    }

    /// Override for a rule on one specific field.
    pub fn for_field_rule(&self, rule: &str, field: &str) -> Option<&str> {
        self.entries
            .get(&format!("{}.{}", rule, field))
            .map(|s| s.as_str())
    }

    /// Merge another set into this one, key by key; the other's entries
    /// win on collision.
    pub fn merge(&mut self, other: MessageOverrides) {
        for (key, text) in other.entries {
            self.entries.insert(key, text);
        }
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no overrides are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<IndexMap<String, String>> for MessageOverrides {
    fn from(entries: IndexMap<String, String>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, String)> for MessageOverrides {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_rule_and_field() {
        let overrides = MessageOverrides::new()
            .with("email", "Check the email")
            .with("required.name", "Name please");

        assert_eq!(overrides.for_rule("email"), Some("Check the email"));
        assert_eq!(overrides.for_rule("required"), None);
        assert_eq!(
            overrides.for_field_rule("required", "name"),
            Some("Name please")
        );
        assert_eq!(overrides.for_field_rule("required", "age"), None);
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base = MessageOverrides::new()
            .with("email", "old")
            .with("max", "kept");
        base.merge(MessageOverrides::new().with("email", "new"));

        assert_eq!(base.for_rule("email"), Some("new"));
        assert_eq!(base.for_rule("max"), Some("kept"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_transparent_json() {
        let overrides: MessageOverrides =
            serde_json::from_str(r#"{"required.name": "Name please", "email": "Nope"}"#).unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.for_field_rule("required", "name"), Some("Name please"));

        let json = serde_json::to_string(&overrides).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains("required.name"));
    }
}
