//! Rule registry for managing available validation rules.
//!
//! Built-in and custom rules populate the same registry uniformly: a rule
//! is a name, a descriptor, and a predicate. The engine resolves rule
//! names here at evaluation time.

use crate::core::error::{NiyamaError, NiyamaResult};
use crate::core::types::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Predicate function deciding whether a value satisfies a rule.
///
/// Receives the field's value and the rule's positional parameters.
/// Returns `true` when the value passes. Predicates must not panic on
/// malformed parameters; they fail the check instead.
pub type Predicate = Arc<dyn Fn(&Value, &[String]) -> bool + Send + Sync>;

/// Broad grouping of rules, used for listing and discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Rules about a value being present at all
    Presence,
    /// Rules about text length
    Length,
    /// Rules about the shape of the text (email, url, integer)
    Format,
    /// Rules that parse or match the content (json, date, regex)
    Content,
    /// Caller-registered rules
    Custom,
}

impl Category {
    /// Get a human-readable name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Presence => "Presence",
            Category::Length => "Length",
            Category::Format => "Format",
            Category::Content => "Content",
            Category::Custom => "Custom",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Metadata describing a registered rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    /// Rule name as written in rule strings.
    pub name: String,
    /// Default failure message template. `{0}`, `{1}`, … interpolate the
    /// rule's positional parameters.
    pub message: String,
    /// Human-readable description for listings.
    pub description: String,
    /// Grouping for discovery.
    pub category: Category,
}

impl RuleDescriptor {
    /// Create a descriptor with the mandatory parts: name and default
    /// failure message.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            description: String::new(),
            category: Category::Custom,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

/// Registry entry containing descriptor and predicate.
#[derive(Clone)]
pub struct RegistryEntry {
    /// Metadata for the rule.
    pub descriptor: RuleDescriptor,
    /// The predicate evaluated against field values.
    pub predicate: Predicate,
}

/// Registry for all available validation rules.
///
/// The registry maintains the mapping from rule names to predicates and
/// descriptors. Registration order is preserved, which keeps listings
/// stable.
pub struct RuleRegistry {
    /// Rules indexed by name.
    rules: IndexMap<String, RegistryEntry>,
    /// Rule names grouped by category.
    categories: IndexMap<Category, Vec<String>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: IndexMap::new(),
            categories: IndexMap::new(),
        }
    }

    /// Create a registry pre-populated with the built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::rules::builtin::register_all(&mut registry);
        registry
    }

    /// Register a rule.
    ///
    /// Rejects descriptors with an empty name or an empty default message.
    /// Re-registering an existing name replaces the previous entry,
    /// built-ins included.
    pub fn register<F>(&mut self, descriptor: RuleDescriptor, predicate: F) -> NiyamaResult<()>
    where
        F: Fn(&Value, &[String]) -> bool + Send + Sync + 'static,
    {
        if descriptor.name.is_empty() {
            return Err(NiyamaError::InvalidRule {
                reason: "rule name must not be empty".to_string(),
            });
        }
        if descriptor.message.is_empty() {
            return Err(NiyamaError::InvalidRule {
                reason: format!("rule '{}' must define a default message", descriptor.name),
            });
        }

        log::debug!("registered rule '{}'", descriptor.name);
        self.insert_entry(RegistryEntry {
            descriptor,
            predicate: Arc::new(predicate),
        });

        Ok(())
    }

    /// Registration path for the built-ins, which carry statically known
    /// valid descriptors.
    pub(crate) fn register_static<F>(&mut self, descriptor: RuleDescriptor, predicate: F)
    where
        F: Fn(&Value, &[String]) -> bool + Send + Sync + 'static,
    {
        self.insert_entry(RegistryEntry {
            descriptor,
            predicate: Arc::new(predicate),
        });
    }

    fn insert_entry(&mut self, entry: RegistryEntry) {
        let name = entry.descriptor.name.clone();
        let category = entry.descriptor.category;

        if let Some(old) = self.rules.insert(name.clone(), entry) {
            // Replacement: drop the stale category index entry
            if let Some(names) = self.categories.get_mut(&old.descriptor.category) {
                names.retain(|n| n != &name);
            }
        }

        self.categories
            .entry(category)
            .or_insert_with(Vec::new)
            .push(name);
    }

    /// Get a registry entry by rule name.
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.rules.get(name)
    }

    /// Get a rule's predicate without the descriptor.
    pub fn predicate(&self, name: &str) -> Option<&Predicate> {
        self.rules.get(name).map(|e| &e.predicate)
    }

    /// Get a rule's descriptor without the predicate.
    pub fn descriptor(&self, name: &str) -> Option<&RuleDescriptor> {
        self.rules.get(name).map(|e| &e.descriptor)
    }

    /// Check if a rule is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Get all registered rule names in registration order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|s| s.as_str())
    }

    /// Get all registered rules.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &RegistryEntry)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get rule names in one category.
    pub fn rules_in_category(&self, category: &Category) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|names| names.iter().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    /// Get all categories with at least one rule.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.keys()
    }

    /// Get the total number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Get descriptors grouped by category for display.
    pub fn grouped_by_category(&self) -> IndexMap<Category, Vec<&RuleDescriptor>> {
        let mut grouped: IndexMap<Category, Vec<&RuleDescriptor>> = IndexMap::new();

        for entry in self.rules.values() {
            grouped
                .entry(entry.descriptor.category)
                .or_insert_with(Vec::new)
                .push(&entry.descriptor);
        }

        // Sort each category by name
        for descriptors in grouped.values_mut() {
            descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        }

        grouped
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for creating a customized registry.
pub struct RegistryBuilder {
    registry: RuleRegistry,
    include_builtins: bool,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::new(),
            include_builtins: true,
        }
    }

    /// Include or exclude built-in rules.
    pub fn with_builtins(mut self, include: bool) -> Self {
        self.include_builtins = include;
        self
    }

    /// Register a custom rule.
    pub fn register<F>(mut self, descriptor: RuleDescriptor, predicate: F) -> NiyamaResult<Self>
    where
        F: Fn(&Value, &[String]) -> bool + Send + Sync + 'static,
    {
        self.registry.register(descriptor, predicate)?;
        Ok(self)
    }

    /// Build the registry.
    ///
    /// Built-ins register first, so custom rules with colliding names win.
    pub fn build(self) -> RuleRegistry {
        if self.include_builtins {
            let mut base = RuleRegistry::with_builtins();
            for (_, entry) in self.registry.rules {
                base.insert_entry(entry);
            }
            base
        } else {
            self.registry
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uppercase_rule() -> RuleDescriptor {
        RuleDescriptor::new("uppercase", "Value must be uppercase")
            .with_description("Passes when the text has no lowercase letters")
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = RuleRegistry::new();
        registry
            .register(uppercase_rule(), |value, _| {
                !value.as_text().chars().any(|c| c.is_lowercase())
            })
            .unwrap();

        assert!(registry.contains("uppercase"));
        let entry = registry.get("uppercase").unwrap();
        assert_eq!(entry.descriptor.message, "Value must be uppercase");
        assert!((entry.predicate)(&Value::from("HELLO"), &[]));
        assert!(!(entry.predicate)(&Value::from("Hello"), &[]));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = RuleRegistry::new();
        let err = registry
            .register(RuleDescriptor::new("", "msg"), |_, _| true)
            .unwrap_err();
        assert!(matches!(err, NiyamaError::InvalidRule { .. }));
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut registry = RuleRegistry::new();
        let err = registry
            .register(RuleDescriptor::new("nonempty", ""), |_, _| true)
            .unwrap_err();
        assert!(matches!(err, NiyamaError::InvalidRule { .. }));
    }

    #[test]
    fn test_builtins_present() {
        let registry = RuleRegistry::with_builtins();
        for name in [
            "required", "email", "max", "min", "json", "url", "date", "integer", "regex",
        ] {
            assert!(registry.contains(name), "missing builtin: {}", name);
        }
        assert_eq!(registry.len(), 9);
    }

    #[test]
    fn test_replace_existing_rule() {
        let mut registry = RuleRegistry::with_builtins();
        registry
            .register(
                RuleDescriptor::new("email", "Corporate email required")
                    .with_category(Category::Custom),
                |value, _| value.as_text().ends_with("@example.com"),
            )
            .unwrap();

        assert_eq!(registry.len(), 9);
        assert!(!registry.rules_in_category(&Category::Format).contains(&"email"));
        assert!(registry.rules_in_category(&Category::Custom).contains(&"email"));
        let entry = registry.get("email").unwrap();
        assert!((entry.predicate)(&Value::from("a@example.com"), &[]));
    }

    #[test]
    fn test_builder_without_builtins() {
        let registry = RegistryBuilder::new()
            .with_builtins(false)
            .register(uppercase_rule(), |_, _| true)
            .unwrap()
            .build();

        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("required"));
    }

    #[test]
    fn test_builder_custom_overrides_builtin() {
        let registry = RegistryBuilder::new()
            .register(
                RuleDescriptor::new("integer", "Whole numbers only"),
                |value, _| value.as_integer().is_some(),
            )
            .unwrap()
            .build();

        assert_eq!(registry.len(), 9);
        assert_eq!(
            registry.descriptor("integer").unwrap().message,
            "Whole numbers only"
        );
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut registry = RuleRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry
                .register(RuleDescriptor::new(name, "m"), |_, _| true)
                .unwrap();
        }
        let names: Vec<&str> = registry.rule_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }
}
