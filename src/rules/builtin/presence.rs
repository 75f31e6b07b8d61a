//! Presence rules: Required

use crate::rules::registry::{Category, RuleDescriptor, RuleRegistry};

/// Register presence rules.
pub fn register(registry: &mut RuleRegistry) {
    registry.register_static(
        RuleDescriptor::new("required", "Field is required")
            .with_description("Value must be present with a non-empty text rendering")
            .with_category(Category::Presence),
        |value, _params| !value.is_blank(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Value;

    fn check(value: Value) -> bool {
        let mut registry = RuleRegistry::new();
        register(&mut registry);
        let entry = registry.get("required").unwrap();
        (entry.predicate)(&value, &[])
    }

    #[test]
    fn test_required_passes_on_content() {
        assert!(check(Value::from("x")));
        assert!(check(Value::from(0)));
        assert!(check(Value::from(false)));
    }

    #[test]
    fn test_required_fails_on_blank() {
        assert!(!check(Value::from("")));
        assert!(!check(Value::Null));
    }
}
