//! Validation engine implementation.

use crate::core::error::{NiyamaError, NiyamaResult, ValidationReport};
use crate::core::types::{DataRecord, Value};
use crate::messages::{MessageOverrides, MessageResolver};
use crate::rules::parse::{RuleSet, RuleStrings};
use crate::rules::registry::{RuleDescriptor, RuleRegistry};
use log::{debug, trace};

/// The one rule evaluated on absent or blank fields.
const REQUIRED_RULE: &str = "required";

/// Field validation engine.
///
/// Holds the rule registry; everything about a single run (data, rules,
/// message overrides, the resulting report) is passed in and returned
/// explicitly, so two calls with the same arguments produce the same
/// report and concurrent calls never interfere.
pub struct Validator {
    registry: RuleRegistry,
}

impl Validator {
    /// Create a validator with the built-in rules.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_builtins(),
        }
    }

    /// Create a validator over a custom registry.
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Access the underlying registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Register a custom rule.
    ///
    /// The descriptor's message becomes the rule's default failure text,
    /// overridable per call like any built-in. Returns `&mut Self` so
    /// registrations chain with `?`.
    pub fn register<F>(
        &mut self,
        descriptor: RuleDescriptor,
        predicate: F,
    ) -> NiyamaResult<&mut Self>
    where
        F: Fn(&Value, &[String]) -> bool + Send + Sync + 'static,
    {
        self.registry.register(descriptor, predicate)?;
        Ok(self)
    }

    /// Validate a data record against a set of rule strings.
    ///
    /// Fields are processed in rule declaration order, rules within a
    /// field in written order. A field that is absent or renders blank is
    /// skipped by every rule except `required`; in particular, rule names
    /// on such fields are never resolved, so an unknown rule there goes
    /// unnoticed. On present fields an unknown rule name aborts the whole
    /// run with [`NiyamaError::UnknownRule`] and no partial report.
    pub fn validate(
        &self,
        data: &DataRecord,
        rules: &RuleStrings,
        messages: Option<MessageOverrides>,
    ) -> NiyamaResult<ValidationReport> {
        let rule_set = RuleSet::parse(rules);
        let resolver = MessageResolver::new(&self.registry, messages.as_ref());
        let mut report = ValidationReport::new();

        debug!(
            "validating {} field(s) against {} rule(s)",
            rule_set.len(),
            rule_set.rule_count()
        );

        for (field, exprs) in rule_set.iter() {
            match data.get(field) {
                Some(value) if !value.is_blank() => {
                    for expr in exprs {
                        let entry = self.registry.get(&expr.name).ok_or_else(|| {
                            NiyamaError::UnknownRule {
                                field: field.to_string(),
                                rule: expr.name.clone(),
                            }
                        })?;

                        report.rules_checked += 1;
                        if !(entry.predicate)(value, &expr.params) {
                            debug!("field '{}' failed rule '{}'", field, expr.name);
                            report.record(field, resolver.resolve(field, &expr.name, &expr.params));
                        }
                    }
                }
                _ => {
                    // Absent or blank: only `required` records anything,
                    // and no rule name is resolved against the registry.
                    for expr in exprs {
                        if expr.name == REQUIRED_RULE {
                            debug!("field '{}' is blank but required", field);
                            report.rules_checked += 1;
                            report.record(field, resolver.resolve(field, &expr.name, &expr.params));
                        } else {
                            trace!("field '{}' is blank, skipping rule '{}'", field, expr.name);
                        }
                    }
                }
            }
        }

        debug!("{}", report.summary());
        Ok(report)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.registry.len())
            .finish()
    }
}
