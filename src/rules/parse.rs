//! Rule expression grammar: pipe-delimited tokens, colon-delimited parameters.
//!
//! A raw rule string like `"required|email|max:64"` splits on `|` into
//! tokens. Within a token the first `:` ends the rule name; the remainder
//! splits on `:` into positional parameters. Parsing never fails: malformed
//! input degrades to empty names or empty-string parameters, which surface
//! later as unknown rules or failed numeric parses.
//!
//! Known limitation: `:` separates the name from the parameters *and*
//! parameters from each other, so a parameter containing `:` is split
//! apart. The grammar is kept as-is; the one consumer that needs literal
//! colons (the `regex` rule) re-joins its parameters.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw rule strings as supplied by the caller: field name to rule string.
pub type RuleStrings = IndexMap<String, String>;

/// One parsed rule token: a rule name plus its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleExpr {
    /// Rule name, looked up in the registry.
    pub name: String,
    /// Positional parameters, in token order.
    pub params: Vec<String>,
}

impl RuleExpr {
    /// Parse a single token.
    ///
    /// `"max:10"` parses to name `max`, params `["10"]`; `"required"` to
    /// name `required` with no params; `"max:"` to name `max`, params
    /// `[""]`.
    pub fn parse(token: &str) -> Self {
        match token.split_once(':') {
            Some((name, rest)) => Self {
                name: name.to_string(),
                params: rest.split(':').map(str::to_string).collect(),
            },
            None => Self {
                name: token.to_string(),
                params: Vec::new(),
            },
        }
    }

    /// Build an expression directly, mainly for tests and programmatic use.
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

impl fmt::Display for RuleExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}:{}", self.name, self.params.join(":"))
        }
    }
}

/// A parsed rule set: each field's ordered list of rule expressions.
///
/// Field order matches the declaration order of the input map, and token
/// order within a field matches the rule string. Both orders drive the
/// order of the final error report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    fields: IndexMap<String, Vec<RuleExpr>>,
}

impl RuleSet {
    /// Parse every field's rule string.
    ///
    /// An empty rule string produces a single empty-named expression; it
    /// only matters if the field is ever evaluated, where it reads as an
    /// unknown rule.
    pub fn parse(rules: &RuleStrings) -> Self {
        let fields = rules
            .iter()
            .map(|(field, raw)| {
                let exprs = raw.split('|').map(RuleExpr::parse).collect();
                (field.clone(), exprs)
            })
            .collect();
        Self { fields }
    }

    /// Iterate fields in declaration order with their parsed expressions.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RuleExpr])> {
        self.fields
            .iter()
            .map(|(field, exprs)| (field.as_str(), exprs.as_slice()))
    }

    /// Parsed expressions for one field.
    pub fn field_rules(&self, field: &str) -> Option<&[RuleExpr]> {
        self.fields.get(field).map(|exprs| exprs.as_slice())
    }

    /// Number of fields with rules.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has rules.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total number of rule expressions across all fields.
    pub fn rule_count(&self) -> usize {
        self.fields.values().map(|exprs| exprs.len()).sum()
    }
}
