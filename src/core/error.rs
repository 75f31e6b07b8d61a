//! Error types for Niyama.
//!
//! Uses thiserror for structured errors with context. Errors are designed to:
//! - Be serializable for sending to callers over process boundaries
//! - Include actionable information (which field, which rule)
//! - Keep rule failures out of the error channel: a field failing `email`
//!   is a normal outcome recorded in the [`ValidationReport`], not an `Err`
//!
//! Only two things are true errors here: a rule name that no registered
//! validator answers to, and a malformed custom-rule registration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordered map of field name to the list of failure messages recorded for it.
///
/// Field order follows rule-set declaration order; message order within a
/// field follows rule declaration order. Nothing is deduplicated.
pub type ErrorMap = IndexMap<String, Vec<String>>;

/// Top-level error type for Niyama.
///
/// Validation failures are not represented here; they live in the
/// [`ValidationReport`]. These variants abort a run (or a registration)
/// outright.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NiyamaError {
    /// A rule string referenced a name with no registered validator.
    ///
    /// The run aborts without a partial error map, so callers never mistake
    /// a half-checked record for a fully-checked one.
    #[error("Unknown rule '{rule}' for field '{field}'")]
    UnknownRule { field: String, rule: String },

    /// A custom rule registration was rejected.
    #[error("Invalid rule definition: {reason}")]
    InvalidRule { reason: String },
}

/// Result type alias for Niyama operations.
pub type NiyamaResult<T> = Result<T, NiyamaError>;

// ============================================================================
// Validation Report
// ============================================================================

/// Outcome of one validation run.
///
/// `valid` is true exactly when `errors` is empty. The report serializes to
/// JSON with field and message order intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether every rule passed.
    pub valid: bool,
    /// Failure messages keyed by field.
    pub errors: ErrorMap,
    /// Number of rule predicates evaluated during the run.
    pub rules_checked: usize,
}

impl ValidationReport {
    /// Create a new empty report (valid).
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: ErrorMap::new(),
            rules_checked: 0,
        }
    }

    /// Record a failure message against a field.
    ///
    /// Messages accumulate in call order; recording flips `valid` to false.
    pub fn record(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.entry(field.into()).or_default().push(message.into());
    }

    /// Check whether every rule passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Failure messages for one field, if any were recorded.
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(|msgs| msgs.as_slice())
    }

    /// Total number of failure messages across all fields.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(|msgs| msgs.len()).sum()
    }

    /// Consume the report, yielding the error map.
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }

    /// Get a human-readable summary.
    pub fn summary(&self) -> String {
        if self.valid {
            format!("✓ Record is valid ({} rule(s) checked)", self.rules_checked)
        } else {
            format!(
                "✗ Validation failed with {} error(s) across {} field(s)",
                self.error_count(),
                self.errors.len()
            )
        }
    }

    /// Get one line per failure, `field: message`.
    pub fn detailed_errors(&self) -> Vec<String> {
        self.errors
            .iter()
            .flat_map(|(field, msgs)| msgs.iter().map(move |m| format!("{}: {}", field, m)))
            .collect()
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
