//! Core value types that flow through the validation engine.
//!
//! The type system uses an enum-based approach for several reasons:
//! - Closed set of types: field validation operates on a finite set of scalars
//! - Zero-cost pattern matching: Compiler optimizes to jump tables
//! - Serialization: serde handles enums natively, so plain JSON records load directly
//! - Type safety: Exhaustive matching catches missing cases at compile time
//!
//! Records are flat maps of scalars. Nested objects and arrays are out of
//! scope and fail deserialization with a serde error.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A data record under validation: field name mapped to its scalar value.
///
/// `IndexMap` keeps field order stable, which keeps log output and error
/// reports deterministic.
pub type DataRecord = IndexMap<String, Value>;

/// Scalar value types that a field can hold.
///
/// The untagged representation lets ordinary JSON documents deserialize
/// without any wrapping: `{"name": "Ada", "age": 36}` maps `name` to
/// `Value::String` and `age` to `Value::Integer`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    /// Absence of a value; treated like an empty string by every rule
    Null,
    /// Boolean value
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
}

// ============================================================================
// Value Implementation
// ============================================================================

impl Value {
    /// Render this value as text.
    ///
    /// All rule predicates operate on this rendering: strings are borrowed
    /// as-is, numbers print in decimal, booleans print as `true`/`false`,
    /// and `Null` renders empty.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed(""),
            Value::Boolean(b) => Cow::Owned(b.to_string()),
            Value::Integer(i) => Cow::Owned(i.to_string()),
            Value::Float(f) => Cow::Owned(f.to_string()),
            Value::String(s) => Cow::Borrowed(s),
        }
    }

    /// Check whether the text rendering is empty.
    ///
    /// Blank fields are skipped by every rule except `required`.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    /// Try to get this value as a float.
    /// Integers are automatically converted to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_string(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Check if this value is Null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get a human-readable name for this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_rendering() {
        assert_eq!(Value::from("hello").as_text(), "hello");
        assert_eq!(Value::from(42).as_text(), "42");
        assert_eq!(Value::from(-7i64).as_text(), "-7");
        assert_eq!(Value::from(10.5).as_text(), "10.5");
        assert_eq!(Value::from(true).as_text(), "true");
        assert_eq!(Value::Null.as_text(), "");
    }

    #[test]
    fn test_blank_detection() {
        assert!(Value::Null.is_blank());
        assert!(Value::from("").is_blank());
        assert!(!Value::from("x").is_blank());
        assert!(!Value::from(0).is_blank());
        assert!(!Value::from(false).is_blank());
    }

    #[test]
    fn test_record_from_plain_json() {
        let record: DataRecord =
            serde_json::from_str(r#"{"name": "Ada", "age": 36, "score": 9.5, "active": true, "nick": null}"#)
                .unwrap();

        assert_eq!(record["name"], Value::String("Ada".to_string()));
        assert_eq!(record["age"], Value::Integer(36));
        assert_eq!(record["score"], Value::Float(9.5));
        assert_eq!(record["active"], Value::Boolean(true));
        assert_eq!(record["nick"], Value::Null);
        // insertion order preserved
        let fields: Vec<&str> = record.keys().map(|k| k.as_str()).collect();
        assert_eq!(fields, vec!["name", "age", "score", "active", "nick"]);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(1).type_name(), "integer");
        assert_eq!(Value::from("s").type_name(), "string");
    }
}
