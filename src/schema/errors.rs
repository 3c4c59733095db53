//! Schema validation errors
//!
//! A `ValidationError` collects every field violation found in one write
//! and renders them into a single human-readable message:
//!
//! `Book validation failed: title: Path `title` is required., numberOfPages: ...`

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// A single field-level violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field path (e.g., "numberOfPages")
    pub field: String,
    /// Human-readable reason
    pub reason: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Field absent, null, or an empty string
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        let reason = format!("Path `{}` is required.", field);
        Self { field, reason }
    }

    /// Value could not be cast to the declared type
    pub fn cast_failed(field: impl Into<String>, expected: &str, actual: &Value) -> Self {
        let field = field.into();
        let reason = format!(
            "Cast to {} failed for value {} (type {}) at path \"{}\"",
            expected,
            actual,
            json_type_name(actual),
            field
        );
        Self { field, reason }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Write-time validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{schema} validation failed: {}", join_violations(.violations))]
pub struct ValidationError {
    schema: String,
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(schema: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            schema: schema.into(),
            violations,
        }
    }

    /// The request body was not a JSON object at all
    pub fn not_an_object(schema: impl Into<String>, actual: &Value) -> Self {
        Self::new(
            schema,
            vec![Violation::new(
                "$root",
                format!("expected an object, got {}", json_type_name(actual)),
            )],
        )
    }

    /// Returns all violations, in schema field order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns true when the given field has at least one violation
    pub fn has_violation(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, ValidationError>;

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_message() {
        let v = Violation::missing_field("title");
        assert_eq!(v.to_string(), "title: Path `title` is required.");
    }

    #[test]
    fn test_cast_failed_message() {
        let v = Violation::cast_failed("numberOfPages", "Number", &json!("abc"));
        assert_eq!(
            v.reason,
            "Cast to Number failed for value \"abc\" (type string) at path \"numberOfPages\""
        );
    }

    #[test]
    fn test_error_joins_violations() {
        let err = ValidationError::new(
            "Book",
            vec![
                Violation::missing_field("title"),
                Violation::missing_field("author"),
            ],
        );
        assert_eq!(
            err.to_string(),
            "Book validation failed: title: Path `title` is required., author: Path `author` is required."
        );
        assert!(err.has_violation("author"));
        assert!(!err.has_violation("genre"));
    }

    #[test]
    fn test_not_an_object() {
        let err = ValidationError::not_an_object("Book", &json!([1, 2]));
        assert!(err.to_string().contains("expected an object, got array"));
    }
}
