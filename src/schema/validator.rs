//! Write-time validation of request bodies against the `Book` schema
//!
//! Validation semantics:
//! - Body must be a JSON object
//! - Create: every required field present, non-null, non-empty
//! - Update: only supplied fields are checked
//! - string fields accept strings, numbers and booleans (cast to text)
//! - number fields accept numbers and numeric strings (cast to f64);
//!   the result must be finite
//! - Undeclared fields are ignored, never stored
//! - All violations are reported together, in schema field order

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::book::{BookPatch, NewBook};
use super::errors::{SchemaResult, ValidationError, Violation};
use super::types::{book_schema, FieldDef, FieldType, Schema};

/// A field value after casting to its declared type
#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Text(String),
    Number(f64),
}

/// Whether absent fields are violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Patch,
}

/// Schema validator that turns raw JSON bodies into typed write payloads.
///
/// Validator does not mutate the input and is deterministic.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl SchemaValidator<'static> {
    /// Validator for the `Book` schema
    pub fn for_books() -> Self {
        Self::new(book_schema())
    }
}

impl<'a> SchemaValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a create body.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing every missing or mistyped field.
    pub fn validate_new(&self, body: &Value) -> SchemaResult<NewBook> {
        let mut values = self.collect(body, Mode::Create)?;

        Ok(NewBook {
            title: values.text(self.schema, "title")?,
            author: values.text(self.schema, "author")?,
            genre: values.text(self.schema, "genre")?,
            description: values.text(self.schema, "description")?,
            number_of_pages: values.number(self.schema, "numberOfPages")?,
        })
    }

    /// Validates a partial update body. An empty object is a valid no-op.
    pub fn validate_patch(&self, body: &Value) -> SchemaResult<BookPatch> {
        let mut values = self.collect(body, Mode::Patch)?;

        Ok(BookPatch {
            title: values.take_text("title"),
            author: values.take_text("author"),
            genre: values.take_text("genre"),
            description: values.take_text("description"),
            number_of_pages: values.take_number("numberOfPages"),
        })
    }

    /// Casts every declared field, collecting violations.
    fn collect(&self, body: &Value, mode: Mode) -> SchemaResult<FieldValues> {
        let obj = body
            .as_object()
            .ok_or_else(|| ValidationError::not_an_object(self.schema.name, body))?;

        let mut values = HashMap::new();
        let mut violations = Vec::new();

        for def in self.schema.fields {
            match check_field(def, obj, mode) {
                Ok(Some(value)) => {
                    values.insert(def.name, value);
                }
                Ok(None) => {}
                Err(violation) => violations.push(violation),
            }
        }

        if !violations.is_empty() {
            return Err(ValidationError::new(self.schema.name, violations));
        }

        Ok(FieldValues(values))
    }
}

impl Default for SchemaValidator<'static> {
    fn default() -> Self {
        Self::for_books()
    }
}

/// Checks one field. `Ok(None)` means absent and allowed.
fn check_field(
    def: &FieldDef,
    obj: &Map<String, Value>,
    mode: Mode,
) -> Result<Option<FieldValue>, Violation> {
    let value = match obj.get(def.name) {
        None if mode == Mode::Patch => return Ok(None),
        None | Some(Value::Null) => {
            return if def.required {
                Err(Violation::missing_field(def.name))
            } else {
                Ok(None)
            };
        }
        Some(value) => value,
    };

    let cast = match def.field_type {
        FieldType::String => cast_text(def, value)?.map(FieldValue::Text),
        FieldType::Number => Some(FieldValue::Number(cast_number(def, value)?)),
    };

    match cast {
        Some(v) => Ok(Some(v)),
        None if def.required => Err(Violation::missing_field(def.name)),
        None => Ok(None),
    }
}

/// `Ok(None)` for an empty string, which a required field rejects.
fn cast_text(def: &FieldDef, value: &Value) -> Result<Option<String>, Violation> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => {
            return Err(Violation::cast_failed(
                def.name,
                def.field_type.type_name(),
                value,
            ))
        }
    };

    if text.is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

fn cast_number(def: &FieldDef, value: &Value) -> Result<f64, Violation> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(Violation::cast_failed(
            def.name,
            def.field_type.type_name(),
            value,
        )),
    }
}

/// Casted values keyed by field name
struct FieldValues(HashMap<&'static str, FieldValue>);

impl FieldValues {
    fn take_text(&mut self, name: &str) -> Option<String> {
        match self.0.remove(name) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    fn take_number(&mut self, name: &str) -> Option<f64> {
        match self.0.remove(name) {
            Some(FieldValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    fn text(&mut self, schema: &Schema, name: &str) -> SchemaResult<String> {
        self.take_text(name)
            .ok_or_else(|| ValidationError::new(schema.name, vec![Violation::missing_field(name)]))
    }

    fn number(&mut self, schema: &Schema, name: &str) -> SchemaResult<f64> {
        self.take_number(name)
            .ok_or_else(|| ValidationError::new(schema.name, vec![Violation::missing_field(name)]))
    }
}
