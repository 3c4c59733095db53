//! Schema type definitions for the `Book` record
//!
//! Supported types:
//! - string: UTF-8 string, must be non-empty when required
//! - number: 64-bit floating point, must be finite

use serde::Serialize;

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit floating point
    Number,
}

impl FieldType {
    /// Returns the type name used in cast error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "Number",
        }
    }

    /// Returns the Swagger type name for documentation
    pub fn swagger_type(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
        }
    }
}

/// Field definition: a type and whether the field must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Field wire name
    pub name: &'static str,
    /// Field data type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
}

impl FieldDef {
    /// Create a required string field
    pub const fn required_string(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            required: true,
        }
    }

    /// Create a required number field
    pub const fn required_number(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Number,
            required: true,
        }
    }
}

/// Constraint set for one record type.
///
/// Fields keep declaration order so validation messages and generated
/// documentation list them the same way every time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// Record type name, used as the prefix of validation messages
    pub name: &'static str,
    /// Field definitions in declaration order
    pub fields: &'static [FieldDef],
}

impl Schema {
    /// Look up a field definition by wire name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of all required fields, in declaration order
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

const BOOK_FIELDS: &[FieldDef] = &[
    FieldDef::required_string("title"),
    FieldDef::required_string("author"),
    FieldDef::required_string("genre"),
    FieldDef::required_string("description"),
    FieldDef::required_number("numberOfPages"),
];

/// The constraint set for `Book`
pub static BOOK_SCHEMA: Schema = Schema {
    name: "Book",
    fields: BOOK_FIELDS,
};

/// Returns the constraint set for `Book`
pub fn book_schema() -> &'static Schema {
    &BOOK_SCHEMA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_schema_fields_in_order() {
        let names: Vec<_> = book_schema().fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["title", "author", "genre", "description", "numberOfPages"]
        );
    }

    #[test]
    fn test_all_book_fields_required() {
        assert_eq!(book_schema().required_fields().count(), 5);
    }

    #[test]
    fn test_field_lookup() {
        let schema = book_schema();
        assert_eq!(
            schema.field("numberOfPages").map(|f| f.field_type),
            Some(FieldType::Number)
        );
        assert!(schema.field("isbn").is_none());
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::String.type_name(), "string");
        assert_eq!(FieldType::Number.type_name(), "Number");
        assert_eq!(FieldType::Number.swagger_type(), "number");
    }
}
