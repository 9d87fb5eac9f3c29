use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// Category of a target schema field.
///
/// The category decides which token vocabularies apply when the mapping
/// engine searches for a matching source column. It says nothing about how
/// values are validated or transformed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free-form text with no specialized vocabulary.
    Text,
    /// Email addresses.
    Email,
    /// Phone numbers.
    Phone,
    /// Person names (first, last, full).
    Name,
    /// Record identifiers and keys.
    Id,
    /// Dates, times, and timestamps.
    Date,
    /// Numeric values (counts, amounts, ages).
    Number,
    /// Postal address components.
    Address,
    /// Web addresses and links.
    Url,
    /// True/false flags.
    Boolean,
}

impl FieldType {
    /// Returns the lowercase name as it appears in schema definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Name => "name",
            FieldType::Id => "id",
            FieldType::Date => "date",
            FieldType::Number => "number",
            FieldType::Address => "address",
            FieldType::Url => "url",
            FieldType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = SchemaError;

    /// Parses a schema type name.
    /// Case-insensitive, with the common aliases found in schema files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "string" => Ok(FieldType::Text),
            "email" => Ok(FieldType::Email),
            "phone" | "telephone" => Ok(FieldType::Phone),
            "name" => Ok(FieldType::Name),
            "id" | "identifier" => Ok(FieldType::Id),
            "date" | "datetime" => Ok(FieldType::Date),
            "number" | "numeric" => Ok(FieldType::Number),
            "address" => Ok(FieldType::Address),
            "url" => Ok(FieldType::Url),
            "boolean" | "bool" => Ok(FieldType::Boolean),
            _ => Err(SchemaError::UnknownFieldType {
                value: s.to_string(),
            }),
        }
    }
}

/// Minimal projection of a schema field that the mapping engine needs.
///
/// Richer schema metadata (validation rules, transforms, display options)
/// is irrelevant to column matching and stays in the caller's own types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetField {
    /// Stable identifier; the result map is keyed by this.
    pub id: String,
    /// Human-facing label.
    pub name: String,
    /// Field category driving vocabulary selection.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Required fields claim columns before optional ones.
    #[serde(default)]
    pub required: bool,
}

impl TargetField {
    /// Creates an optional field of the given type.
    pub fn new(id: impl Into<String>, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            field_type,
            required: false,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
