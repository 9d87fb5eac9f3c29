use std::collections::BTreeSet;

use thiserror::Error;

use crate::field::TargetField;

/// Errors surfaced while interpreting a target schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A schema declared a type name the model does not know.
    #[error("unknown field type: {value}")]
    UnknownFieldType {
        /// The rejected type name.
        value: String,
    },
    /// Two fields share one id, so a result map could not be keyed.
    #[error("duplicate field id: {id}")]
    DuplicateFieldId {
        /// The id that appeared more than once.
        id: String,
    },
    /// A field with an empty id could never appear in a result map.
    #[error("field id must not be empty")]
    EmptyFieldId,
}

/// Checks that every field id is non-empty and unique.
///
/// The mapping engine itself accepts any input and simply omits fields it
/// cannot match; run this beforehand when the schema comes from an
/// untrusted source and duplicate ids would be a caller bug.
pub fn validate_fields(fields: &[TargetField]) -> Result<(), SchemaError> {
    let mut seen = BTreeSet::new();
    for field in fields {
        if field.id.is_empty() {
            return Err(SchemaError::EmptyFieldId);
        }
        if !seen.insert(field.id.as_str()) {
            return Err(SchemaError::DuplicateFieldId {
                id: field.id.clone(),
            });
        }
    }
    Ok(())
}
