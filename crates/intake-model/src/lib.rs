pub mod error;
pub mod field;
pub mod mapping;

pub use error::{SchemaError, validate_fields};
pub use field::{FieldType, TargetField};
pub use mapping::{MappingSuggestion, MatchKind};
