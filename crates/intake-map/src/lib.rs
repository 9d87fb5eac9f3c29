//! Suggests how the columns of an imported file map onto a target schema.
//!
//! Matching is token-based: a registry of builders expands every field and
//! column name into a set of normalized variations, and the engine compares
//! those sets in tiers of decreasing confidence.
//!
//! ```
//! use intake_map::MappingEngine;
//! use intake_model::{FieldType, TargetField};
//!
//! let engine = MappingEngine::default();
//! let columns = vec!["first_name".to_string(), "email".to_string()];
//! let fields = vec![
//!     TargetField::new("firstName", "First Name", FieldType::Name),
//!     TargetField::new("email", "Email", FieldType::Email),
//! ];
//!
//! let mapping = engine.suggest(&columns, &fields);
//! assert_eq!(mapping.get("firstName").map(String::as_str), Some("first_name"));
//! assert_eq!(mapping.get("email").map(String::as_str), Some("email"));
//! ```

pub mod case;
pub mod distance;
pub mod engine;
pub mod tokens;

pub use engine::{ConfidenceLevel, ConfidenceThresholds, MappingEngine};
pub use tokens::{
    AddressTokenBuilder, DateTimeTokenBuilder, EmailTokenBuilder, GenericTokenBuilder,
    IdTokenBuilder, NameTokenBuilder, NamingContext, NumericTokenBuilder, PhoneTokenBuilder,
    TokenBuilder, TokenMetadata, TokenRegistry, TokenResult, TokenSet, UrlTokenBuilder,
};
