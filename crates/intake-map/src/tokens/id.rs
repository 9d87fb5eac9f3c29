//! Identifier field vocabulary.

use intake_model::FieldType;

use super::builder::{NamingContext, TokenBuilder, TokenResult};

const ID_TOKENS: [&str; 9] = [
    "id",
    "identifier",
    "key",
    "uid",
    "uuid",
    "guid",
    "reference",
    "ref",
    "primary_key",
];

/// Vocabulary for identifier fields.
///
/// The `id` trigger matches as a substring, so names like `user_id` or
/// `order_id` pick this vocabulary up without being typed as [`FieldType::Id`].
pub struct IdTokenBuilder;

impl TokenBuilder for IdTokenBuilder {
    fn priority(&self) -> u8 {
        75
    }

    fn supported_types(&self) -> &'static [FieldType] {
        &[FieldType::Id]
    }

    fn trigger_keywords(&self) -> &'static [&'static str] {
        &["id"]
    }

    fn generate_tokens(&self, _ctx: &NamingContext<'_>) -> TokenResult {
        let mut result = TokenResult::default();
        result.add_variants(&ID_TOKENS);
        result.metadata.record_primary(&["id"]);
        result
            .metadata
            .record_abbreviations(&["uid", "uuid", "guid", "ref"]);
        result
            .metadata
            .record_synonyms(&["identifier", "key", "reference", "primary_key"]);
        result
    }
}
