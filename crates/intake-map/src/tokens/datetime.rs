//! Date and timestamp field vocabulary.

use intake_model::FieldType;

use super::builder::{NamingContext, TokenBuilder, TokenResult};

const DATE_TOKENS: [&str; 5] = ["date", "datetime", "date_time", "time", "timestamp"];
const CREATED_TOKENS: [&str; 4] = ["created_at", "createdat", "created_date", "creation_date"];
const UPDATED_TOKENS: [&str; 6] = [
    "updated_at",
    "updatedat",
    "updated_date",
    "modified_at",
    "modified_date",
    "last_modified",
];
const BIRTH_TOKENS: [&str; 5] = [
    "birth_date",
    "birthdate",
    "date_of_birth",
    "dob",
    "birthday",
];

/// Vocabulary for date and timestamp fields.
pub struct DateTimeTokenBuilder;

impl TokenBuilder for DateTimeTokenBuilder {
    fn priority(&self) -> u8 {
        70
    }

    fn supported_types(&self) -> &'static [FieldType] {
        &[FieldType::Date]
    }

    fn trigger_keywords(&self) -> &'static [&'static str] {
        &["date", "time", "created", "updated", "modified"]
    }

    fn generate_tokens(&self, ctx: &NamingContext<'_>) -> TokenResult {
        let mut result = TokenResult::default();
        result.add_variants(&DATE_TOKENS);
        result.metadata.record_primary(&["date"]);

        if ctx.matches_keywords(&["created"]) {
            result.add_variants(&CREATED_TOKENS);
            result
                .metadata
                .record_synonyms(&["created_at", "creation_date"]);
        }
        if ctx.matches_keywords(&["updated", "modified"]) {
            result.add_variants(&UPDATED_TOKENS);
            result
                .metadata
                .record_synonyms(&["updated_at", "last_modified"]);
        }
        if ctx.matches_keywords(&["birth", "born"]) {
            result.add_variants(&BIRTH_TOKENS);
            result.metadata.record_abbreviations(&["dob"]);
            result.metadata.record_synonyms(&["date_of_birth"]);
        }
        result
    }
}
