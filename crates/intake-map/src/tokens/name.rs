//! Person name vocabulary with first/last/full sub-bundles.

use intake_model::FieldType;

use super::builder::{NamingContext, TokenBuilder, TokenResult};

const NAME_TOKENS: [&str; 1] = ["name"];
const FIRST_NAME_TOKENS: [&str; 6] = [
    "first_name",
    "firstname",
    "fname",
    "given_name",
    "givenname",
    "forename",
];
const LAST_NAME_TOKENS: [&str; 6] = [
    "last_name",
    "lastname",
    "lname",
    "surname",
    "family_name",
    "familyname",
];
const FULL_NAME_TOKENS: [&str; 5] = [
    "full_name",
    "fullname",
    "complete_name",
    "display_name",
    "displayname",
];

/// Vocabulary for person name fields.
///
/// The base `name` token is always emitted; `first`, `last`, and `full`
/// keywords in the context each add their own bundle, and several bundles
/// can apply to the same field.
pub struct NameTokenBuilder;

impl TokenBuilder for NameTokenBuilder {
    fn priority(&self) -> u8 {
        70
    }

    fn supported_types(&self) -> &'static [FieldType] {
        &[FieldType::Name]
    }

    fn trigger_keywords(&self) -> &'static [&'static str] {
        &["name"]
    }

    fn generate_tokens(&self, ctx: &NamingContext<'_>) -> TokenResult {
        let mut result = TokenResult::default();
        result.add_variants(&NAME_TOKENS);
        result.metadata.record_primary(&["name"]);

        if ctx.matches_keywords(&["first"]) {
            result.add_variants(&FIRST_NAME_TOKENS);
            result.metadata.record_abbreviations(&["fname"]);
            result.metadata.record_synonyms(&["given_name", "forename"]);
        }
        if ctx.matches_keywords(&["last"]) {
            result.add_variants(&LAST_NAME_TOKENS);
            result.metadata.record_abbreviations(&["lname"]);
            result.metadata.record_synonyms(&["surname", "family_name"]);
        }
        if ctx.matches_keywords(&["full"]) {
            result.add_variants(&FULL_NAME_TOKENS);
            result
                .metadata
                .record_synonyms(&["complete_name", "display_name"]);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_vocabulary_is_always_present() {
        let ctx = NamingContext::for_field("Name", "name", FieldType::Name);
        let result = NameTokenBuilder.generate_tokens(&ctx);

        assert!(result.tokens.contains("name"));
        assert!(!result.tokens.contains("first_name"));
        assert!(!result.tokens.contains("surname"));
    }

    #[test]
    fn first_keyword_adds_given_name_forms() {
        let ctx = NamingContext::for_field("First Name", "first_name", FieldType::Name);
        let result = NameTokenBuilder.generate_tokens(&ctx);

        assert!(result.tokens.contains("first_name"));
        assert!(result.tokens.contains("firstName"));
        assert!(result.tokens.contains("fname"));
        assert!(result.tokens.contains("forename"));
        assert!(!result.tokens.contains("surname"));
    }

    #[test]
    fn keyword_bundles_compose() {
        let ctx = NamingContext::for_field("Full Last Name", "legal_name", FieldType::Name);
        let result = NameTokenBuilder.generate_tokens(&ctx);

        assert!(result.tokens.contains("surname"));
        assert!(result.tokens.contains("full_name"));
        assert!(!result.tokens.contains("fname"));
    }
}
