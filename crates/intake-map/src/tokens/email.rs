//! Email field vocabulary.

use intake_model::FieldType;

use super::builder::{NamingContext, TokenBuilder, TokenResult};

const EMAIL_TOKENS: [&str; 5] = ["email", "mail", "e_mail", "email_address", "emailaddress"];

/// Vocabulary for email address fields.
pub struct EmailTokenBuilder;

impl TokenBuilder for EmailTokenBuilder {
    fn priority(&self) -> u8 {
        80
    }

    fn supported_types(&self) -> &'static [FieldType] {
        &[FieldType::Email]
    }

    fn trigger_keywords(&self) -> &'static [&'static str] {
        &["email", "mail"]
    }

    fn generate_tokens(&self, _ctx: &NamingContext<'_>) -> TokenResult {
        let mut result = TokenResult::default();
        result.add_variants(&EMAIL_TOKENS);
        result.metadata.record_primary(&["email"]);
        result.metadata.record_abbreviations(&["e_mail"]);
        result
            .metadata
            .record_synonyms(&["mail", "email_address", "emailaddress"]);
        result
    }
}
