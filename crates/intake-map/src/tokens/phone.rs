//! Phone number field vocabulary.

use intake_model::FieldType;

use super::builder::{NamingContext, TokenBuilder, TokenResult};

const PHONE_TOKENS: [&str; 8] = [
    "phone",
    "telephone",
    "tel",
    "mobile",
    "cell",
    "phone_number",
    "phonenumber",
    "contact_number",
];

/// Vocabulary for phone number fields.
pub struct PhoneTokenBuilder;

impl TokenBuilder for PhoneTokenBuilder {
    fn priority(&self) -> u8 {
        80
    }

    fn supported_types(&self) -> &'static [FieldType] {
        &[FieldType::Phone]
    }

    fn trigger_keywords(&self) -> &'static [&'static str] {
        &["phone", "tel", "mobile", "cell"]
    }

    fn generate_tokens(&self, _ctx: &NamingContext<'_>) -> TokenResult {
        let mut result = TokenResult::default();
        result.add_variants(&PHONE_TOKENS);
        result.metadata.record_primary(&["phone"]);
        result.metadata.record_abbreviations(&["tel", "cell"]);
        result.metadata.record_synonyms(&[
            "telephone",
            "mobile",
            "phone_number",
            "phonenumber",
            "contact_number",
        ]);
        result
    }
}
