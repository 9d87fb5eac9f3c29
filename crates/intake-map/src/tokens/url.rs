//! URL field vocabulary.

use intake_model::FieldType;

use super::builder::{NamingContext, TokenBuilder, TokenResult};

const URL_TOKENS: [&str; 8] = [
    "url",
    "uri",
    "link",
    "website",
    "web_site",
    "site",
    "web_address",
    "homepage",
];

/// Vocabulary for web address fields.
pub struct UrlTokenBuilder;

impl TokenBuilder for UrlTokenBuilder {
    fn priority(&self) -> u8 {
        80
    }

    fn supported_types(&self) -> &'static [FieldType] {
        &[FieldType::Url]
    }

    fn trigger_keywords(&self) -> &'static [&'static str] {
        &["url", "link", "website", "site"]
    }

    fn generate_tokens(&self, _ctx: &NamingContext<'_>) -> TokenResult {
        let mut result = TokenResult::default();
        result.add_variants(&URL_TOKENS);
        result.metadata.record_primary(&["url"]);
        result.metadata.record_abbreviations(&["uri"]);
        result.metadata.record_synonyms(&[
            "link",
            "website",
            "web_site",
            "site",
            "web_address",
            "homepage",
        ]);
        result
    }
}
