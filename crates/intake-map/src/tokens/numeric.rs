//! Numeric quantity vocabulary with count/money/age sub-bundles.

use intake_model::FieldType;

use super::builder::{NamingContext, TokenBuilder, TokenResult};

const NUMBER_TOKENS: [&str; 3] = ["number", "num", "value"];
const COUNT_TOKENS: [&str; 5] = ["count", "total", "quantity", "qty", "sum"];
const MONEY_TOKENS: [&str; 8] = [
    "amount", "price", "cost", "fee", "rate", "salary", "wage", "pay",
];
const AGE_TOKENS: [&str; 2] = ["age", "years"];

/// Vocabulary for numeric quantity fields.
pub struct NumericTokenBuilder;

impl TokenBuilder for NumericTokenBuilder {
    fn priority(&self) -> u8 {
        60
    }

    fn supported_types(&self) -> &'static [FieldType] {
        &[FieldType::Number]
    }

    fn trigger_keywords(&self) -> &'static [&'static str] {
        &["age", "count", "total", "amount", "price", "cost", "salary", "wage"]
    }

    fn generate_tokens(&self, ctx: &NamingContext<'_>) -> TokenResult {
        let mut result = TokenResult::default();
        result.add_variants(&NUMBER_TOKENS);
        result.metadata.record_primary(&["number"]);
        result.metadata.record_abbreviations(&["num"]);

        if ctx.matches_keywords(&["count", "total", "quantity", "qty", "sum"]) {
            result.add_variants(&COUNT_TOKENS);
            result.metadata.record_abbreviations(&["qty"]);
            result.metadata.record_synonyms(&["total", "quantity", "sum"]);
        }
        if ctx.matches_keywords(&["amount", "price", "cost", "fee", "salary", "wage", "pay", "rate"])
        {
            result.add_variants(&MONEY_TOKENS);
            result
                .metadata
                .record_synonyms(&["amount", "price", "cost", "fee"]);
        }
        if ctx.matches_keywords(&["age", "years"]) {
            result.add_variants(&AGE_TOKENS);
            result.metadata.record_synonyms(&["years"]);
        }
        result
    }
}
