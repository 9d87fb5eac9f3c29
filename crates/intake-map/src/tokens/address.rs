//! Postal address vocabulary with component sub-bundles.

use intake_model::FieldType;

use super::builder::{NamingContext, TokenBuilder, TokenResult};

const ADDRESS_TOKENS: [&str; 4] = ["address", "addr", "street_address", "location"];
const STREET_TOKENS: [&str; 6] = ["street", "st", "road", "rd", "avenue", "ave"];
const CITY_TOKENS: [&str; 3] = ["city", "town", "municipality"];
const STATE_TOKENS: [&str; 3] = ["state", "province", "region"];
const ZIP_TOKENS: [&str; 6] = [
    "zip",
    "zipcode",
    "zip_code",
    "postal_code",
    "postalcode",
    "postcode",
];
const COUNTRY_TOKENS: [&str; 2] = ["country", "nation"];

/// Vocabulary for postal address fields.
///
/// The base bundle is always emitted; street, city, state, zip, and
/// country keywords each add a component bundle on top.
pub struct AddressTokenBuilder;

impl TokenBuilder for AddressTokenBuilder {
    fn priority(&self) -> u8 {
        70
    }

    fn supported_types(&self) -> &'static [FieldType] {
        &[FieldType::Address]
    }

    fn trigger_keywords(&self) -> &'static [&'static str] {
        &["address", "street", "city", "state", "zip", "postal", "country"]
    }

    fn generate_tokens(&self, ctx: &NamingContext<'_>) -> TokenResult {
        let mut result = TokenResult::default();
        result.add_variants(&ADDRESS_TOKENS);
        result.metadata.record_primary(&["address"]);
        result.metadata.record_abbreviations(&["addr"]);

        if ctx.matches_keywords(&["street"]) {
            result.add_variants(&STREET_TOKENS);
            result.metadata.record_abbreviations(&["st", "rd", "ave"]);
            result.metadata.record_synonyms(&["road", "avenue"]);
        }
        if ctx.matches_keywords(&["city"]) {
            result.add_variants(&CITY_TOKENS);
            result.metadata.record_synonyms(&["town", "municipality"]);
        }
        if ctx.matches_keywords(&["state", "province"]) {
            result.add_variants(&STATE_TOKENS);
            result.metadata.record_synonyms(&["province", "region"]);
        }
        if ctx.matches_keywords(&["zip", "postal", "postcode"]) {
            result.add_variants(&ZIP_TOKENS);
            result
                .metadata
                .record_synonyms(&["postal_code", "postcode"]);
        }
        if ctx.matches_keywords(&["country"]) {
            result.add_variants(&COUNTRY_TOKENS);
            result.metadata.record_synonyms(&["nation"]);
        }
        result
    }
}
