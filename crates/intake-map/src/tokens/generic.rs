//! Structural fallback that applies to every context.

use crate::case::{case_variations, clean_field_name};

use super::builder::{NamingContext, TokenBuilder, TokenResult};

/// Case-convention variations of the raw names, with no field-type
/// vocabulary attached.
///
/// This is the only built-in builder that also runs for source columns,
/// so it alone determines which tokens a column exposes for matching.
pub struct GenericTokenBuilder;

impl TokenBuilder for GenericTokenBuilder {
    fn priority(&self) -> u8 {
        0
    }

    fn can_handle(&self, _ctx: &NamingContext<'_>) -> bool {
        true
    }

    fn generate_tokens(&self, ctx: &NamingContext<'_>) -> TokenResult {
        let mut result = TokenResult::default();
        expand(&mut result, ctx.field_name);
        if ctx.field_id != ctx.field_name {
            expand(&mut result, ctx.field_id);
        }
        result
    }
}

fn expand(result: &mut TokenResult, raw: &str) {
    let variations = case_variations(raw);
    result.metadata.record_case_variations(&variations);
    result.tokens.extend(variations);

    let cleaned = clean_field_name(raw);
    if cleaned != raw {
        let variations = case_variations(&cleaned);
        result.metadata.record_case_variations(&variations);
        result.tokens.extend(variations);
    }
}
