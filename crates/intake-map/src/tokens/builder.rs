//! Token builder trait and the naming types every builder works with.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use intake_model::FieldType;

use crate::case::{case_variations, contains_keywords};

/// Deduplicated set of name tokens produced for one naming context.
pub type TokenSet = BTreeSet<String>;

/// The field or column a token lookup runs against.
///
/// A context describes either a target field (`is_source` false, with its
/// declared [`FieldType`]) or a raw source column (`is_source` true, where
/// the column string stands in for both name and id and no type is known).
#[derive(Debug, Clone, Copy)]
pub struct NamingContext<'a> {
    /// Human-facing name (or the column string for source contexts).
    pub field_name: &'a str,
    /// Stable identifier (or the column string for source contexts).
    pub field_id: &'a str,
    /// Declared field type; absent for source columns.
    pub field_type: Option<FieldType>,
    /// True when the context describes an imported column.
    pub is_source: bool,
}

impl<'a> NamingContext<'a> {
    /// Context for a target schema field.
    pub fn for_field(field_name: &'a str, field_id: &'a str, field_type: FieldType) -> Self {
        Self {
            field_name,
            field_id,
            field_type: Some(field_type),
            is_source: false,
        }
    }

    /// Context for a raw source column.
    pub fn for_column(column: &'a str) -> Self {
        Self {
            field_name: column,
            field_id: column,
            field_type: None,
            is_source: true,
        }
    }

    /// True if any keyword occurs in the field name or field id.
    pub fn matches_keywords(&self, keywords: &[&str]) -> bool {
        contains_keywords(self.field_name, keywords) || contains_keywords(self.field_id, keywords)
    }
}

/// Advisory description of where tokens came from.
///
/// Lists are concatenated across builders in priority order and never
/// deduplicated; only [`TokenResult::tokens`] carries a uniqueness
/// guarantee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Canonical vocabulary words for the detected category.
    pub primary_tokens: Vec<String>,
    /// Short forms such as `tel`, `qty`, or `dob`.
    pub abbreviations: Vec<String>,
    /// Alternate long forms and spellings.
    pub synonyms: Vec<String>,
    /// Case-convention expansions of the raw names.
    pub case_variations: Vec<String>,
}

impl TokenMetadata {
    /// Records canonical vocabulary words.
    pub fn record_primary(&mut self, words: &[&str]) {
        extend_owned(&mut self.primary_tokens, words);
    }

    /// Records abbreviated forms.
    pub fn record_abbreviations(&mut self, words: &[&str]) {
        extend_owned(&mut self.abbreviations, words);
    }

    /// Records synonym forms.
    pub fn record_synonyms(&mut self, words: &[&str]) {
        extend_owned(&mut self.synonyms, words);
    }

    /// Records case-convention expansions.
    pub fn record_case_variations(&mut self, forms: &TokenSet) {
        self.case_variations.extend(forms.iter().cloned());
    }

    /// Appends another metadata block, keeping duplicates.
    pub fn append(&mut self, other: TokenMetadata) {
        self.primary_tokens.extend(other.primary_tokens);
        self.abbreviations.extend(other.abbreviations);
        self.synonyms.extend(other.synonyms);
        self.case_variations.extend(other.case_variations);
    }
}

fn extend_owned(list: &mut Vec<String>, words: &[&str]) {
    list.extend(words.iter().map(|word| (*word).to_string()));
}

/// Tokens plus advisory metadata produced by one or more builders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResult {
    /// Deduplicated normalized name variations.
    pub tokens: TokenSet,
    /// Advisory, non-deduplicated provenance lists.
    pub metadata: TokenMetadata,
}

impl TokenResult {
    /// Inserts every case variation of each vocabulary word.
    pub fn add_variants(&mut self, words: &[&str]) {
        for word in words {
            self.tokens.extend(case_variations(word));
        }
    }

    /// Merges another result: tokens union, metadata concatenation.
    pub fn merge(&mut self, other: TokenResult) {
        self.tokens.extend(other.tokens);
        self.metadata.append(other.metadata);
    }
}

/// A unit of token vocabulary for one field category.
///
/// Builders are registered in a [`TokenRegistry`](super::TokenRegistry) and
/// consulted in descending priority order. Every applicable builder
/// contributes, so vocabularies compose rather than compete.
pub trait TokenBuilder: Send + Sync {
    /// Sort key within the registry; higher priorities run first.
    fn priority(&self) -> u8;

    /// Field types this builder is specific to.
    ///
    /// An empty slice means the builder does not discriminate by type.
    fn supported_types(&self) -> &'static [FieldType] {
        &[]
    }

    /// Keywords that make the builder applicable regardless of field type.
    fn trigger_keywords(&self) -> &'static [&'static str] {
        &[]
    }

    /// Whether this builder applies to the given context.
    ///
    /// The default applies field-specific vocabularies to target fields
    /// only: a source column carries no declared type and keeps purely
    /// structural variations, so keyword triggers never fire on it.
    fn can_handle(&self, ctx: &NamingContext<'_>) -> bool {
        if ctx.is_source {
            return false;
        }
        if let Some(field_type) = ctx.field_type
            && self.supported_types().contains(&field_type)
        {
            return true;
        }
        ctx.matches_keywords(self.trigger_keywords())
    }

    /// Produces the token variations for the context.
    fn generate_tokens(&self, ctx: &NamingContext<'_>) -> TokenResult;
}
