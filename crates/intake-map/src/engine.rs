//! Column-mapping suggestion engine.
//!
//! Given the column names of an imported file and the fields of a target
//! schema, the engine proposes which column should populate which field.
//! Matching runs in tiers: exact token overlap, a shared token under a case
//! convention, then fuzzy similarity with a floor. Required fields claim
//! columns before optional ones and no column is suggested twice.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use intake_model::{MappingSuggestion, MatchKind, TargetField};

use crate::distance::similarity;
use crate::tokens::{NamingContext, TokenRegistry, TokenSet};

/// Confidence assigned to a shared token written in snake_case.
const SNAKE_CONFIDENCE: f32 = 0.9;
/// Confidence assigned to a shared token written in camelCase.
const CAMEL_CONFIDENCE: f32 = 0.8;
/// Scale factor applied to fuzzy similarity scores.
const FUZZY_WEIGHT: f32 = 0.7;
/// Minimum similarity a fuzzy candidate must reach to be suggested.
const FUZZY_SIMILARITY_FLOOR: f32 = 0.5;

/// Coarse review bands for suggested mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    /// Reviewer guidance for the band.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "review before accepting",
            Self::Medium => "likely correct, spot-check the values",
            Self::High => "safe to accept automatically",
        }
    }
}

/// Cutoffs translating a confidence score into a [`ConfidenceLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    /// Scores at or above this band as [`ConfidenceLevel::High`].
    pub high: f32,
    /// Scores at or above this, but below `high`, band as
    /// [`ConfidenceLevel::Medium`].
    pub medium: f32,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 0.9,
            medium: 0.7,
        }
    }
}

impl ConfidenceThresholds {
    /// Conservative cutoffs for unattended imports.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            high: 0.95,
            medium: 0.85,
        }
    }

    /// Permissive cutoffs for interactive review.
    #[must_use]
    pub fn relaxed() -> Self {
        Self {
            high: 0.8,
            medium: 0.5,
        }
    }

    /// Bands a confidence score. Every score falls in exactly one band.
    #[must_use]
    pub fn categorize(&self, confidence: f32) -> ConfidenceLevel {
        if confidence >= self.high {
            ConfidenceLevel::High
        } else if confidence >= self.medium {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// Suggests source-column assignments for target schema fields.
///
/// The engine holds no state between calls; each run walks the fields in
/// priority order and claims columns greedily, so a column taken by an
/// earlier field is never offered to a later one.
pub struct MappingEngine {
    registry: TokenRegistry,
}

impl MappingEngine {
    /// Engine backed by the given registry.
    #[must_use]
    pub fn new(registry: TokenRegistry) -> Self {
        Self { registry }
    }

    /// The registry this engine consults.
    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    /// Suggests a source column for every field that has a good enough
    /// candidate.
    ///
    /// Fields with no candidate at or above the fuzzy floor are absent
    /// from the result.
    #[must_use]
    pub fn suggest(
        &self,
        import_columns: &[String],
        target_fields: &[TargetField],
    ) -> BTreeMap<String, String> {
        let suggestions = self.assign(import_columns, target_fields);
        debug!(
            mapped = suggestions.len(),
            fields = target_fields.len(),
            columns = import_columns.len(),
            "mapping suggestions complete"
        );
        suggestions
            .into_iter()
            .map(|suggestion| (suggestion.target_field_id, suggestion.source_column))
            .collect()
    }

    /// Like [`suggest`](Self::suggest) but keeps confidence and match
    /// kind per suggestion, ordered by descending confidence.
    #[must_use]
    pub fn suggest_detailed(
        &self,
        import_columns: &[String],
        target_fields: &[TargetField],
    ) -> Vec<MappingSuggestion> {
        let mut suggestions = self.assign(import_columns, target_fields);
        debug!(
            mapped = suggestions.len(),
            fields = target_fields.len(),
            columns = import_columns.len(),
            "detailed suggestions complete"
        );
        suggestions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });
        suggestions
    }

    /// Finds the best unclaimed column for one field.
    ///
    /// Tiers are tried in order. An exact token intersection wins
    /// outright; failing that, a shared non-trivial token scores by the
    /// column's case convention; failing that, the best fuzzy token pair
    /// at or above the similarity floor is scaled down and suggested.
    #[must_use]
    pub fn find_best_match(
        &self,
        field: &TargetField,
        import_columns: &[String],
        used_columns: &BTreeSet<String>,
    ) -> Option<MappingSuggestion> {
        let ctx = NamingContext::for_field(&field.name, &field.id, field.field_type);
        let field_tokens = self.registry.generate_tokens(&ctx).tokens;

        let candidates: Vec<(&str, TokenSet)> = import_columns
            .iter()
            .filter(|column| !used_columns.contains(column.as_str()))
            .map(|column| {
                let ctx = NamingContext::for_column(column);
                (column.as_str(), self.registry.generate_tokens(&ctx).tokens)
            })
            .collect();

        // Tier 1: any shared token, first column wins.
        for (column, column_tokens) in &candidates {
            if field_tokens.intersection(column_tokens).next().is_some() {
                return Some(suggestion_for(field, column, 1.0, MatchKind::Exact));
            }
        }

        // Tier 2: a shared token beyond the lowercased field names,
        // scored by the raw column's own convention.
        let trivial_name = field.name.to_lowercase();
        let trivial_id = field.id.to_lowercase();
        for (column, column_tokens) in &candidates {
            let nontrivial = field_tokens
                .intersection(column_tokens)
                .any(|token| token != &trivial_name && token != &trivial_id);
            if nontrivial && let Some((kind, confidence)) = classify_case_convention(column) {
                return Some(suggestion_for(field, column, confidence, kind));
            }
        }

        // Tier 3: best fuzzy pair across all token combinations. The
        // strict comparison keeps the earlier column on score ties.
        let mut best: Option<(&str, f32)> = None;
        for (column, column_tokens) in &candidates {
            for field_token in &field_tokens {
                for column_token in column_tokens {
                    let score = similarity(field_token, column_token);
                    if score < FUZZY_SIMILARITY_FLOOR {
                        continue;
                    }
                    if best.is_none_or(|(_, best_score)| score > best_score) {
                        best = Some((*column, score));
                    }
                }
            }
        }
        best.map(|(column, score)| {
            suggestion_for(field, column, score * FUZZY_WEIGHT, MatchKind::Fuzzy)
        })
    }

    fn assign(
        &self,
        import_columns: &[String],
        target_fields: &[TargetField],
    ) -> Vec<MappingSuggestion> {
        let mut used_columns = BTreeSet::new();
        let mut suggestions = Vec::new();
        for field in fields_by_priority(target_fields) {
            if let Some(suggestion) = self.find_best_match(field, import_columns, &used_columns) {
                debug!(
                    field = %suggestion.target_field_id,
                    column = %suggestion.source_column,
                    kind = %suggestion.match_kind,
                    confidence = f64::from(suggestion.confidence),
                    "column assigned"
                );
                used_columns.insert(suggestion.source_column.clone());
                suggestions.push(suggestion);
            }
        }
        suggestions
    }
}

impl Default for MappingEngine {
    fn default() -> Self {
        Self::new(TokenRegistry::with_builtins())
    }
}

/// Fields in matching order: required first, original order otherwise.
fn fields_by_priority(target_fields: &[TargetField]) -> Vec<&TargetField> {
    let mut fields: Vec<&TargetField> = target_fields.iter().collect();
    fields.sort_by_key(|field| !field.required);
    fields
}

fn suggestion_for(
    field: &TargetField,
    column: &str,
    confidence: f32,
    match_kind: MatchKind,
) -> MappingSuggestion {
    MappingSuggestion {
        target_field_id: field.id.clone(),
        source_column: column.to_string(),
        confidence,
        match_kind,
    }
}

/// Scores the case convention of a raw column name.
///
/// An underscore anywhere marks snake_case; otherwise a lowercase letter
/// immediately followed by an uppercase one marks camelCase; anything
/// else stays unclassified.
fn classify_case_convention(column: &str) -> Option<(MatchKind, f32)> {
    if column.contains('_') {
        return Some((MatchKind::SnakeCase, SNAKE_CONFIDENCE));
    }
    if has_camel_boundary(column) {
        return Some((MatchKind::CamelCase, CAMEL_CONFIDENCE));
    }
    None
}

fn has_camel_boundary(s: &str) -> bool {
    s.as_bytes()
        .windows(2)
        .any(|pair| pair[0].is_ascii_lowercase() && pair[1].is_ascii_uppercase())
}
