//! Mapping suggestion types shared between the engine and its callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which matching tier produced a suggestion.
///
/// Tiers are tried in declaration order and each one pins the confidence
/// range: exact matches score 1.0, case-convention matches 0.9 (snake) or
/// 0.8 (camel), and fuzzy matches scale a similarity into (0, 0.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// A token shared verbatim between field and column variations.
    Exact,
    /// A snake_case column matched through a normalized token.
    SnakeCase,
    /// A camelCase column matched through a normalized token.
    CamelCase,
    /// Best Levenshtein similarity over all token pairs.
    Fuzzy,
}

impl MatchKind {
    /// Returns the wire name used in serialized suggestions.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::SnakeCase => "snake_case",
            MatchKind::CamelCase => "camel_case",
            MatchKind::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A suggested mapping from one target field to one source column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingSuggestion {
    /// Target field the suggestion is for.
    pub target_field_id: String,
    /// Source column name as it appeared in the import.
    pub source_column: String,
    /// Confidence score (0.0 to 1.0) for this mapping.
    pub confidence: f32,
    /// Tier that produced the match.
    pub match_kind: MatchKind,
}
