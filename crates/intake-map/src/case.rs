//! Case-convention conversions and name cleaning shared by every token builder.
//!
//! All conversions operate on ASCII case classes; characters outside ASCII
//! alphanumerics count as separators.

use std::collections::BTreeSet;

const NAME_AFFIXES: [&str; 3] = ["column", "field", "col"];

/// Converts a name to snake_case.
///
/// An underscore is inserted before every ASCII uppercase letter, the string
/// is lowercased, separator runs collapse to a single underscore, and
/// leading/trailing underscores are trimmed. Acronyms split per letter
/// (`"HTTPServer"` becomes `"h_t_t_p_server"`).
pub fn to_snake_case(s: &str) -> String {
    let mut lowered = String::with_capacity(s.len() + 4);
    for ch in s.chars() {
        if ch.is_ascii_uppercase() {
            lowered.push('_');
            lowered.push(ch.to_ascii_lowercase());
        } else {
            for lower in ch.to_lowercase() {
                lowered.push(lower);
            }
        }
    }

    let mut collapsed = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() {
            collapsed.push(ch);
        } else if !collapsed.ends_with('_') {
            collapsed.push('_');
        }
    }
    collapsed.trim_matches('_').to_string()
}

/// Converts a name to camelCase.
///
/// A string that is already plain camelCase (`^[a-z][a-zA-Z0-9]*$`) is
/// returned unchanged. Otherwise the string is lowercased, every separator
/// run followed by a character is dropped with that character uppercased,
/// and the first character is forced to lowercase. A trailing separator run
/// has no following character and stays in place (`"user_"` keeps its
/// underscore).
pub fn to_camel_case(s: &str) -> String {
    if is_plain_camel(s) {
        return s.to_string();
    }

    let lowered = s.to_lowercase();
    let mut result = String::with_capacity(lowered.len());
    let mut pending = String::new();
    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending.is_empty() || result.is_empty() {
                result.push(ch);
            } else {
                result.push(ch.to_ascii_uppercase());
            }
            pending.clear();
        } else {
            pending.push(ch);
        }
    }
    result.push_str(&pending);
    result
}

fn is_plain_camel(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars.all(|ch| ch.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Returns the lowercase, snake_case, and camelCase forms of a name.
///
/// Duplicates collapse naturally and empty forms are never included.
pub fn case_variations(s: &str) -> BTreeSet<String> {
    let mut variations = BTreeSet::new();
    for variant in [s.to_lowercase(), to_snake_case(s), to_camel_case(s)] {
        if !variant.is_empty() {
            variations.insert(variant);
        }
    }
    variations
}

/// Strips one leading `field`/`column`/`col` prefix (optional trailing
/// underscore) or one trailing `_field`/`_column`/`_col` suffix,
/// case-insensitively.
///
/// Longer prefixes are tried first, so `"column_name"` loses `column_`
/// rather than `col`. A strip that would leave an empty string is skipped.
pub fn clean_field_name(s: &str) -> String {
    let mut cleaned = s;

    for prefix in NAME_AFFIXES {
        if let Some(head) = cleaned.get(..prefix.len())
            && head.eq_ignore_ascii_case(prefix)
        {
            let rest = &cleaned[prefix.len()..];
            let rest = rest.strip_prefix('_').unwrap_or(rest);
            if !rest.is_empty() {
                cleaned = rest;
                break;
            }
        }
    }

    for suffix in NAME_AFFIXES {
        let tagged = suffix.len() + 1;
        if cleaned.len() > tagged
            && let Some(tail) = cleaned.get(cleaned.len() - tagged..)
            && let Some(bare) = tail.strip_prefix('_')
            && bare.eq_ignore_ascii_case(suffix)
        {
            cleaned = &cleaned[..cleaned.len() - tagged];
            break;
        }
    }

    cleaned.to_string()
}

/// Case-insensitive substring test against any keyword in the list.
pub fn contains_keywords(s: &str, keywords: &[&str]) -> bool {
    let lowered = s.to_lowercase();
    keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
}
