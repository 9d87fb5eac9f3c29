//! Levenshtein edit distance used by the fuzzy matching tier.

/// Computes the Levenshtein distance between two strings.
///
/// Unit costs for insertion, deletion, and substitution over Unicode
/// characters, with a rolling-row dynamic program. Every cell is evaluated;
/// there is no early termination.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Keep the shorter string on the row axis to bound the allocation.
    let (target, source) = if a_chars.len() < b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let mut row: Vec<usize> = (0..=target.len()).collect();
    for (i, source_ch) in source.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, target_ch) in target.iter().enumerate() {
            let cost = usize::from(source_ch != target_ch);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = diagonal + cost;

            diagonal = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[target.len()]
}

/// Normalized similarity in `[0, 1]`: `1 - distance / max(len(a), len(b))`.
///
/// Two empty strings are fully similar.
pub fn similarity(a: &str, b: &str) -> f32 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f32 / max_len as f32
}
