//! Filesystem-safe identifiers derived from tune titles.

/// Converts `text` into a lowercase, hyphen-separated slug.
///
/// - Lowercases and trims
/// - Drops everything except letters, digits, `_`, whitespace and `-`
/// - Turns whitespace runs into a single `-` and collapses repeated `-`
/// - Strips leading/trailing `-`
///
/// Returns `fallback` when nothing is left.
pub fn slugify(text: &str, fallback: &str) -> String {
    let lowered = text.trim().to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut prev_hyphen = false;
    for c in lowered.chars() {
        let mapped = if c.is_whitespace() || c == '-' {
            '-'
        } else if c.is_alphanumeric() || c == '_' {
            c
        } else {
            continue;
        };

        if mapped == '-' {
            if !prev_hyphen {
                out.push('-');
            }
            prev_hyphen = true;
        } else {
            out.push(mapped);
            prev_hyphen = false;
        }
    }

    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
