//! ABC header fields.

/// Header marker of the tune title field.
pub const TITLE_FIELD: &str = "T:";

/// Returns the value of the first `T:` line (trimmed), or `""` if there is none.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`.
pub fn extract_title(abc_text: &str) -> String {
    abc_text
        .split(|c: char| c == '\n' || c == '\r')
        .map(str::trim)
        .find_map(|line| line.strip_prefix(TITLE_FIELD))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_default()
}
