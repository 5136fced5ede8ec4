//! URL modeling: format-selector normalization and URL list files.
//!
//! Import targets are plain URLs as the user copied them from a tune page; the
//! fetcher always wants the plain-text ABC rendering, which is selected with a
//! query parameter (`f=abc` on abcnotation.com).

mod list;
mod query;

pub use list::{parse_url_list, read_url_list};
pub use query::{ensure_format_param, has_query_key};

/// Default format selector key.
pub const DEFAULT_FORMAT_PARAM: &str = "f";
/// Default format selector value requesting plain-text ABC.
pub const DEFAULT_FORMAT_VALUE: &str = "abc";

/// Normalizes `url` with the default selector (`f=abc`).
///
/// # Examples
///
/// - `ensure_abc_url("https://abcnotation.com/tunePage?a=x")` → `"https://abcnotation.com/tunePage?a=x&f=abc"`
/// - `ensure_abc_url("https://abcnotation.com/tunePage?a=x&f=abc")` → unchanged
pub fn ensure_abc_url(url: &str) -> String {
    ensure_format_param(url, DEFAULT_FORMAT_PARAM, DEFAULT_FORMAT_VALUE)
}
