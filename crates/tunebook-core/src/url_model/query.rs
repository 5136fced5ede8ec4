//! Query-string normalization.

use url::form_urlencoded;

/// True if the query part of `url` contains `key` (with any value, even empty).
pub fn has_query_key(url: &str, key: &str) -> bool {
    let (_, query, _) = split_url(url);
    query
        .map(|q| form_urlencoded::parse(q.as_bytes()).any(|(k, _)| k == key))
        .unwrap_or(false)
}

/// Ensures the query of `url` carries `key=value`, adding it only if `key` is absent.
///
/// Scheme, host, port, path, existing query text and fragment are kept
/// byte-for-byte; only `key=value` is appended. URLs that already carry `key`
/// are returned unchanged. Never fails, whatever the input looks like.
pub fn ensure_format_param(url: &str, key: &str, value: &str) -> String {
    if has_query_key(url, key) {
        return url.to_string();
    }
    let (base, query, fragment) = split_url(url);
    let pair = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();

    let mut out = String::with_capacity(url.len() + pair.len() + 2);
    out.push_str(base);
    out.push('?');
    match query {
        Some(q) if !q.is_empty() => {
            out.push_str(q);
            if !q.ends_with('&') {
                out.push('&');
            }
        }
        _ => {}
    }
    out.push_str(&pair);
    if let Some(f) = fragment {
        out.push('#');
        out.push_str(f);
    }
    out
}

/// Splits a URL-ish string into (base, query, fragment) without validating it.
fn split_url(url: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, fragment) = match url.split_once('#') {
        Some((r, f)) => (r, Some(f)),
        None => (url, None),
    };
    match rest.split_once('?') {
        Some((base, query)) => (base, Some(query), fragment),
        None => (rest, None, fragment),
    }
}
