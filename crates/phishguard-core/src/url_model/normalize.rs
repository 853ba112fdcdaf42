//! Default-scheme normalization.

use std::borrow::Cow;

/// Scheme prepended to URLs that arrive without one.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Returns true if `url` starts with `<scheme>://`, where the scheme is a
/// letter followed by letters, digits, `+`, `-` or `.`.
pub fn has_scheme_prefix(url: &str) -> bool {
    let mut chars = url.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    for (i, c) in chars {
        if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') {
            continue;
        }
        return url[i..].starts_with("://");
    }
    false
}

/// Prepends `http://` unless the URL already carries a scheme prefix.
///
/// Idempotent: normalizing a normalized URL returns it unchanged.
pub fn normalize_url(url: &str) -> Cow<'_, str> {
    if has_scheme_prefix(url) {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{url}"))
    }
}
