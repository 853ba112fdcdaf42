//! URL modeling: default-scheme normalization and lenient component splitting.
//!
//! Both steps are total. Malformed input degrades to empty components so
//! that feature extraction can always produce a full vector.

mod normalize;
mod split;

pub use normalize::{has_scheme_prefix, normalize_url, DEFAULT_SCHEME_PREFIX};
pub use split::{hostname_from_netloc, split_url, ParsedUrl};

/// Normalizes `url` and splits it.
///
/// Returns the normalized string (used for URL-level counts) together with
/// its components.
///
/// # Examples
///
/// - `parse_url("example.com")` → `("http://example.com", hostname "example.com", path "")`
/// - `parse_url("https://x.y/a?b#c")` → path `"/a"`, query `"b"`, fragment `"c"`
pub fn parse_url(url: &str) -> (String, ParsedUrl) {
    let normalized = normalize_url(url).into_owned();
    let parsed = split_url(&normalized);
    (normalized, parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_url_without_scheme() {
        let (normalized, parsed) = parse_url("example.com");
        assert_eq!(normalized, "http://example.com");
        assert_eq!(parsed.hostname, "example.com");
        assert_eq!(parsed.path, "");
    }

    #[test]
    fn parse_url_keeps_existing_scheme() {
        let (normalized, parsed) = parse_url("https://login.example.com/a?b=1#c");
        assert_eq!(normalized, "https://login.example.com/a?b=1#c");
        assert_eq!(parsed.scheme, "https");
        assert_eq!(parsed.path, "/a");
        assert_eq!(parsed.query, "b=1");
        assert_eq!(parsed.fragment, "c");
    }

    #[test]
    fn parse_url_empty_input() {
        let (normalized, parsed) = parse_url("");
        assert_eq!(normalized, "http://");
        assert_eq!(parsed, ParsedUrl {
            scheme: "http".to_string(),
            ..ParsedUrl::default()
        });
    }
}
