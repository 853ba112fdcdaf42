//! Lenient URL decomposition into hostname, path, query and fragment.
//!
//! Never fails: anything that does not look like a URL component simply
//! ends up in `path` or leaves a field empty.

/// Schemes whose last path segment may carry `;params`, which are not part
/// of the path.
const SCHEMES_WITH_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Components of a URL used by feature extraction. Absent parts are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    pub hostname: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

fn is_scheme_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Splits `url` the way generic URL parsers do.
///
/// Leading control characters and spaces are stripped and embedded tab/CR/LF
/// characters removed before splitting.
pub fn split_url(url: &str) -> ParsedUrl {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let mut rest = cleaned.as_str();
    let mut scheme = String::new();
    if let Some(i) = rest.find(':') {
        if is_scheme_name(&rest[..i]) {
            scheme = rest[..i].to_ascii_lowercase();
            rest = &rest[i + 1..];
        }
    }

    let mut netloc = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after
            .find(|c: char| matches!(c, '/' | '?' | '#'))
            .unwrap_or(after.len());
        netloc = &after[..end];
        rest = &after[end..];
    }

    let mut fragment = "";
    if let Some((before, frag)) = rest.split_once('#') {
        rest = before;
        fragment = frag;
    }
    let mut query = "";
    if let Some((before, q)) = rest.split_once('?') {
        rest = before;
        query = q;
    }

    let path = if SCHEMES_WITH_PARAMS.contains(&scheme.as_str()) {
        strip_params(rest)
    } else {
        rest
    };

    ParsedUrl {
        hostname: hostname_from_netloc(netloc),
        scheme,
        path: path.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    }
}

/// Drops a `;params` suffix from the last path segment.
fn strip_params(path: &str) -> &str {
    let search_from = path.rfind('/').unwrap_or(0);
    match path[search_from..].find(';') {
        Some(i) => &path[..search_from + i],
        None => path,
    }
}

/// Extracts the lowercased host from `[userinfo@]host[:port]`.
///
/// Unbalanced IPv6 brackets yield an empty hostname.
pub fn hostname_from_netloc(netloc: &str) -> String {
    if netloc.contains('[') != netloc.contains(']') {
        return String::new();
    }
    let hostinfo = match netloc.rfind('@') {
        Some(i) => &netloc[i + 1..],
        None => netloc,
    };
    let host = match hostinfo.split_once('[') {
        Some((_, bracketed)) => bracketed.split(']').next().unwrap_or(""),
        None => hostinfo.split(':').next().unwrap_or(""),
    };
    // An IPv6 zone id keeps its case.
    match host.split_once('%') {
        Some((addr, zone)) => format!("{}%{}", addr.to_lowercase(), zone),
        None => host.to_lowercase(),
    }
}
