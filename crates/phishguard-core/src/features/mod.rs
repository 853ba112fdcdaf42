//! URL feature extraction.
//!
//! Maps a raw URL string to the fixed, ordered feature vector the model
//! bundle's preprocessor was fitted on. Extraction is total: empty strings,
//! host-less URLs and arbitrary garbage all produce every column, with
//! absent computations left at zero.

mod stats;
mod subdomain;
mod vector;

use std::collections::HashMap;

pub use stats::{
    char_len, count_char, count_digits, count_special_chars, has_repeated_digit, shannon_entropy,
};
pub use subdomain::{subdomain_labels, subdomain_stats, SubdomainStats};
pub use vector::{FeatureValue, FeatureVector};

use crate::url_model::parse_url;

/// Column names in the order the preprocessor expects them.
pub const FEATURE_COLUMNS: [&str; 41] = [
    "url_length",
    "number_of_dots_in_url",
    "having_repeated_digits_in_url",
    "number_of_digits_in_url",
    "number_of_special_char_in_url",
    "number_of_hyphens_in_url",
    "number_of_underline_in_url",
    "number_of_slash_in_url",
    "number_of_questionmark_in_url",
    "number_of_equal_in_url",
    "number_of_at_in_url",
    "number_of_dollar_in_url",
    "number_of_exclamation_in_url",
    "number_of_hashtag_in_url",
    "number_of_percent_in_url",
    "domain_length",
    "number_of_dots_in_domain",
    "number_of_hyphens_in_domain",
    "having_special_characters_in_domain",
    "number_of_special_characters_in_domain",
    "having_digits_in_domain",
    "number_of_digits_in_domain",
    "having_repeated_digits_in_domain",
    "number_of_subdomains",
    "having_dot_in_subdomain",
    "having_hyphen_in_subdomain",
    "average_subdomain_length",
    "average_number_of_dots_in_subdomain",
    "average_number_of_hyphens_in_subdomain",
    "having_special_characters_in_subdomain",
    "number_of_special_characters_in_subdomain",
    "having_digits_in_subdomain",
    "number_of_digits_in_subdomain",
    "having_repeated_digits_in_subdomain",
    "having_path",
    "path_length",
    "having_query",
    "having_fragment",
    "having_anchor",
    "entropy_of_url",
    "entropy_of_domain",
];

/// Number of feature columns.
pub const FEATURE_COUNT: usize = FEATURE_COLUMNS.len();

/// Literal characters counted over the whole URL, with their column names.
const URL_CHAR_COUNTS: [(&str, char); 11] = [
    ("number_of_dots_in_url", '.'),
    ("number_of_hyphens_in_url", '-'),
    ("number_of_underline_in_url", '_'),
    ("number_of_slash_in_url", '/'),
    ("number_of_questionmark_in_url", '?'),
    ("number_of_equal_in_url", '='),
    ("number_of_at_in_url", '@'),
    ("number_of_dollar_in_url", '$'),
    ("number_of_exclamation_in_url", '!'),
    ("number_of_hashtag_in_url", '#'),
    ("number_of_percent_in_url", '%'),
];

/// Extracts the feature vector for `url`. Never fails.
pub fn extract(url: &str) -> FeatureVector {
    let (normalized, parsed) = parse_url(url);
    let domain = parsed.hostname.as_str();
    let mut computed: HashMap<&'static str, FeatureValue> = HashMap::with_capacity(FEATURE_COUNT);

    // URL level, over the normalized string
    computed.insert("url_length", char_len(&normalized).into());
    for (name, ch) in URL_CHAR_COUNTS {
        computed.insert(name, count_char(&normalized, ch).into());
    }
    computed.insert("having_repeated_digits_in_url", has_repeated_digit(&normalized).into());
    computed.insert("number_of_digits_in_url", count_digits(&normalized).into());
    computed.insert("number_of_special_char_in_url", count_special_chars(&normalized).into());
    computed.insert("entropy_of_url", shannon_entropy(&normalized).into());

    // Domain level; '.' and '-' are not special here
    let domain_specials = domain
        .chars()
        .filter(|&c| !(c.is_alphanumeric() || c == '.' || c == '-'))
        .count();
    let domain_digits = count_digits(domain);
    computed.insert("domain_length", char_len(domain).into());
    computed.insert("number_of_dots_in_domain", count_char(domain, '.').into());
    computed.insert("number_of_hyphens_in_domain", count_char(domain, '-').into());
    computed.insert("having_special_characters_in_domain", (domain_specials > 0).into());
    computed.insert("number_of_special_characters_in_domain", domain_specials.into());
    computed.insert("having_digits_in_domain", (domain_digits > 0).into());
    computed.insert("number_of_digits_in_domain", domain_digits.into());
    computed.insert("having_repeated_digits_in_domain", has_repeated_digit(domain).into());
    computed.insert("entropy_of_domain", shannon_entropy(domain).into());

    let sub = subdomain_stats(domain);
    computed.insert("number_of_subdomains", sub.count.into());
    computed.insert("having_dot_in_subdomain", sub.having_dot.into());
    computed.insert("having_hyphen_in_subdomain", sub.having_hyphen.into());
    computed.insert("average_subdomain_length", sub.average_length.into());
    computed.insert("average_number_of_dots_in_subdomain", sub.average_dots.into());
    computed.insert("average_number_of_hyphens_in_subdomain", sub.average_hyphens.into());
    computed.insert("having_special_characters_in_subdomain", sub.having_special.into());
    computed.insert("number_of_special_characters_in_subdomain", sub.special_count.into());
    computed.insert("having_digits_in_subdomain", sub.having_digits.into());
    computed.insert("number_of_digits_in_subdomain", sub.digit_count.into());
    computed.insert("having_repeated_digits_in_subdomain", sub.having_repeated_digits.into());

    // Structure. The fragment doubles as the anchor column.
    let has_fragment = !parsed.fragment.is_empty();
    computed.insert("having_path", (!parsed.path.is_empty() && parsed.path != "/").into());
    computed.insert("path_length", char_len(&parsed.path).into());
    computed.insert("having_query", (!parsed.query.is_empty()).into());
    computed.insert("having_fragment", has_fragment.into());
    computed.insert("having_anchor", has_fragment.into());

    FeatureVector::from_fn(|name| {
        computed
            .get(name)
            .copied()
            .unwrap_or(FeatureValue::Int(0))
    })
}
