//! Subdomain label statistics.
//!
//! The last two dot-separated labels are taken to be the registrable domain
//! and TLD; everything before them is a subdomain label. This misreads
//! multi-part public suffixes such as `.co.uk`, and the trained model
//! depends on exactly that behavior.

use super::stats::{char_len, count_char, count_digits, count_special_chars, has_repeated_digit};

/// Aggregate statistics over the subdomain labels of a hostname.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubdomainStats {
    pub count: usize,
    /// Always false under a split on `.`; kept because the model has the column.
    pub having_dot: bool,
    pub having_hyphen: bool,
    pub average_length: f64,
    pub average_dots: f64,
    pub average_hyphens: f64,
    pub having_special: bool,
    pub special_count: usize,
    pub having_digits: bool,
    pub digit_count: usize,
    pub having_repeated_digits: bool,
}

/// Returns the subdomain labels of `hostname` (all but the last two labels).
pub fn subdomain_labels(hostname: &str) -> Vec<&str> {
    if hostname.is_empty() {
        return Vec::new();
    }
    let parts: Vec<&str> = hostname.split('.').collect();
    if parts.len() <= 2 {
        return Vec::new();
    }
    parts[..parts.len() - 2].to_vec()
}

/// Computes [`SubdomainStats`]; all zero when there are no subdomain labels.
pub fn subdomain_stats(hostname: &str) -> SubdomainStats {
    let labels = subdomain_labels(hostname);
    if labels.is_empty() {
        return SubdomainStats::default();
    }
    let n = labels.len() as f64;

    let mut stats = SubdomainStats {
        count: labels.len(),
        ..SubdomainStats::default()
    };
    let mut total_len = 0usize;
    let mut total_dots = 0usize;
    let mut total_hyphens = 0usize;

    for label in &labels {
        let dots = count_char(label, '.');
        let hyphens = count_char(label, '-');
        let specials = count_special_chars(label);
        let digits = count_digits(label);

        total_len += char_len(label);
        total_dots += dots;
        total_hyphens += hyphens;
        stats.having_dot |= dots > 0;
        stats.having_hyphen |= hyphens > 0;
        stats.having_special |= specials > 0;
        stats.special_count += specials;
        stats.having_digits |= digits > 0;
        stats.digit_count += digits;
        stats.having_repeated_digits |= has_repeated_digit(label);
    }

    stats.average_length = total_len as f64 / n;
    stats.average_dots = total_dots as f64 / n;
    stats.average_hyphens = total_hyphens as f64 / n;
    stats
}
