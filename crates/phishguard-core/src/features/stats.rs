//! Character-level string statistics shared by the URL, domain and
//! subdomain feature groups.

use std::collections::BTreeMap;

/// Length in Unicode scalar values.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Number of occurrences of `ch` in `s`.
pub fn count_char(s: &str, ch: char) -> usize {
    s.chars().filter(|&c| c == ch).count()
}

/// Number of numeric characters.
///
/// Unicode-aware: Arabic-Indic `٣` and superscript `²` count alongside
/// ASCII digits. `char::is_numeric` also admits letter numbers and
/// fractions such as `Ⅻ` and `½`, which a strict `Nd` test would skip.
pub fn count_digits(s: &str) -> usize {
    s.chars().filter(|c| c.is_numeric()).count()
}

/// Number of characters that are not alphanumeric.
///
/// Alphanumeric is `char::is_alphanumeric`, i.e. the `Alphabetic` or
/// `Numeric` property. Combining marks carrying `Other_Alphabetic`, such as
/// the Devanagari vowel sign `\u{093E}`, therefore count as alphanumeric and
/// not as special, even though their general category is `Mc`.
pub fn count_special_chars(s: &str) -> usize {
    s.chars().filter(|c| !c.is_alphanumeric()).count()
}

/// True iff some numeric character occurs more than once anywhere in `s`.
///
/// `"a1b2a3"` has no repeat; `"a1b1"` repeats `1`. Positions do not matter,
/// so `"1x2x1"` also counts. Characters are compared as written: `"3٣"` is
/// two different digits even though both have the value three.
pub fn has_repeated_digit(s: &str) -> bool {
    let mut seen: BTreeMap<char, u32> = BTreeMap::new();
    for c in s.chars().filter(|c| c.is_numeric()) {
        let n = seen.entry(c).or_insert(0);
        *n += 1;
        if *n > 1 {
            return true;
        }
    }
    false
}

/// Shannon entropy in bits of the character-frequency distribution.
///
/// Returns 0.0 for the empty string and for single-symbol strings.
pub fn shannon_entropy(s: &str) -> f64 {
    // BTreeMap keeps the summation order, and therefore the result, stable.
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut len = 0usize;
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
        len += 1;
    }
    if len == 0 {
        return 0.0;
    }
    let total = len as f64;
    let mut entropy = 0.0f64;
    for &freq in counts.values() {
        let p = freq as f64 / total;
        entropy -= p * p.log2();
    }
    // -0.0 for single-symbol input
    entropy.abs()
}
