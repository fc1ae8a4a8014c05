//! Locale-tolerant string ordering and matching for person names.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary comparison key: accents stripped, lowercased
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Compare names the way people expect in a list: accents and case only
/// break ties, and the raw text decides last so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Case-insensitive substring match; a blank needle matches everything
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
