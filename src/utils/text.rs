//! Prefix removal and length trimming.

use std::borrow::Cow;

/// Remove `remove` from `from` when `from` starts with it.
///
/// Once the prefix matches, every occurrence of `remove` is deleted, not just
/// the leading one: `remove_first("ab", "abcab")` is `"c"`.
pub fn remove_first<'a>(remove: &str, from: &'a str) -> Cow<'a, str> {
    if !remove.is_empty() && from.starts_with(remove) {
        Cow::Owned(from.replace(remove, ""))
    } else {
        Cow::Borrowed(from)
    }
}

/// First `len` characters of `text`, or all of it when shorter.
pub fn trim_length(text: &str, len: usize) -> &str {
    match text.char_indices().nth(len) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_first_strips_prefix() {
        assert_eq!(remove_first("plugins/", "plugins/data.yml"), "data.yml");
    }

    #[test]
    fn remove_first_strips_every_occurrence_once_prefixed() {
        assert_eq!(remove_first("ab", "abcab"), "c");
    }

    #[test]
    fn remove_first_without_prefix_is_unchanged() {
        assert!(matches!(remove_first("x", "abcx"), Cow::Borrowed("abcx")));
        assert_eq!(remove_first("", "abc"), "abc");
    }

    #[test]
    fn trim_length_cuts_long_text() {
        assert_eq!(trim_length("abcdef", 3), "abc");
        assert_eq!(trim_length("abc", 0), "");
    }

    #[test]
    fn trim_length_keeps_short_text() {
        assert_eq!(trim_length("abc", 3), "abc");
        assert_eq!(trim_length("abc", 10), "abc");
    }

    #[test]
    fn trim_length_counts_chars() {
        assert_eq!(trim_length("§a§b", 2), "§a");
    }
}
