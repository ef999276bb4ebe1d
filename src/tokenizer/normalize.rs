//! Word normalization
//!
//! A word is recorded in its letters-only form: every character outside `[A-Za-z]`
//! is removed, digits and non-ASCII letters included. Case is preserved.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z]").unwrap());

/// Strip every non-letter character from `origin`
pub fn normalize_word(origin: &str) -> String {
    NON_LETTER.replace_all(origin, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize_word("Hi,"), "Hi");
        assert_eq!(normalize_word("there."), "there");
        assert_eq!(normalize_word("\"quoted\""), "quoted");
    }

    #[test]
    fn test_strips_inner_symbols() {
        assert_eq!(normalize_word("well-known"), "wellknown");
        assert_eq!(normalize_word("don't"), "dont");
    }

    #[test]
    fn test_strips_digits_and_non_ascii() {
        assert_eq!(normalize_word("abc123"), "abc");
        assert_eq!(normalize_word("café"), "caf");
    }

    #[test]
    fn test_pure_punctuation_is_empty() {
        assert_eq!(normalize_word("--"), "");
        assert_eq!(normalize_word("..."), "");
    }
}
