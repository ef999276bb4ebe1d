//! Context rebuilding
//!
//! Turns whatever the user pasted or typed into the canonical context string:
//!
//! 1. Space runs collapse to a single space, leading spaces disappear.
//! 2. A fragment ending in `-` is joined with the next fragment and loses the hyphen,
//!    which undoes line-break hyphenation ("co- operation" -> "cooperation").
//! 3. A trailing space in the raw input is kept as one trailing space, so an editable
//!    field bound to the context can still receive the next word.
//!
//! Rebuilding an already rebuilt context returns it unchanged.

use super::pieces::fragments;

/// Rebuild the canonical context from raw input
pub fn rebuild_context(raw: &str) -> String {
    let mut context = String::with_capacity(raw.len());

    for (fragment, _) in fragments(raw) {
        if context.is_empty() {
            context.push_str(fragment);
        } else if context.ends_with('-') {
            context.pop();
            context.push_str(fragment);
        } else {
            context.push(' ');
            context.push_str(fragment);
        }
    }

    // Whitespace-only input stays empty
    if !context.is_empty() && raw.ends_with(' ') {
        context.push(' ');
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_spaces() {
        assert_eq!(rebuild_context("  these   were amicable "), "these were amicable ");
    }

    #[test]
    fn test_merges_hyphenated_fragments() {
        assert_eq!(rebuild_context("co- operation"), "cooperation");
        assert_eq!(rebuild_context("a well-   known fact"), "a wellknown fact");
        // Inner hyphens are not touched
        assert_eq!(rebuild_context("a well-known fact"), "a well-known fact");
    }

    #[test]
    fn test_chained_hyphens() {
        assert_eq!(rebuild_context("in- ter- na- tional"), "international");
    }

    #[test]
    fn test_lone_hyphen_fragment() {
        // "-" seeds the context and is then dropped when "word" arrives
        assert_eq!(rebuild_context("- word"), "word");
        assert_eq!(rebuild_context("one - two"), "one two");
    }

    #[test]
    fn test_hyphen_at_end_is_kept() {
        assert_eq!(rebuild_context("dash-"), "dash-");
        assert_eq!(rebuild_context("dash- "), "dash- ");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(rebuild_context(""), "");
        assert_eq!(rebuild_context(" "), "");
        assert_eq!(rebuild_context("    "), "");
    }
}
