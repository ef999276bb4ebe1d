//! Tokenizer behavior on whole passages
//!
//! Case tables for the documented edge cases, property-based tests for the
//! invariants that must hold on any input.

use proptest::prelude::*;
use rstest::rstest;
use wordcard::tokenizer::tokenize;

fn texts(raw: &str) -> Vec<String> {
    tokenize(raw).tokens.into_iter().map(|t| t.text).collect()
}

#[rstest]
#[case("", "")]
#[case("  ", "")]
#[case("hello world", "hello world")]
#[case("hello   world", "hello world")]
#[case("   leading", "leading")]
#[case("trailing ", "trailing ")]
#[case("trailing    ", "trailing ")]
#[case("co- operation", "cooperation")]
#[case("co-    operation", "cooperation")]
#[case("well-known", "well-known")]
#[case("Hi, there.", "Hi, there.")]
fn test_context_rebuilding(#[case] raw: &str, #[case] context: &str) {
    assert_eq!(tokenize(raw).context, context);
}

#[rstest]
#[case("", &[])]
#[case("  ", &[])]
#[case("hello world", &["hello", "world"])]
#[case("co- operation", &["cooperation"])]
#[case("Hi, there.", &["Hi", "there"])]
#[case("It's 42 degrees!", &["Its", "", "degrees"])]
#[case("\"Quoted\" (aside)", &["Quoted", "aside"])]
fn test_token_texts(#[case] raw: &str, #[case] expected: &[&str]) {
    assert_eq!(texts(raw), expected);
}

#[test]
fn test_token_listing() {
    let tokenized = tokenize("these were   amic- able, examples ");
    let listing: Vec<String> = tokenized
        .tokens
        .iter()
        .map(|t| format!("{} {:?} {:?} {:?}", t.position, t.origin, t.text, t.span))
        .collect();

    insta::assert_snapshot!(listing.join("\n"), @r###"
    0 "these" "these" 0..5
    1 "were" "were" 6..10
    2 "amicable," "amicable" 11..20
    3 "examples" "examples" 21..29
    "###);
    assert_eq!(tokenized.context, "these were amicable, examples ");
}

/// Property-based tests for the tokenizer
#[cfg(test)]
mod proptest_tests {
    use super::*;

    /// Passages built from letters, digits, punctuation, hyphens and space runs
    fn passage_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                // Plain word
                "[a-zA-Z]{1,8}",
                // Word with punctuation
                "[a-zA-Z]{1,8}[.,!?;:]",
                // Hyphen-broken word
                "[a-zA-Z]{1,6}-",
                // Symbols only
                "[-.,!?0-9]{1,3}",
                // Space runs
                " {1,4}",
            ],
            0..12,
        )
        .prop_map(|pieces| pieces.concat())
    }

    proptest! {
        #[test]
        fn rebuilding_is_idempotent(raw in passage_strategy()) {
            let once = tokenize(&raw);
            let twice = tokenize(&once.context);
            prop_assert_eq!(&twice.context, &once.context);
            prop_assert_eq!(twice.tokens, once.tokens);
        }

        #[test]
        fn token_text_is_letters_only(raw in passage_strategy()) {
            for token in tokenize(&raw).tokens {
                prop_assert!(token.text.chars().all(|c| c.is_ascii_alphabetic()));
            }
        }

        #[test]
        fn context_is_single_spaced(raw in passage_strategy()) {
            let context = tokenize(&raw).context;
            prop_assert!(!context.starts_with(' '));
            prop_assert!(!context.contains("  "));
            // A hyphen may only precede the trailing space
            prop_assert!(!context.trim_end().contains("- "), "unmerged hyphen in {:?}", context);
        }

        #[test]
        fn tokens_cover_context_pieces(raw in passage_strategy()) {
            let tokenized = tokenize(&raw);
            let pieces: Vec<&str> = tokenized.context.split(' ').filter(|p| !p.is_empty()).collect();
            prop_assert_eq!(tokenized.tokens.len(), pieces.len());
            for (token, piece) in tokenized.tokens.iter().zip(pieces) {
                prop_assert_eq!(token.origin.as_str(), piece);
                prop_assert_eq!(&tokenized.context[token.span.clone()], piece);
            }
        }

        #[test]
        fn trailing_space_survives_only_with_content(raw in passage_strategy()) {
            let tokenized = tokenize(&raw);
            let expect_trailing = raw.ends_with(' ') && !tokenized.context.trim().is_empty();
            prop_assert_eq!(tokenized.context.ends_with(' '), expect_trailing);
        }
    }
}
