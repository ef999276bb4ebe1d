//! Tokenizer
//!
//! Converts a raw passage into the canonical context and the ordered list of words a
//! user can pick from.
//!
//! The pipeline consists of:
//! 1. Base splitting using the logos lexer ./tokenizer/pieces.rs
//! 2. Context rebuilding (space collapsing, hyphen merging) ./tokenizer/context.rs
//! 3. Token extraction from the rebuilt context, one token per space-separated piece
//! 4. Letters-only normalization of every token ./tokenizer/normalize.rs
//!
//! Tokenization never fails. Empty or whitespace-only input yields an empty context
//! and no tokens. A piece made only of punctuation still yields a token, with empty
//! `text`; such a token is shown but can't be recorded (see [`Token::is_recordable`]).

pub mod context;
pub mod normalize;
pub mod pieces;

pub use context::rebuild_context;
pub use normalize::normalize_word;

use crate::model::Record;
use serde::Serialize;
use std::ops::Range;

/// A single word extracted from a context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Letters-only form of `origin`
    pub text: String,
    /// The piece of the rebuilt context this token came from
    pub origin: String,
    /// Ordinal index of the token within the context
    pub position: usize,
    /// Byte range of `origin` within the rebuilt context
    pub span: Range<usize>,
}

impl Token {
    /// Whether this token has anything left to record after normalization
    pub fn is_recordable(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Output of [`tokenize`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tokenized {
    /// The rebuilt context, possibly ending in a single space
    pub context: String,
    pub tokens: Vec<Token>,
}

impl Tokenized {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The context as it should be stored alongside a word
    ///
    /// The trailing space kept for editing purposes is dropped.
    pub fn record_context(&self) -> &str {
        self.context.trim_end_matches(' ')
    }

    /// Build the record for the token at `index`
    ///
    /// Returns None when the index is out of range or the token is not recordable.
    pub fn record(&self, index: usize) -> Option<Record> {
        let token = self.tokens.get(index)?;
        if !token.is_recordable() {
            return None;
        }
        Some(Record::new(token.text.clone(), self.record_context()))
    }
}

/// Tokenize raw input into the rebuilt context and its tokens
pub fn tokenize(raw: &str) -> Tokenized {
    let context = rebuild_context(raw);
    let tokens = extract_tokens(&context);
    Tokenized { context, tokens }
}

/// Split a rebuilt context into normalized tokens
pub fn extract_tokens(context: &str) -> Vec<Token> {
    pieces::fragments(context)
        .enumerate()
        .map(|(position, (origin, span))| Token {
            text: normalize_word(origin),
            origin: origin.to_string(),
            position,
            span,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenized: &Tokenized) -> Vec<&str> {
        tokenized.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), Tokenized::default());
        assert_eq!(tokenize("  "), Tokenized::default());
    }

    #[test]
    fn test_simple_sentence() {
        let result = tokenize("hello world");
        assert_eq!(result.context, "hello world");
        assert_eq!(
            result.tokens,
            vec![
                Token {
                    text: "hello".to_string(),
                    origin: "hello".to_string(),
                    position: 0,
                    span: 0..5,
                },
                Token {
                    text: "world".to_string(),
                    origin: "world".to_string(),
                    position: 1,
                    span: 6..11,
                },
            ]
        );
    }

    #[test]
    fn test_hyphen_merge_yields_single_token() {
        let result = tokenize("co- operation");
        assert_eq!(result.context, "cooperation");
        assert_eq!(texts(&result), vec!["cooperation"]);
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let result = tokenize("Hi, there.");
        assert_eq!(texts(&result), vec!["Hi", "there"]);
        assert_eq!(result.tokens[0].origin, "Hi,");
    }

    #[test]
    fn test_trailing_space_does_not_add_a_token() {
        let result = tokenize("hello ");
        assert_eq!(result.context, "hello ");
        assert_eq!(texts(&result), vec!["hello"]);
    }

    #[test]
    fn test_punctuation_only_token_is_kept_but_not_recordable() {
        let result = tokenize("wait ... what");
        assert_eq!(texts(&result), vec!["wait", "", "what"]);
        assert!(!result.tokens[1].is_recordable());
        assert_eq!(result.record(1), None);
    }

    #[test]
    fn test_record_uses_trimmed_context() {
        let result = tokenize("these were amicable examples ");
        let record = result.record(2).unwrap();
        assert_eq!(record.word, "amicable");
        assert_eq!(record.context, "these were amicable examples");
    }

    #[test]
    fn test_record_out_of_range() {
        assert_eq!(tokenize("one").record(3), None);
    }
}
