//! Base splitting of raw text into space-separated pieces
//!
//! This is the only place that looks at raw input character by character. It uses
//! the logos lexer library and produces pieces paired with their byte spans. Only the
//! plain space character separates pieces; tabs and newlines are part of a fragment.

use logos::Logos;

/// A piece of raw text
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Piece {
    // A single separator. Runs of spaces produce one Space piece each.
    #[token(" ")]
    Space,

    // Everything between separators
    #[regex(r"[^ ]+")]
    Fragment,
}

impl Piece {
    pub fn is_fragment(&self) -> bool {
        matches!(self, Piece::Fragment)
    }
}

/// Split source text into pieces with location information
pub fn split_pieces(source: &str) -> Vec<(Piece, logos::Span)> {
    let mut lexer = Piece::lexer(source);
    let mut pieces = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(piece) = result {
            pieces.push((piece, lexer.span()));
        }
    }

    pieces
}

/// Non-empty fragments of `source`, in order, with their byte spans
///
/// Zero-length fragments produced by consecutive spaces never show up here.
pub fn fragments(source: &str) -> impl Iterator<Item = (&str, logos::Span)> + '_ {
    split_pieces(source)
        .into_iter()
        .filter(|(piece, _)| piece.is_fragment())
        .map(move |(_, span)| (&source[span.clone()], span))
}
