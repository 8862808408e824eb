//! Error handling for lexkit

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, LexError>;

/// A per-token scan condition.
///
/// All variants are local to a single lexeme. The batch driver records them
/// as diagnostics and keeps scanning, so callers decide whether to halt on
/// the first one or collect them all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("region opened by `{opener}` at offset {at} has no closing `{closer}` before end of input")]
    UnterminatedRegion {
        opener: String,
        closer: String,
        at: usize,
    },

    #[error("unrecognized character `{ch}` at offset {at}")]
    UnrecognizedCharacter { ch: char, at: usize },

    #[error("literal `{text}` at offset {at} does not parse as its classified type")]
    LiteralCoercion { text: String, at: usize },
}

impl LexError {
    /// Get the offset where this condition was detected
    pub fn at(&self) -> usize {
        match self {
            Self::UnterminatedRegion { at, .. } => *at,
            Self::UnrecognizedCharacter { at, .. } => *at,
            Self::LiteralCoercion { at, .. } => *at,
        }
    }
}
