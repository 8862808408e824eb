//! lexkit - a configurable lexical analyzer
//!
//! Converts raw source text into an ordered sequence of classified tokens
//! for a small imperative language. The engine is driven entirely by a
//! [`Config`]: symbol and keyword tables, string and comment delimiter
//! pairs, and the keyword case policy.
//!
//! ```
//! use lexkit::{Config, LexAnalyzer};
//!
//! let mut analyzer = LexAnalyzer::new(Config::imperative());
//! let result = analyzer.tokenize("int x = 5;");
//! assert!(result.is_clean());
//! assert_eq!(result.tokens.len(), 8);
//! ```

pub mod lexer;
pub mod utils;

pub use lexer::analyzer::{LexAnalyzer, Lexeme, LexemeKind, ScanResult};
pub use lexer::config::{Config, DelimiterPair};
pub use lexer::token::{Token, TokenKind, TokenList};
pub use utils::{LexError, Span};
