//! The token-production engine and batch driver.
//!
//! `LexAnalyzer` owns a fixed `Config` plus two intern tables and classifies
//! one lexeme per `next_token` call. No automaton state is carried between
//! calls beyond the tables; the engine is re-entrant through the explicit
//! cursor argument, so scanning can resume at any valid boundary.

use log::debug;

use crate::lexer::classify::{is_digit, is_letter, is_whitespace, Matcher};
use crate::lexer::config::Config;
use crate::lexer::region::{find_opener, scan_region, starts_with};
use crate::lexer::token::{Token, TokenKind, TokenList};
use crate::utils::{LexError, Span};

/// Raw classification of one lexeme, before literal coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    Whitespace,
    Keyword,
    Identifier,
    Symbol,
    Comment,
    IntLiteral,
    StringLiteral,
    BoolLiteral,
    Error,
}

/// One classified lexeme: raw text, the advanced cursor, and any condition
/// detected while scanning it
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub diagnostic: Option<LexError>,
}

impl Lexeme {
    fn clean(kind: LexemeKind, text: String, start: usize, end: usize) -> Self {
        Self {
            kind,
            text,
            start,
            end,
            diagnostic: None,
        }
    }
}

/// The outcome of a batch scan: the token stream plus every diagnostic
/// recorded along the way.
///
/// Error lexemes stay in the stream as `Error`-kind tokens, so a caller can
/// either continue past them or halt on the first diagnostic via
/// [`ScanResult::into_result`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub tokens: TokenList,
    pub diagnostics: Vec<LexError>,
}

impl ScanResult {
    /// Check that the scan produced no diagnostics
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Halt-on-first-error view: the token list, or the first diagnostic
    pub fn into_result(self) -> Result<TokenList, LexError> {
        match self.diagnostics.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.tokens),
        }
    }
}

/// A configurable lexical analyzer.
///
/// The configuration is immutable after construction; the intern tables
/// grow monotonically across every scan this instance performs and are not
/// reset between scans. Callers needing isolation construct a fresh
/// instance.
pub struct LexAnalyzer {
    config: Config,
    matcher: Matcher,
    ident_table: Vec<String>,
    num_lit_table: Vec<String>,
}

impl LexAnalyzer {
    pub fn new(config: Config) -> Self {
        let matcher = Matcher::new(config.case_sensitive);
        Self {
            config,
            matcher,
            ident_table: Vec::new(),
            num_lit_table: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Interned identifiers, deduplicated, in first-seen order
    pub fn identifiers(&self) -> &[String] {
        &self.ident_table
    }

    /// Interned numeric literal spellings, deduplicated, in first-seen order
    pub fn numeric_literals(&self) -> &[String] {
        &self.num_lit_table
    }

    /// Look up candidate text in the keyword table, returning the configured
    /// canonical spelling rather than the input's
    fn keyword_for(&self, text: &str) -> Option<&str> {
        self.config
            .keywords
            .iter()
            .find(|kw| self.matcher.matches(text, kw))
            .map(|kw| kw.as_str())
    }

    /// First configured symbol matching the buffer at `at`, in declaration
    /// order. Empty markers are skipped.
    fn symbol_at(&self, src: &[char], at: usize) -> Option<&str> {
        self.config
            .symbols
            .iter()
            .find(|sym| starts_with(src, at, sym))
            .map(|sym| sym.as_str())
    }

    fn intern(table: &mut Vec<String>, text: &str) {
        if !table.iter().any(|t| t == text) {
            table.push(text.to_string());
        }
    }

    /// Classify the next lexeme at `cursor`.
    ///
    /// `cursor` must be a valid offset below `src.len()`. Every call
    /// advances the cursor by at least one unit, so repeated application
    /// terminates and partitions the input exactly.
    pub fn next_token(&mut self, src: &[char], cursor: usize) -> Lexeme {
        let c = src[cursor];

        // whitespace, one unit at a time
        if is_whitespace(c) {
            return Lexeme::clean(LexemeKind::Whitespace, c.to_string(), cursor, cursor + 1);
        }

        // a letter opens a keyword/identifier run, ended by the start of any
        // configured symbol or whitespace. A letter that is itself a symbol
        // marker yields an empty run and falls through.
        if is_letter(c) {
            let mut end = cursor;
            while end < src.len()
                && self.symbol_at(src, end).is_none()
                && !is_whitespace(src[end])
            {
                end += 1;
            }
            if end > cursor {
                let text: String = src[cursor..end].iter().collect();
                if let Some(kw) = self.keyword_for(&text) {
                    return Lexeme::clean(LexemeKind::Keyword, kw.to_string(), cursor, end);
                }
                if self.matcher.matches(&text, "true") || self.matcher.matches(&text, "false") {
                    return Lexeme::clean(LexemeKind::BoolLiteral, text, cursor, end);
                }
                Self::intern(&mut self.ident_table, &text);
                return Lexeme::clean(LexemeKind::Identifier, text, cursor, end);
            }
        }

        // comment region
        if let Some(pair) = find_opener(src, cursor, &self.config.comment_pairs) {
            return match scan_region(src, cursor, pair) {
                Ok(region) => {
                    Lexeme::clean(LexemeKind::Comment, region.interior, cursor, region.end)
                }
                Err(err) => self.runaway_region(src, cursor, pair.opener.chars().count(), err),
            };
        }

        // symbol, first match in declaration order
        if let Some(sym) = self.symbol_at(src, cursor) {
            let end = cursor + sym.chars().count();
            return Lexeme::clean(LexemeKind::Symbol, sym.to_string(), cursor, end);
        }

        // integer literal, a maximal digit run
        if is_digit(c) {
            let mut end = cursor;
            while end < src.len() && is_digit(src[end]) {
                end += 1;
            }
            let text: String = src[cursor..end].iter().collect();
            Self::intern(&mut self.num_lit_table, &text);
            return Lexeme::clean(LexemeKind::IntLiteral, text, cursor, end);
        }

        // string region
        if let Some(pair) = find_opener(src, cursor, &self.config.string_pairs) {
            return match scan_region(src, cursor, pair) {
                Ok(region) => Lexeme::clean(
                    LexemeKind::StringLiteral,
                    region.interior,
                    cursor,
                    region.end,
                ),
                Err(err) => self.runaway_region(src, cursor, pair.opener.chars().count(), err),
            };
        }

        // nothing applies; one error unit keeps the cursor moving
        Lexeme {
            kind: LexemeKind::Error,
            text: c.to_string(),
            start: cursor,
            end: cursor + 1,
            diagnostic: Some(LexError::UnrecognizedCharacter { ch: c, at: cursor }),
        }
    }

    /// An unterminated region becomes one Error lexeme covering the rest of
    /// the input, so the scan still terminates at the buffer's end
    fn runaway_region(
        &self,
        src: &[char],
        cursor: usize,
        opener_len: usize,
        err: LexError,
    ) -> Lexeme {
        let text: String = src[cursor + opener_len..].iter().collect();
        Lexeme {
            kind: LexemeKind::Error,
            text,
            start: cursor,
            end: src.len(),
            diagnostic: Some(err),
        }
    }

    /// Tokenize the entire input, coercing literal lexemes to typed values.
    ///
    /// Cursors across the scan are strictly increasing from 0 and the last
    /// token ends exactly at the input's length.
    pub fn tokenize(&mut self, input: &str) -> ScanResult {
        let src: Vec<char> = input.chars().collect();
        let mut tokens = Vec::new();
        let mut diagnostics = Vec::new();
        let mut cursor = 0;

        while cursor < src.len() {
            let lexeme = self.next_token(&src, cursor);
            debug_assert!(lexeme.end > cursor);
            cursor = lexeme.end;
            if let Some(diag) = &lexeme.diagnostic {
                diagnostics.push(diag.clone());
            }
            tokens.push(coerce(lexeme, &mut diagnostics));
        }

        debug!(
            "scanned {} tokens ({} diagnostics) from {} units",
            tokens.len(),
            diagnostics.len(),
            src.len()
        );
        ScanResult {
            tokens: TokenList::from(tokens),
            diagnostics,
        }
    }
}

/// Convert a raw lexeme into a token, parsing literal text into its typed
/// value. A literal that fails to parse surfaces as `LiteralCoercion` and an
/// Error token, never a silent zero.
fn coerce(lexeme: Lexeme, diagnostics: &mut Vec<LexError>) -> Token {
    let span = Span::new(lexeme.start, lexeme.end);
    let Lexeme {
        kind, text, start, ..
    } = lexeme;
    let kind = match kind {
        LexemeKind::Whitespace => TokenKind::Whitespace(text),
        LexemeKind::Keyword => TokenKind::Keyword(text),
        LexemeKind::Identifier => TokenKind::Identifier(text),
        LexemeKind::Symbol => TokenKind::Symbol(text),
        LexemeKind::Comment => TokenKind::Comment(text),
        LexemeKind::StringLiteral => TokenKind::StringLiteral(text),
        LexemeKind::Error => TokenKind::Error(text),
        LexemeKind::IntLiteral => match text.parse::<i64>() {
            Ok(value) => TokenKind::IntLiteral(value),
            Err(_) => {
                diagnostics.push(LexError::LiteralCoercion {
                    text: text.clone(),
                    at: start,
                });
                TokenKind::Error(text)
            }
        },
        LexemeKind::BoolLiteral => match text.to_ascii_lowercase().parse::<bool>() {
            Ok(value) => TokenKind::BoolLiteral(value),
            Err(_) => {
                diagnostics.push(LexError::LiteralCoercion {
                    text: text.clone(),
                    at: start,
                });
                TokenKind::Error(text)
            }
        },
    };
    Token::new(kind, span)
}
