//! Token definitions for lexkit

use std::collections::VecDeque;
use std::fmt;

use crate::utils::Span;

/// A token produced by the analyzer
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}..{}", self.kind, self.span.start, self.span.end)
    }
}

/// Token kinds.
///
/// The interpreted value lives inside the variant, so a token can never
/// carry a value inconsistent with its kind and consumers matching on it
/// get exhaustiveness checking.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A single whitespace unit
    Whitespace(String),
    /// A keyword, in its configured canonical spelling
    Keyword(String),
    /// An identifier
    Identifier(String),
    /// A symbol marker, verbatim
    Symbol(String),
    /// Interior text of a comment region
    Comment(String),
    /// Integer literal
    IntLiteral(i64),
    /// Interior text of a string region
    StringLiteral(String),
    /// Boolean literal
    BoolLiteral(bool),
    /// Text that failed classification or coercion
    Error(String),
}

impl TokenKind {
    /// Name of the kind, without its value
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace(_) => "Whitespace",
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::Identifier(_) => "Identifier",
            TokenKind::Symbol(_) => "Symbol",
            TokenKind::Comment(_) => "Comment",
            TokenKind::IntLiteral(_) => "IntLiteral",
            TokenKind::StringLiteral(_) => "StringLiteral",
            TokenKind::BoolLiteral(_) => "BoolLiteral",
            TokenKind::Error(_) => "Error",
        }
    }

    /// Check if this token carries no meaning for a parser
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace(_) | TokenKind::Comment(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Whitespace(s)
            | TokenKind::Keyword(s)
            | TokenKind::Identifier(s)
            | TokenKind::Symbol(s)
            | TokenKind::Comment(s)
            | TokenKind::StringLiteral(s)
            | TokenKind::Error(s) => {
                write!(f, "{}({})", self.name(), s.escape_debug())
            }
            TokenKind::IntLiteral(v) => write!(f, "IntLiteral({})", v),
            TokenKind::BoolLiteral(v) => write!(f, "BoolLiteral({})", v),
        }
    }
}

/// An ordered token sequence consumed destructively from the front.
///
/// Once built from a full scan it is immutable except for front removal,
/// which is the access pattern a parser needs: peek, pop, has-more.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenList {
    tokens: VecDeque<Token>,
}

impl TokenList {
    /// Look at the front token without removing it
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Remove and return the front token
    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Check whether any tokens remain
    pub fn has_more(&self) -> bool {
        !self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::collections::vec_deque::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenList {
        TokenList::from(vec![
            Token::new(TokenKind::Keyword("if".to_string()), Span::new(0, 2)),
            Token::new(TokenKind::Whitespace(" ".to_string()), Span::new(2, 3)),
            Token::new(TokenKind::Identifier("x".to_string()), Span::new(3, 4)),
        ])
    }

    #[test]
    fn test_front_consumption() {
        let mut list = sample();
        assert_eq!(list.len(), 3);
        assert_eq!(
            list.peek().unwrap().kind,
            TokenKind::Keyword("if".to_string())
        );
        // peek does not remove
        assert_eq!(list.len(), 3);

        let first = list.pop().unwrap();
        assert_eq!(first.kind, TokenKind::Keyword("if".to_string()));
        assert_eq!(list.len(), 2);

        list.pop();
        list.pop();
        assert!(!list.has_more());
        assert!(list.pop().is_none());
    }

    #[test]
    fn test_trivia() {
        assert!(TokenKind::Whitespace(" ".to_string()).is_trivia());
        assert!(TokenKind::Comment("c".to_string()).is_trivia());
        assert!(!TokenKind::IntLiteral(5).is_trivia());
    }

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::Symbol("==".to_string()), Span::new(4, 6));
        assert_eq!(token.to_string(), "Symbol(==) @ 4..6");
        assert_eq!(TokenKind::IntLiteral(42).to_string(), "IntLiteral(42)");
        assert_eq!(
            TokenKind::Comment(" hi".to_string()).to_string(),
            "Comment( hi)"
        );
    }
}
