//! Analyzer configuration.
//!
//! A `Config` is fixed at analyzer construction and covers every variation
//! point of the engine: the symbol and keyword tables, the delimiter pairs
//! for strings and comments, and the keyword case policy. Configurations
//! are serde-derived so they can be loaded from JSON.

use serde::{Deserialize, Serialize};

/// An opener/closer marker pair delimiting a region (comment or string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPair {
    /// Literal text that opens the region
    pub opener: String,
    /// Literal text that closes the region
    pub closer: String,
}

impl DelimiterPair {
    pub fn new(opener: &str, closer: &str) -> Self {
        Self {
            opener: opener.to_string(),
            closer: closer.to_string(),
        }
    }
}

/// Lexer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ordered symbol markers.
    ///
    /// Declaration order is the match priority: the recognizer takes the
    /// first marker that matches, not the longest. A marker that extends
    /// another (`"=="` vs `"="`) must be listed before its prefix, or the
    /// longer marker will never be recognized.
    pub symbols: Vec<String>,
    /// Canonical keyword spellings, matched under the case policy
    pub keywords: Vec<String>,
    /// Delimiter pairs for string-literal regions, matched in order
    pub string_pairs: Vec<DelimiterPair>,
    /// Delimiter pairs for comment regions, matched in order
    pub comment_pairs: Vec<DelimiterPair>,
    /// Verbatim vs case-normalized keyword comparison
    pub case_sensitive: bool,
}

impl Config {
    /// Configuration for the small imperative language: case-insensitive
    /// keywords, `#`-to-newline comments, double-quoted strings.
    ///
    /// Note that `"="` precedes `"=="` in the symbol table, so `"=="` lexes
    /// as two `=` symbols under this preset. The ordering is kept as the
    /// language defined it.
    pub fn imperative() -> Self {
        Self {
            symbols: [
                ".", ";", "=", ",", "(", ")", "==", "||", "&&", "!", "/", "*", "-", "+", "<<",
                ">>", "=<", "=>", "<", ">", "!=",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            keywords: [
                "int", "void", "print", "println", "function", "program", "true", "false", "if",
                "else", "begin", "end", "while", "return", "boolean", "null",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            string_pairs: vec![DelimiterPair::new("\"", "\"")],
            comment_pairs: vec![DelimiterPair::new("#", "\n")],
            case_sensitive: false,
        }
    }

    /// Keyword-free configuration for bare expressions. Here the compound
    /// markers come first, so `"=="` is a single symbol.
    pub fn expression() -> Self {
        Self {
            symbols: [
                "&&", "||", "=<", "=>", "==", "!=", "<", ">", "/", "*", "-", "+", "(", ")", "!",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            keywords: vec![],
            string_pairs: vec![DelimiterPair::new("\"", "\"")],
            comment_pairs: vec![DelimiterPair::new("#", "\n")],
            case_sensitive: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_imperative_preset() {
        let config = Config::imperative();
        assert!(config.keywords.iter().any(|k| k == "function"));
        assert!(config.symbols.iter().any(|s| s == "!="));
        assert!(!config.case_sensitive);
        assert_eq!(config.comment_pairs[0], DelimiterPair::new("#", "\n"));
    }

    #[test]
    fn test_expression_preset() {
        let config = Config::expression();
        assert!(config.keywords.is_empty());
        assert_eq!(config.symbols[0], "&&");
        assert!(config.case_sensitive);
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::imperative();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_json_surface() {
        let json = r##"{
            "symbols": ["==", "="],
            "keywords": ["if"],
            "string_pairs": [{"opener": "\"", "closer": "\""}],
            "comment_pairs": [{"opener": "#", "closer": "\n"}],
            "case_sensitive": false
        }"##;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.symbols, vec!["==", "="]);
        assert_eq!(config.keywords, vec!["if"]);
    }
}
