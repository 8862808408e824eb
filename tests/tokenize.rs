//! End-to-end tokenization tests over small imperative programs.

use lexkit::{Config, DelimiterPair, LexAnalyzer, LexError, TokenKind};
use pretty_assertions::assert_eq;

#[test]
fn tokenizes_a_small_program() {
    let source = "\
function main\nbegin\n  int count = 0;\n  # loop until done\n  while count < 3\n  begin\n    println(\"tick\");\n    count = count + 1;\n  end\nend\n";

    let mut analyzer = LexAnalyzer::new(Config::imperative());
    let result = analyzer.tokenize(source);
    assert!(result.is_clean());

    let significant: Vec<TokenKind> = result
        .tokens
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| t.kind.clone())
        .collect();

    assert_eq!(
        significant,
        vec![
            TokenKind::Keyword("function".to_string()),
            TokenKind::Identifier("main".to_string()),
            TokenKind::Keyword("begin".to_string()),
            TokenKind::Keyword("int".to_string()),
            TokenKind::Identifier("count".to_string()),
            TokenKind::Symbol("=".to_string()),
            TokenKind::IntLiteral(0),
            TokenKind::Symbol(";".to_string()),
            TokenKind::Keyword("while".to_string()),
            TokenKind::Identifier("count".to_string()),
            TokenKind::Symbol("<".to_string()),
            TokenKind::IntLiteral(3),
            TokenKind::Keyword("begin".to_string()),
            TokenKind::Keyword("println".to_string()),
            TokenKind::Symbol("(".to_string()),
            TokenKind::StringLiteral("tick".to_string()),
            TokenKind::Symbol(")".to_string()),
            TokenKind::Symbol(";".to_string()),
            TokenKind::Identifier("count".to_string()),
            TokenKind::Symbol("=".to_string()),
            TokenKind::Identifier("count".to_string()),
            TokenKind::Symbol("+".to_string()),
            TokenKind::IntLiteral(1),
            TokenKind::Symbol(";".to_string()),
            TokenKind::Keyword("end".to_string()),
            TokenKind::Keyword("end".to_string()),
        ]
    );

    assert_eq!(analyzer.identifiers(), ["main", "count"]);
    assert_eq!(analyzer.numeric_literals(), ["0", "3", "1"]);
}

#[test]
fn parser_style_consumption() {
    let mut analyzer = LexAnalyzer::new(Config::imperative());
    let mut tokens = analyzer.tokenize("if x end").into_result().unwrap();

    assert_eq!(
        tokens.peek().unwrap().kind,
        TokenKind::Keyword("if".to_string())
    );
    let mut popped = 0;
    while tokens.has_more() {
        tokens.pop();
        popped += 1;
    }
    assert_eq!(popped, 5);
}

#[test]
fn diagnostics_do_not_stop_the_scan() {
    let mut analyzer = LexAnalyzer::new(Config::imperative());
    let result = analyzer.tokenize("x @ y $ z");

    assert_eq!(
        result.diagnostics,
        vec![
            LexError::UnrecognizedCharacter { ch: '@', at: 2 },
            LexError::UnrecognizedCharacter { ch: '$', at: 6 },
        ]
    );
    // every error unit is carried in the stream and scanning continued
    assert_eq!(result.tokens.len(), 9);
    assert_eq!(analyzer.identifiers(), ["x", "y", "z"]);
}

#[test]
fn custom_delimiters_from_json() {
    let json = r#"{
        "symbols": ["==", "=", ";"],
        "keywords": ["let"],
        "string_pairs": [{"opener": "'", "closer": "'"}],
        "comment_pairs": [{"opener": "//", "closer": "\n"}],
        "case_sensitive": true
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.comment_pairs, vec![DelimiterPair::new("//", "\n")]);

    let mut analyzer = LexAnalyzer::new(config);
    let result = analyzer.tokenize("let s = 'ok'; // done\n");
    assert!(result.is_clean());

    let significant: Vec<TokenKind> = result
        .tokens
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| t.kind.clone())
        .collect();
    assert_eq!(
        significant,
        vec![
            TokenKind::Keyword("let".to_string()),
            TokenKind::Identifier("s".to_string()),
            TokenKind::Symbol("=".to_string()),
            TokenKind::StringLiteral("ok".to_string()),
            TokenKind::Symbol(";".to_string()),
        ]
    );
}
