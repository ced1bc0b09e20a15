use crate::{lex, LexerConfig};
use axion_ir::{Keyword, Operator, Position, Span, Token, TokenKind};
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> Vec<Token> {
    let mut output = lex(source, &LexerConfig::default()).unwrap_or_default();
    output.tokens.pop();
    output.tokens
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokens(source).iter().map(|t| t.kind).collect()
}

// === Classification ===

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        kinds("while done true"),
        vec![
            TokenKind::Keyword(Keyword::While),
            TokenKind::Identifier,
            TokenKind::Keyword(Keyword::True),
        ]
    );
}

#[test]
fn unicode_identifiers() {
    let tokens = tokens("λx _private");
    assert_eq!(tokens[0].text, "λx");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "_private");
}

#[test]
fn word_operators() {
    assert_eq!(
        kinds("a and b or not c as d"),
        vec![
            TokenKind::Identifier,
            TokenKind::Operator(Operator::And),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::Or),
            TokenKind::Operator(Operator::Not),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::As),
            TokenKind::Identifier,
        ]
    );
}

// === Restricted endings ===

#[test]
fn kebab_case_is_one_word() {
    let tokens = tokens("on-change");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "on-change");
}

#[test]
fn trailing_dash_is_given_back() {
    assert_eq!(
        kinds("x- y"),
        vec![
            TokenKind::Identifier,
            TokenKind::Operator(Operator::Minus),
            TokenKind::Identifier,
        ]
    );
    let tokens = tokens("a--");
    assert_eq!(tokens[0].text, "a");
    assert_eq!(tokens[1].kind, TokenKind::Operator(Operator::Decrement));
    assert_eq!(tokens[1].span.start, Position::new(0, 1));
}

// === Compound operators ===

#[test]
fn is_not_merges() {
    let tokens = tokens("is not");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Operator(Operator::IsNot));
    assert_eq!(tokens[0].text, "is not");
    assert_eq!(tokens[0].trailing_whitespace, "");
    assert_eq!(
        tokens[0].span,
        Span::new(Position::START, Position::new(0, 6))
    );
}

#[test]
fn not_in_merges() {
    assert_eq!(
        kinds("x not in y"),
        vec![
            TokenKind::Identifier,
            TokenKind::Operator(Operator::NotIn),
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn merge_keeps_the_gap() {
    let tokens = tokens("a is   not b");
    assert_eq!(tokens[1].text, "is   not");
    assert_eq!(tokens[1].trailing_whitespace, " ");
}

#[test]
fn unrelated_pairs_stay_apart() {
    assert_eq!(
        kinds("not is in"),
        vec![
            TokenKind::Operator(Operator::Not),
            TokenKind::Operator(Operator::Is),
            TokenKind::Operator(Operator::In),
        ]
    );
}

#[test]
fn line_break_prevents_merge() {
    let kinds = kinds("(is\nnot)");
    assert!(kinds.contains(&TokenKind::Operator(Operator::Is)));
    assert!(kinds.contains(&TokenKind::Operator(Operator::Not)));
}
