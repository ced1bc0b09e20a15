use super::*;
use crate::{Position, StringPayload};
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, text: &str, ws: &str) -> Token {
    let mut token = Token::new(kind, text, Span::DUMMY);
    token.trailing_whitespace = ws.to_string();
    token
}

#[test]
fn reconstruct_joins_text_and_whitespace() {
    let tokens = vec![
        tok(TokenKind::Identifier, "x", " "),
        tok(TokenKind::Operator(Operator::Assign), "=", " "),
        tok(TokenKind::Number, "1", ""),
        tok(TokenKind::Newline, "\n", ""),
        tok(TokenKind::EndOfStream, "", ""),
    ];
    assert_eq!(reconstruct(&tokens), "x = 1\n");
}

#[test]
fn reconstruct_empty_is_empty() {
    assert_eq!(reconstruct(&[]), "");
}

#[test]
fn payload_accessors_match_kind() {
    let payload = StringPayload {
        quote_char: '"',
        quote_count: 1,
        is_unclosed: true,
        ..StringPayload::default()
    };
    let token = Token::new(
        TokenKind::String,
        "\"abc",
        Span::new(Position::new(0, 0), Position::new(0, 4)),
    )
    .with_payload(LiteralPayload::String(payload));

    assert!(token.string().is_some());
    assert!(token.number().is_none());
    assert!(token.comment().is_none());
    assert!(token.is_unclosed());
}

#[test]
fn trivia_kinds() {
    assert!(TokenKind::Newline.is_trivia());
    assert!(TokenKind::Comment(CommentKind::Multi).is_trivia());
    assert!(!TokenKind::Indent.is_trivia());
    assert!(!TokenKind::Identifier.is_trivia());
}

#[test]
fn display_names_use_spellings() {
    assert_eq!(TokenKind::Operator(Operator::IsNot).display_name(), "is not");
    assert_eq!(TokenKind::Keyword(Keyword::Fn).display_name(), "fn");
    assert_eq!(TokenKind::Symbol(Symbol::FatArrow).display_name(), "=>");
}

#[test]
fn debug_shows_trailing_whitespace() {
    let token = tok(TokenKind::Identifier, "a", "  ");
    assert_eq!(format!("{token:?}"), "Identifier \"a\" @ 0:0..0:0 +\"  \"");
}
