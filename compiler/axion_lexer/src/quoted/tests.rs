use super::*;
use crate::{lex, LexOutput, LexerConfig};
use axion_ir::Operator;
use pretty_assertions::assert_eq;

fn lex_default(source: &str) -> LexOutput {
    lex(source, &LexerConfig::default()).unwrap()
}

fn string(source: &str) -> StringPayload {
    lex_default(source).tokens[0].string().cloned().unwrap()
}

fn blames(source: &str) -> Vec<BlameKind> {
    lex_default(source).diagnostics.iter().map(|d| d.kind).collect()
}

// === Plain strings ===

#[test]
fn double_and_single_quotes() {
    let payload = string(r#""hi""#);
    assert_eq!(payload.quote_char, '"');
    assert_eq!(payload.quote_count, 1);
    assert_eq!(payload.decoded_text, "hi");
    assert_eq!(payload.trailing_quotes, "\"");
    assert!(!payload.is_multiline);

    let payload = string("'it'");
    assert_eq!(payload.quote_char, '\'');
    assert_eq!(payload.decoded_text, "it");
}

#[test]
fn other_quote_is_content() {
    assert_eq!(string(r#""it's""#).decoded_text, "it's");
}

#[test]
fn escapes_are_decoded() {
    let payload = string(r#""a\tb\x41-""#);
    assert_eq!(payload.decoded_text, "a\tbA-");
    assert_eq!(payload.raw_text, r"a\tb\x41-");
}

#[test]
fn invalid_escape_is_kept() {
    let payload = string(r#""\q""#);
    assert_eq!(payload.decoded_text, r"\q");
    assert_eq!(blames(r#""\q""#), vec![BlameKind::InvalidEscapeSequence]);
}

#[test]
fn escaped_quote_does_not_close() {
    let payload = string(r#""say \"hi\"""#);
    assert_eq!(payload.decoded_text, "say \"hi\"");
    assert!(!payload.is_unclosed);
}

#[test]
fn triple_quoted_strings_cross_lines() {
    let output = lex_default("\"\"\"a\nb\"\"\" x");
    let payload = output.tokens[0].string().unwrap();
    assert!(payload.is_multiline);
    assert_eq!(payload.quote_count, 3);
    assert_eq!(payload.decoded_text, "a\nb");
    assert_eq!(payload.trailing_quotes, "\"\"\"");
    assert_eq!(output.tokens[1].text, "x");
}

#[test]
fn empty_string() {
    let output = lex_default("\"\" x");
    assert_eq!(output.tokens[0].text, "\"\"");
    assert_eq!(output.tokens[0].string().unwrap().decoded_text, "");
    assert_eq!(output.tokens[1].text, "x");
}

// === Unclosed strings ===

#[test]
fn single_line_string_ends_at_line_break() {
    let output = lex_default("\"abc\nx");
    assert_eq!(output.tokens[0].text, "\"abc");
    assert!(output.tokens[0].is_unclosed());
    assert_eq!(output.tokens[1].kind, TokenKind::Newline);
    assert_eq!(output.tokens[2].text, "x");
    assert_eq!(
        output.diagnostics.iter().map(|d| d.kind).collect::<Vec<_>>(),
        vec![BlameKind::UnclosedString]
    );
}

#[test]
fn triple_quoted_string_at_end_of_input() {
    let output = lex_default("\"\"\"abc\ndef");
    let payload = output.tokens[0].string().unwrap();
    assert!(payload.is_unclosed);
    assert_eq!(payload.trailing_quotes, "");
    assert_eq!(payload.decoded_text, "abc\ndef");
    assert_eq!(output.tokens[1].kind, TokenKind::EndOfStream);
}

#[test]
fn partial_closing_quotes_are_content() {
    let output = lex_default("\"\"\"a\"b\"\"");
    let payload = output.tokens[0].string().unwrap();
    assert!(payload.is_unclosed);
    assert_eq!(payload.decoded_text, "a\"b\"\"");
}

// === Prefixes ===

#[test]
fn raw_strings_keep_backslashes() {
    let output = lex_default(r#"r"a\nb""#);
    let token = &output.tokens[0];
    assert_eq!(token.text, r#"r"a\nb""#);
    assert_eq!(token.span.start, Position::START);
    let payload = token.string().unwrap();
    assert!(payload.is_raw);
    assert_eq!(payload.decoded_text, r"a\nb");
    assert_eq!(output.tokens.len(), 2);
}

#[test]
fn raw_string_escaped_quote() {
    let payload = string(r#"r"\"""#);
    assert_eq!(payload.decoded_text, r#"\""#);
    assert!(!payload.is_unclosed);
}

#[test]
fn prefixes_are_case_insensitive() {
    let payload = string(r#"Rf"{x}""#);
    assert!(payload.is_raw);
    assert!(payload.is_formatted);
}

#[test]
fn invalid_prefix_keeps_the_identifier() {
    let output = lex_default(r#"x"a""#);
    assert_eq!(output.tokens[0].kind, TokenKind::Identifier);
    assert_eq!(output.tokens[1].kind, TokenKind::String);
    assert!(output
        .diagnostics
        .contains(BlameKind::InvalidPrefixInStringLiteral));
}

#[test]
fn duplicated_prefix_warns() {
    let output = lex_default(r#"rr"a""#);
    assert_eq!(output.tokens[0].kind, TokenKind::String);
    assert!(output.tokens[0].string().unwrap().is_raw);
    assert_eq!(
        output.diagnostics.iter().map(|d| d.kind).collect::<Vec<_>>(),
        vec![BlameKind::DuplicatedStringPrefix]
    );
}

#[test]
fn separated_identifier_is_not_a_prefix() {
    let output = lex_default(r#"r "a""#);
    assert_eq!(output.tokens[0].kind, TokenKind::Identifier);
    assert!(!output.tokens[1].string().unwrap().is_raw);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn redundant_prefixes() {
    assert_eq!(
        blames(r#"f"""#),
        vec![BlameKind::RedundantPrefixesForEmptyString]
    );
    assert_eq!(
        blames(r#"r''"#),
        vec![BlameKind::RedundantPrefixesForEmptyString]
    );
    assert_eq!(blames(r#"f"abc""#), vec![BlameKind::RedundantStringFormatPrefix]);
}

// === Interpolation ===

#[test]
fn nested_interpolation() {
    let output = lex_default(r#"f"a{1+{2}}b""#);
    assert_eq!(output.tokens.len(), 2);
    assert!(output.diagnostics.is_empty());

    let payload = output.tokens[0].string().unwrap();
    assert_eq!(payload.decoded_text, "a{1+{2}}b");
    assert_eq!(payload.interpolations.len(), 1);

    let interpolation = &payload.interpolations[0];
    assert_eq!(interpolation.start_offset, 1);
    assert_eq!(interpolation.end_offset, 8);
    let kinds: Vec<TokenKind> = interpolation.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Operator(Operator::Plus),
            TokenKind::Symbol(Symbol::OpenBrace),
            TokenKind::Number,
            TokenKind::Symbol(Symbol::CloseBrace),
        ]
    );
}

#[test]
fn interpolation_positions_are_absolute() {
    let output = lex_default(r#"x = f"v={value}""#);
    let payload = output.tokens[2].string().unwrap();
    let value = &payload.interpolations[0].tokens[0];
    assert_eq!(value.text, "value");
    assert_eq!(value.span.start, Position::new(0, 9));
}

#[test]
fn interpolation_may_contain_strings() {
    let output = lex_default(r#"f"{"x"}!""#);
    let payload = output.tokens[0].string().unwrap();
    assert_eq!(payload.decoded_text, r#"{"x"}!"#);
    let inner = &payload.interpolations[0].tokens[0];
    assert_eq!(inner.string().unwrap().decoded_text, "x");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn several_interpolations() {
    let payload = string(r#"f"{a} and {b}""#);
    assert_eq!(payload.interpolations.len(), 2);
    assert_eq!(payload.interpolations[1].start_offset, 8);
    assert_eq!(payload.interpolations[1].end_offset, 11);
}

#[test]
fn interpolation_stops_at_line_break_in_single_line_string() {
    let output = lex_default("f\"{x\ny");
    let payload = output.tokens[0].string().unwrap();
    assert!(payload.is_unclosed);
    assert_eq!(payload.interpolations[0].tokens.len(), 1);
    assert!(output.diagnostics.contains(BlameKind::MismatchedBrace));
    assert!(output.diagnostics.contains(BlameKind::UnclosedString));
    assert_eq!(output.tokens[1].kind, TokenKind::Newline);
}

#[test]
fn braces_in_plain_strings_are_content() {
    let payload = string(r#""{x}""#);
    assert!(payload.interpolations.is_empty());
    assert_eq!(payload.decoded_text, "{x}");
}

// === Character literals ===

#[test]
fn character_literals() {
    let output = lex_default("`a` `\\n`");
    let first = output.tokens[0].character().unwrap();
    assert_eq!(first.value, Some('a'));
    let second = output.tokens[1].character().unwrap();
    assert_eq!(second.value, Some('\n'));
    assert_eq!(second.raw_text, "\\n");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn character_literal_errors() {
    assert_eq!(blames("``"), vec![BlameKind::EmptyCharacterLiteral]);
    assert_eq!(blames("`ab`"), vec![BlameKind::CharacterLiteralTooLong]);
    assert_eq!(blames("`a"), vec![BlameKind::UnclosedCharacterLiteral]);

    let output = lex_default("`ab`");
    let payload = output.tokens[0].character().unwrap();
    assert_eq!(payload.value, None);
    assert_eq!(payload.decoded_text, "ab");
}

#[test]
fn unclosed_character_stops_at_line_break() {
    let output = lex_default("`a\nb");
    assert!(output.tokens[0].is_unclosed());
    assert_eq!(output.tokens[0].text, "`a");
    assert_eq!(output.tokens[2].text, "b");
}
