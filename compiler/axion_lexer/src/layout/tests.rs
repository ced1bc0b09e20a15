use super::*;
use crate::LexerConfig;
use axion_ir::{CommentKind, Keyword, Operator, Symbol};
use pretty_assertions::assert_eq;

use axion_ir::TokenKind::{EndOfStream, Identifier, Indent, Newline, Outdent};

const COLON: TokenKind = TokenKind::Symbol(Symbol::Colon);

fn lex_with(source: &str, config: LexerConfig) -> Lexer {
    let mut lexer = Lexer::new(source, config).unwrap();
    lexer.run();
    lexer
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_with(source, LexerConfig::default())
        .tokens()
        .iter()
        .map(|t| t.kind)
        .collect()
}

// === Blocks ===

#[test]
fn nested_blocks_close_at_column_zero() {
    assert_eq!(
        kinds("a:\n  b:\n    c\nd"),
        vec![
            Identifier, COLON, Newline, Indent, Identifier, COLON, Newline, Indent, Identifier,
            Newline, Outdent, Outdent, Identifier, EndOfStream,
        ]
    );
}

#[test]
fn partial_dedent_closes_one_block() {
    assert_eq!(
        kinds("a:\n    b:\n        c\n    d"),
        vec![
            Identifier, COLON, Newline, Indent, Identifier, COLON, Newline, Indent, Identifier,
            Newline, Outdent, Identifier, Outdent, EndOfStream,
        ]
    );
}

#[test]
fn indent_token_holds_the_run() {
    let lexer = lex_with("a:\n    b", LexerConfig::default());
    let indent = &lexer.tokens()[3];
    assert_eq!(indent.kind, Indent);
    assert_eq!(indent.text, "    ");
    assert_eq!(
        indent.span,
        Span::new(Position::new(1, 0), Position::new(1, 4))
    );
}

#[test]
fn equal_indentation_attaches_to_newline() {
    let lexer = lex_with("a:\n  b\n  c", LexerConfig::default());
    let newline = &lexer.tokens()[5];
    assert_eq!(newline.kind, Newline);
    assert_eq!(newline.trailing_whitespace, "  ");
}

#[test]
fn end_of_stream_closes_every_block() {
    let lexer = lex_with("a:\n  b:\n    c", LexerConfig::default());
    let state = lexer.indent_state();
    assert_eq!(state.level, 0);
    assert_eq!(state.indent_unit_size, 2);
    assert_eq!(state.indent_char, Some(' '));
    let outdents = lexer.tokens().iter().filter(|t| t.kind == Outdent).count();
    assert_eq!(outdents, 2);
}

#[test]
fn dedent_never_goes_below_zero() {
    // Unit 2, two blocks open, then a dedent of 9 columns.
    let lexer = lex_with("a:\n  b:\n          c\n d", LexerConfig::default());
    let tokens: Vec<TokenKind> = lexer.tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        tokens,
        vec![
            Identifier, COLON, Newline, Indent, Identifier, COLON, Newline, Indent, Identifier,
            Newline, Outdent, Outdent, Identifier, EndOfStream,
        ]
    );
    assert_eq!(lexer.indent_state().last_indent_length, 0);
}

// === Newlines ===

#[test]
fn blank_lines_merge_into_one_newline() {
    let lexer = lex_with("a\n\n   \nb", LexerConfig::default());
    let tokens = lexer.tokens();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1].kind, Newline);
    assert_eq!(tokens[1].text, "\n\n   \n");
    assert_eq!(tokens[1].trailing_whitespace, "");
    assert_eq!(tokens[1].span.end, Position::new(3, 0));
}

#[test]
fn crlf_is_one_newline() {
    assert_eq!(
        kinds("a\r\nb"),
        vec![Identifier, Newline, Identifier, EndOfStream]
    );
}

// === Suppressed indentation ===

#[test]
fn brackets_suppress_indentation() {
    assert_eq!(
        kinds("f(\n    x)\ny"),
        vec![
            Identifier,
            TokenKind::Symbol(Symbol::OpenParen),
            Newline,
            Identifier,
            TokenKind::Symbol(Symbol::CloseParen),
            Newline,
            Identifier,
            EndOfStream,
        ]
    );
}

#[test]
fn binary_operator_continues_the_line() {
    assert_eq!(
        kinds("x = 1 +\n    2\ny"),
        vec![
            Identifier,
            TokenKind::Operator(Operator::Assign),
            TokenKind::Number,
            TokenKind::Operator(Operator::Plus),
            Newline,
            TokenKind::Number,
            Newline,
            Identifier,
            EndOfStream,
        ]
    );
}

#[test]
fn postfix_operator_does_not_continue_the_line() {
    let tokens = kinds("a:\n    i++\nb");
    assert!(tokens.contains(&Outdent));
    assert_eq!(
        tokens.iter().filter(|k| **k == Indent).count(),
        tokens.iter().filter(|k| **k == Outdent).count()
    );
}

#[test]
fn column_zero_comment_closes_the_block() {
    assert_eq!(
        kinds("a:\n    b\n# note\n    c"),
        vec![
            Identifier,
            COLON,
            Newline,
            Indent,
            Identifier,
            Newline,
            Outdent,
            TokenKind::Comment(CommentKind::Single),
            Newline,
            Indent,
            Identifier,
            Outdent,
            EndOfStream,
        ]
    );
}

#[test]
fn column_zero_continuation_closes_the_block() {
    assert_eq!(
        kinds("a:\n    x = 1 +\n2\n"),
        vec![
            Identifier,
            COLON,
            Newline,
            Indent,
            Identifier,
            TokenKind::Operator(Operator::Assign),
            TokenKind::Number,
            TokenKind::Operator(Operator::Plus),
            Newline,
            Outdent,
            TokenKind::Number,
            Newline,
            EndOfStream,
        ]
    );
}

#[test]
fn indented_comment_lines_are_not_indentation() {
    assert_eq!(
        kinds("a:\n    b\n        # note\n    c"),
        vec![
            Identifier,
            COLON,
            Newline,
            Indent,
            Identifier,
            Newline,
            TokenKind::Comment(CommentKind::Single),
            Newline,
            Identifier,
            Outdent,
            EndOfStream,
        ]
    );
}

#[test]
fn closed_block_comment_before_code_is_indentation() {
    assert_eq!(
        kinds("if x\n    #| c |# a\n"),
        vec![
            TokenKind::Keyword(Keyword::If),
            Identifier,
            Newline,
            Indent,
            TokenKind::Comment(CommentKind::Multi),
            Identifier,
            Newline,
            Outdent,
            EndOfStream,
        ]
    );
}

#[test]
fn open_block_comment_is_not_indentation() {
    let tokens = kinds("if x\n    #| c\n |# a\n");
    assert!(!tokens.contains(&Indent));
    assert!(!tokens.contains(&Outdent));
}

// === Leading whitespace ===

#[test]
fn leading_whitespace_is_a_token() {
    let lexer = lex_with("  x", LexerConfig::default());
    let first = &lexer.tokens()[0];
    assert_eq!(first.kind, TokenKind::Whitespace);
    assert_eq!(first.text, "  ");
    assert_eq!(
        kinds("  x\ny"),
        vec![TokenKind::Whitespace, Identifier, Newline, Identifier, EndOfStream]
    );
}

#[test]
fn leading_whitespace_sets_the_baseline() {
    assert_eq!(
        kinds("  x\n  y"),
        vec![TokenKind::Whitespace, Identifier, Newline, Identifier, EndOfStream]
    );
}

// === Measuring ===

#[test]
fn tabs_use_stops_of_eight_before_the_unit_is_known() {
    let lexer = Lexer::new("", LexerConfig::default()).unwrap();
    assert_eq!(lexer.indent_length("  "), 2);
    assert_eq!(lexer.indent_length("\t"), 8);
    assert_eq!(lexer.indent_length(" \t"), 8);
    assert_eq!(lexer.indent_length("\t "), 9);
}

#[test]
fn tabs_count_one_unit_once_known() {
    let mut lexer = Lexer::new("", LexerConfig::default()).unwrap();
    lexer.indent.indent_unit_size = 4;
    assert_eq!(lexer.indent_length("\t\t"), 8);
    assert_eq!(lexer.indent_length(" \t"), 5);
}

#[test]
fn configured_tab_width_wins() {
    let lexer = Lexer::new("", LexerConfig::new().with_tab_width(4)).unwrap();
    assert_eq!(lexer.indent_length("\t"), 4);
    assert_eq!(lexer.indent_length(" \t"), 4);
    assert_eq!(lexer.indent_length("\t\t "), 9);
}

// === Consistency ===

#[test]
fn mixed_indentation_warns_when_enabled() {
    let config = LexerConfig::new().with_indentation_check(true);
    let lexer = lex_with("a:\n \tb", config);
    let warnings: Vec<_> = lexer.diagnostics().warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, BlameKind::InconsistentIndentation);
}

#[test]
fn later_runs_are_checked_against_the_first() {
    let config = LexerConfig::new().with_indentation_check(true);
    let lexer = lex_with("a:\n  b:\n\t\tc", config);
    assert!(lexer.diagnostics().contains(BlameKind::InconsistentIndentation));
}

#[test]
fn mixed_indentation_is_reported_once() {
    let config = LexerConfig::new().with_indentation_check(true);
    let lexer = lex_with("a:\n \tb:\n \t\tc\n \td", config);
    assert_eq!(lexer.diagnostics().warnings().count(), 1);
}

#[test]
fn mixed_indentation_is_silent_by_default() {
    let lexer = lex_with("a:\n \tb", LexerConfig::default());
    assert!(lexer.diagnostics().is_empty());
}
