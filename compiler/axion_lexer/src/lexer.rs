//! The scanner driver.
//!
//! [`Lexer`] owns the cursor, the token list, the diagnostics sink and the
//! layout state. Each `scan_*` method lives in the module for its token
//! family (`layout`, `word`, `punct`, `number`, `quoted`, `comment`) and
//! consumes exactly one token from the current position.
//!
//! # Incremental input
//!
//! A run ends with `EndOfStream`, preceded by the `Outdent` tokens that close
//! every open block. [`Lexer::feed`] withdraws both, restores the layout state
//! and appends the chunk, so the next [`Lexer::run`] continues as if the
//! input had never ended. A multi-line string or comment interrupted by the
//! end of input is resumed from where it stopped.

use std::sync::Arc;

use axion_diagnostic::{BlameKind, Diagnostics};
use axion_ir::{LiteralPayload, Position, Span, Symbol, Token, TokenKind};
use axion_lexer_core::Cursor;
use tracing::{debug, trace};

use crate::layout::IndentState;
use crate::{tables, ConfigError, LexerConfig};

/// Whether the dispatch loop keeps scanning.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Flow {
    Continue,
    Stop,
}

/// What the lexer is scanning.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Nesting {
    TopLevel,
    /// The expression of a `{...}` interpolation. Stops once the seeded
    /// brace is closed, or at a line break inside a single-line string.
    Interpolation { single_line: bool },
}

/// A literal cut short by the end of input.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct PendingLiteral {
    /// Byte offset of the literal's first character.
    pub start: usize,
}

/// State withdrawn by [`Lexer::feed`].
#[derive(Copy, Clone, Debug)]
struct Finished {
    /// Outdents flushed before `EndOfStream`.
    outdents: u32,
    indent: IndentState,
}

/// Lexical scanner for one source unit.
#[derive(Debug)]
pub struct Lexer {
    pub(crate) cursor: Cursor,
    pub(crate) config: Arc<LexerConfig>,
    pub(crate) tokens: Vec<Token>,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) indent: IndentState,
    /// Unmatched brackets, innermost last.
    pub(crate) brackets: Vec<Token>,
    pub(crate) pending: Vec<PendingLiteral>,
    /// Set after the first `InconsistentIndentation` warning.
    pub(crate) mixed_indentation_reported: bool,
    nesting: Nesting,
    /// Set when an interpolation lexer consumed its closing brace.
    terminated: bool,
    finished: Option<Finished>,
}

impl Lexer {
    /// Create a lexer over `source`.
    pub fn new(source: &str, config: LexerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_cursor(
            Cursor::new(source),
            Arc::new(config),
            Nesting::TopLevel,
        ))
    }

    fn with_cursor(cursor: Cursor, config: Arc<LexerConfig>, nesting: Nesting) -> Self {
        Lexer {
            cursor,
            config,
            tokens: Vec::new(),
            diagnostics: Diagnostics::new(),
            indent: IndentState::default(),
            brackets: Vec::new(),
            pending: Vec::new(),
            mixed_indentation_reported: false,
            nesting,
            terminated: false,
            finished: None,
        }
    }

    /// Lexer for the expression after `open_brace`, sharing the parent's
    /// cursor and configuration.
    pub(crate) fn interpolation(
        cursor: Cursor,
        config: Arc<LexerConfig>,
        open_brace: Token,
        single_line: bool,
    ) -> Self {
        let mut lexer = Self::with_cursor(cursor, config, Nesting::Interpolation { single_line });
        lexer.brackets.push(open_brace);
        lexer
    }

    /// Scan until the end of input (or the end of the interpolation).
    ///
    /// Calling `run` again without [`feed`](Self::feed) does nothing.
    pub fn run(&mut self) -> &[Token] {
        if self.finished.is_some() || self.terminated {
            return &self.tokens;
        }
        debug!(
            offset = self.cursor.offset(),
            nested = self.is_nested(),
            pending = self.pending.len(),
            "lexer run start"
        );

        self.resume_pending();
        while self.scan_token() == Flow::Continue {}
        self.report_unmatched_brackets();

        debug!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            indent_level = self.indent.level,
            "lexer run end"
        );
        &self.tokens
    }

    /// Append more input after a completed run.
    ///
    /// A line break is inserted between the old and new text unless the old
    /// text already ends with one.
    pub fn feed(&mut self, chunk: &str) {
        if let Some(finished) = self.finished.take() {
            if self.tokens.last().is_some_and(|t| t.kind == TokenKind::EndOfStream) {
                self.tokens.pop();
            }
            for _ in 0..finished.outdents {
                if self.tokens.last().is_some_and(|t| t.kind == TokenKind::Outdent) {
                    self.tokens.pop();
                }
            }
            self.indent = finished.indent;
        }
        trace!(len = chunk.len(), "feed");
        self.cursor.append(chunk);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Source text seen so far, fed chunks included.
    pub fn source(&self) -> &str {
        self.cursor.source()
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    pub fn indent_state(&self) -> IndentState {
        self.indent
    }

    /// Whether a multi-line string or comment is waiting for more input.
    pub fn has_pending_literal(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Token>, Diagnostics) {
        (self.tokens, self.diagnostics)
    }

    /// Hand the cursor back to the parent lexer.
    ///
    /// Returns the expression tokens with the closing brace (or the end of
    /// stream) removed.
    pub(crate) fn into_interpolation(mut self) -> (Cursor, Vec<Token>, Diagnostics) {
        let closer = if self.terminated {
            TokenKind::Symbol(Symbol::CloseBrace)
        } else {
            TokenKind::EndOfStream
        };
        if self.tokens.last().is_some_and(|t| t.kind == closer) {
            self.tokens.pop();
        }
        (self.cursor, self.tokens, self.diagnostics)
    }

    #[inline]
    pub(crate) fn is_nested(&self) -> bool {
        self.nesting != Nesting::TopLevel
    }

    // === Dispatch ===

    fn scan_token(&mut self) -> Flow {
        if self.cursor.is_eof() {
            return self.end_of_stream();
        }

        match self.cursor.current() {
            c if tables::is_line_break(c) => {
                if self.nesting == (Nesting::Interpolation { single_line: true }) {
                    return Flow::Stop;
                }
                self.scan_newline();
            }
            c if tables::is_inline_whitespace(c) => self.scan_whitespace(),
            '#' => self.scan_comment(),
            c if c.is_ascii_digit() => self.scan_number(),
            c @ ('"' | '\'') => self.scan_string(c),
            '`' => self.scan_character(),
            c if tables::is_identifier_start(c) => self.scan_word(),
            _ => return self.scan_punctuation(),
        }
        Flow::Continue
    }

    /// Close all open blocks and emit `EndOfStream`.
    fn end_of_stream(&mut self) -> Flow {
        if !self.is_nested() {
            let indent = self.indent;
            let outdents = self.indent.level;
            self.emit_outdents(outdents);
            self.indent.last_indent_length = 0;
            self.finished = Some(Finished { outdents, indent });
        }
        let span = Span::point(self.cursor.position());
        self.push_token(Token::new(TokenKind::EndOfStream, "", span));
        Flow::Stop
    }

    /// Continue the literal left open by the previous run.
    fn resume_pending(&mut self) {
        let Some(pending) = self.pending.pop() else {
            return;
        };
        let Some(token) = self.tokens.pop() else {
            return;
        };
        let start_pos = token.span.start;
        match token.payload {
            Some(LiteralPayload::String(payload)) => {
                trace!(offset = pending.start, "resume string");
                self.continue_string(pending.start, start_pos, payload);
            }
            Some(LiteralPayload::Comment(payload)) => {
                trace!(offset = pending.start, "resume comment");
                self.continue_multiline_comment(pending.start, start_pos, payload);
            }
            other => unreachable!("pending literal is not a string or comment: {other:?}"),
        }
    }

    /// Report every bracket left on the stack.
    fn report_unmatched_brackets(&mut self) {
        for token in std::mem::take(&mut self.brackets) {
            let kind = match token.kind {
                TokenKind::Symbol(Symbol::OpenParen | Symbol::CloseParen) => {
                    BlameKind::MismatchedParenthesis
                }
                TokenKind::Symbol(Symbol::OpenBracket | Symbol::CloseBracket) => {
                    BlameKind::MismatchedBracket
                }
                TokenKind::Symbol(Symbol::OpenBrace | Symbol::CloseBrace) => {
                    BlameKind::MismatchedBrace
                }
                _ => unreachable!("non-bracket token on the bracket stack: {token:?}"),
            };
            self.blame(kind, token.span);
        }
    }

    pub(crate) fn stop_at_terminator(&mut self) -> Flow {
        if self.is_nested() && self.brackets.is_empty() {
            self.terminated = true;
            return Flow::Stop;
        }
        Flow::Continue
    }

    // === Token helpers ===

    pub(crate) fn push_token(&mut self, token: Token) {
        trace!(
            kind = token.kind.display_name(),
            line = token.span.start.line,
            column = token.span.start.column,
            "token"
        );
        self.tokens.push(token);
    }

    /// Token covering the source from `start` to the cursor.
    pub(crate) fn token_from(&self, kind: TokenKind, start: usize, start_pos: Position) -> Token {
        Token::new(kind, self.cursor.slice_from(start), self.span_from(start_pos))
    }

    #[inline]
    pub(crate) fn span_from(&self, start_pos: Position) -> Span {
        Span::new(start_pos, self.cursor.position())
    }

    #[inline]
    pub(crate) fn blame(&mut self, kind: BlameKind, span: Span) {
        self.diagnostics.blame(kind, span);
    }

    /// Mark the literal just pushed as waiting for more input.
    pub(crate) fn defer(&mut self, start: usize) {
        if !self.is_nested() {
            self.pending.push(PendingLiteral { start });
        }
    }

    /// Move `count` characters back, as `i32` cursor steps.
    pub(crate) fn retreat(&mut self, count: usize) {
        let steps = i32::try_from(count).unwrap_or(i32::MAX);
        self.cursor.advance(-steps);
    }

    /// Move `count` characters forward.
    pub(crate) fn skip(&mut self, count: usize) {
        let steps = i32::try_from(count).unwrap_or(i32::MAX);
        self.cursor.advance(steps);
    }
}
