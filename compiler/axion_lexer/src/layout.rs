//! Line breaks, whitespace and block structure.
//!
//! Leading whitespace after a line break is measured against the previous
//! indentation. A deeper line opens a block (`Indent`), a shallower one
//! closes as many blocks as the difference spans in indentation units
//! (`Outdent`). Indentation only counts when the line holds code, no
//! bracket is open and the previous token does not wait for a right operand.
//! A line starting at column zero closes every open block.

use axion_diagnostic::BlameKind;
use axion_ir::{Position, Span, Token, TokenKind};
use tracing::trace;

use crate::comment::{BLOCK_CLOSE, BLOCK_OPEN};
use crate::lexer::Lexer;
use crate::tables::{self, DEFAULT_TAB_WIDTH};

/// Indentation bookkeeping. Copied out before `EndOfStream` so that fed
/// input can continue the same blocks.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct IndentState {
    /// Character of the first indentation run.
    pub indent_char: Option<char>,
    /// Width of one block level; 0 until the first `Indent`.
    pub indent_unit_size: u32,
    /// Open blocks.
    pub level: u32,
    /// Measured length of the last significant indentation run.
    pub last_indent_length: u32,
}

impl Lexer {
    pub(crate) fn scan_whitespace(&mut self) {
        let start = self.cursor.offset();
        let start_pos = self.cursor.position();
        self.cursor.eat_while(tables::is_inline_whitespace);
        let run = self.cursor.slice_from(start).to_owned();

        match self.tokens.last().map(|t| t.kind) {
            None => self.leading_whitespace(run, start_pos),
            Some(TokenKind::Newline) => self.indentation(&run, start_pos),
            Some(_) => self.attach_whitespace(&run),
        }
    }

    pub(crate) fn scan_newline(&mut self) {
        let start = self.cursor.offset();
        let start_pos = self.cursor.position();
        self.cursor.eat_while(tables::is_line_break);
        let end = self.cursor.position();

        // Consecutive line breaks, blank lines included, form one token.
        let merge = self.tokens.last().is_some_and(|t| t.kind == TokenKind::Newline);
        if merge {
            let breaks = self.cursor.slice_from(start);
            if let Some(prev) = self.tokens.last_mut() {
                let blank = std::mem::take(&mut prev.trailing_whitespace);
                prev.text.push_str(&blank);
                prev.text.push_str(breaks);
                prev.span.end = end;
            }
        } else {
            let token = Token::new(
                TokenKind::Newline,
                self.cursor.slice_from(start),
                Span::new(start_pos, end),
            );
            self.push_token(token);
        }

        // Anything at column zero closes every block.
        let at_column_zero = !self.cursor.is_eof()
            && !tables::is_inline_whitespace(self.cursor.current());
        if at_column_zero && !self.is_nested() {
            self.close_all_blocks();
        }
    }

    /// Whitespace before the first token of the unit.
    fn leading_whitespace(&mut self, run: String, start_pos: Position) {
        if !self.is_nested() && self.line_has_code() {
            self.indent.last_indent_length = self.indent_length(&run);
        }
        let span = self.span_from(start_pos);
        self.push_token(Token::new(TokenKind::Whitespace, run, span));
    }

    fn indentation(&mut self, run: &str, start_pos: Position) {
        if !self.indentation_is_significant() {
            self.attach_whitespace(run);
            return;
        }

        let span = self.span_from(start_pos);
        self.check_consistency(run, span);
        let length = self.indent_length(run);
        let last = self.indent.last_indent_length;
        trace!(length, last, level = self.indent.level, "indentation");

        if length > last {
            if self.indent.indent_unit_size == 0 {
                self.indent.indent_unit_size = length - last;
            }
            self.indent.level += 1;
            self.push_token(Token::new(TokenKind::Indent, run, span));
        } else {
            self.attach_whitespace(run);
            if length < last {
                let unit = self.indent.indent_unit_size.max(1);
                let count = (last - length).div_ceil(unit).min(self.indent.level);
                self.emit_outdents(count);
            }
        }
        self.indent.last_indent_length = length;
    }

    /// Whether the line at the cursor takes part in block structure.
    pub(crate) fn indentation_is_significant(&self) -> bool {
        self.brackets.is_empty() && !self.expects_operand() && self.line_has_code()
    }

    /// The rest of the line is neither blank nor a comment.
    ///
    /// A block comment closed on the same line does not hide the code
    /// after it; one left open does.
    fn line_has_code(&self) -> bool {
        if self.cursor.at_end_of_line() {
            return false;
        }
        if self.cursor.current() != '#' {
            return true;
        }
        let line = self.cursor.rest_of_line();
        line.starts_with(BLOCK_OPEN)
            && line.matches(BLOCK_OPEN).count() <= line.matches(BLOCK_CLOSE).count()
    }

    /// The last significant token is an operator missing its right operand.
    fn expects_operand(&self) -> bool {
        self.tokens
            .iter()
            .rev()
            .find(|t| {
                !t.kind.is_trivia() && !matches!(t.kind, TokenKind::Indent | TokenKind::Outdent)
            })
            .is_some_and(|t| match t.kind {
                TokenKind::Operator(op) => op.expects_right_operand(),
                _ => false,
            })
    }

    fn check_consistency(&mut self, run: &str, span: Span) {
        let Some(first) = run.chars().next() else {
            return;
        };
        let expected = *self.indent.indent_char.get_or_insert(first);
        if !self.config.check_indentation_consistency || self.mixed_indentation_reported {
            return;
        }
        // Reported once per unit.
        if run.chars().any(|c| c != expected) {
            self.mixed_indentation_reported = true;
            self.blame(BlameKind::InconsistentIndentation, span);
        }
    }

    /// Measured length of an indentation run.
    pub(crate) fn indent_length(&self, run: &str) -> u32 {
        run.chars().fold(0, |len, c| match c {
            '\t' => match (self.config.tab_width, self.indent.indent_unit_size) {
                (Some(width), _) => next_tab_stop(len, width),
                (None, 0) => next_tab_stop(len, DEFAULT_TAB_WIDTH),
                (None, unit) => len + unit,
            },
            _ => len + 1,
        })
    }

    /// Whitespace that belongs to the previous token.
    pub(crate) fn attach_whitespace(&mut self, run: &str) {
        if let Some(prev) = self.tokens.last_mut() {
            prev.trailing_whitespace.push_str(run);
        }
    }

    pub(crate) fn emit_outdents(&mut self, count: u32) {
        let span = Span::point(self.cursor.position());
        for _ in 0..count {
            self.push_token(Token::new(TokenKind::Outdent, "", span));
        }
        self.indent.level -= count;
    }

    fn close_all_blocks(&mut self) {
        self.emit_outdents(self.indent.level);
        self.indent.last_indent_length = 0;
    }
}

#[inline]
fn next_tab_stop(len: u32, width: u32) -> u32 {
    (len / width + 1) * width
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
