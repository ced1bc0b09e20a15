//! String and character literals.
//!
//! Strings open with one or three `"` or `'` and may carry `r` (raw) and `f`
//! (formatted) prefixes in any case. In a formatted string every `{` starts
//! an interpolation: a nested [`Lexer`] scans the expression from the same
//! cursor until the brace is balanced, and its tokens are stored on the
//! string's payload.
//!
//! Character literals are delimited by backticks and hold exactly one
//! character after escape decoding.

use std::sync::Arc;

use axion_diagnostic::BlameKind;
use axion_ir::{
    CharPayload, Interpolation, LiteralPayload, Position, Span, StringPayload, Symbol, Token,
    TokenKind,
};
use bitflags::bitflags;
use tracing::trace;

use crate::escape;
use crate::lexer::Lexer;
use crate::tables;

bitflags! {
    /// Prefix letters in front of a string literal.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub(crate) struct StringPrefixes: u8 {
        const RAW = 1 << 0;
        const FORMATTED = 1 << 1;
    }
}

impl StringPrefixes {
    fn from_letter(c: char) -> Option<Self> {
        match c {
            'r' | 'R' => Some(Self::RAW),
            'f' | 'F' => Some(Self::FORMATTED),
            _ => None,
        }
    }
}

const CHAR_QUOTE: char = '`';

impl Lexer {
    pub(crate) fn scan_string(&mut self, quote: char) {
        let mut start = self.cursor.offset();
        let mut start_pos = self.cursor.position();
        let prefixes = self.take_string_prefixes(&mut start, &mut start_pos);

        let triple = self.cursor.peek_n(3).chars().filter(|&c| c == quote).count() == 3;
        let quote_count: u8 = if triple { 3 } else { 1 };
        self.skip(usize::from(quote_count));

        let payload = StringPayload {
            quote_char: quote,
            quote_count,
            is_raw: prefixes.contains(StringPrefixes::RAW),
            is_formatted: prefixes.contains(StringPrefixes::FORMATTED),
            is_multiline: triple,
            ..StringPayload::default()
        };
        self.continue_string(start, start_pos, payload);
    }

    /// Remove an identifier glued to the opening quote and read it as
    /// prefix letters.
    ///
    /// On success the string starts where the identifier started.
    fn take_string_prefixes(
        &mut self,
        start: &mut usize,
        start_pos: &mut Position,
    ) -> StringPrefixes {
        let here = self.cursor.position();
        let Some(prev) = self.tokens.last() else {
            return StringPrefixes::empty();
        };
        if prev.kind != TokenKind::Identifier
            || !prev.trailing_whitespace.is_empty()
            || prev.span.end != here
        {
            return StringPrefixes::empty();
        }

        let span = prev.span;
        let letters = prev.text.clone();
        let mut prefixes = StringPrefixes::empty();
        let mut duplicated = false;
        for c in letters.chars() {
            let Some(flag) = StringPrefixes::from_letter(c) else {
                self.blame(BlameKind::InvalidPrefixInStringLiteral, span);
                return StringPrefixes::empty();
            };
            duplicated |= prefixes.contains(flag);
            prefixes |= flag;
        }

        if duplicated {
            self.blame(BlameKind::DuplicatedStringPrefix, span);
        }
        self.tokens.pop();
        *start -= letters.len();
        *start_pos = span.start;
        prefixes
    }

    /// Scan string content until the closing quotes.
    ///
    /// Also resumes a multi-line string left open by the previous run.
    pub(crate) fn continue_string(
        &mut self,
        start: usize,
        start_pos: Position,
        mut payload: StringPayload,
    ) {
        let quote = payload.quote_char;
        let count = usize::from(payload.quote_count);

        loop {
            if self.cursor.is_eof() {
                let multiline = payload.is_multiline;
                self.push_unclosed_string(start, start_pos, payload);
                if multiline {
                    self.defer(start);
                }
                return;
            }

            let c = self.cursor.current();
            if count == 1 && tables::is_line_break(c) {
                self.push_unclosed_string(start, start_pos, payload);
                return;
            }

            let closes = c == quote
                && self.cursor.peek_n(count).chars().filter(|&q| q == quote).count() == count;
            if closes {
                payload.trailing_quotes = self.cursor.peek_n(count).to_owned();
                self.skip(count);
                break;
            }

            match c {
                '\\' if payload.is_raw => {
                    payload.raw_text.push(c);
                    payload.decoded_text.push(c);
                    self.skip(1);
                    let next = self.cursor.current();
                    if !self.cursor.is_eof() && (next == quote || next == '\\') {
                        payload.raw_text.push(next);
                        payload.decoded_text.push(next);
                        self.skip(1);
                    }
                }
                '\\' => self.decode_escape(&mut payload.decoded_text, &mut payload.raw_text),
                '{' if payload.is_formatted => self.scan_interpolation(&mut payload),
                _ => {
                    payload.raw_text.push(c);
                    payload.decoded_text.push(c);
                    self.skip(1);
                }
            }
        }

        let token = self.token_from(TokenKind::String, start, start_pos);
        self.check_string_prefixes(&payload, token.span);
        payload.is_unclosed = false;
        self.push_token(token.with_payload(LiteralPayload::String(payload)));
    }

    fn push_unclosed_string(
        &mut self,
        start: usize,
        start_pos: Position,
        mut payload: StringPayload,
    ) {
        payload.is_unclosed = true;
        let token = self
            .token_from(TokenKind::String, start, start_pos)
            .with_payload(LiteralPayload::String(payload));
        self.blame(BlameKind::UnclosedString, token.span);
        self.push_token(token);
    }

    fn check_string_prefixes(&mut self, payload: &StringPayload, span: Span) {
        let prefixed = payload.is_raw || payload.is_formatted;
        if prefixed && payload.decoded_text.is_empty() {
            self.blame(BlameKind::RedundantPrefixesForEmptyString, span);
        } else if payload.is_formatted && payload.interpolations.is_empty() {
            self.blame(BlameKind::RedundantStringFormatPrefix, span);
        }
    }

    /// Decode the escape at the cursor into `decoded`, keeping its source in
    /// `raw`. Invalid escapes are kept as written.
    fn decode_escape(&mut self, decoded: &mut String, raw: &mut String) {
        let start = self.cursor.offset();
        let start_pos = self.cursor.position();
        let escape = escape::decode(self.cursor.remaining());
        self.skip(escape.len);

        let source = self.cursor.slice_from(start);
        raw.push_str(source);
        match escape.value {
            Ok(c) => decoded.push(c),
            Err(kind) => {
                decoded.push_str(source);
                let span = self.span_from(start_pos);
                self.blame(kind, span);
            }
        }
    }

    /// Scan `{expression}` with a nested lexer sharing this cursor.
    fn scan_interpolation(&mut self, payload: &mut StringPayload) {
        let start = self.cursor.offset();
        let start_pos = self.cursor.position();
        self.skip(1);
        let brace = Token::new(TokenKind::Symbol(Symbol::OpenBrace), "{", self.span_from(start_pos));

        let cursor = std::mem::take(&mut self.cursor);
        let single_line = payload.quote_count == 1;
        let mut nested = Lexer::interpolation(cursor, Arc::clone(&self.config), brace, single_line);
        nested.run();
        let (cursor, tokens, diagnostics) = nested.into_interpolation();
        self.cursor = cursor;
        self.diagnostics.append(diagnostics);
        trace!(tokens = tokens.len(), "interpolation");

        let source = self.cursor.slice_from(start);
        let start_offset = payload.decoded_text.len();
        payload.decoded_text.push_str(source);
        payload.raw_text.push_str(source);
        payload.interpolations.push(Interpolation {
            start_offset,
            end_offset: payload.decoded_text.len(),
            tokens,
        });
    }

    pub(crate) fn scan_character(&mut self) {
        let start = self.cursor.offset();
        let start_pos = self.cursor.position();
        self.skip(1);

        let mut payload = CharPayload::default();
        loop {
            if self.cursor.at_end_of_line() {
                payload.is_unclosed = true;
                break;
            }
            match self.cursor.current() {
                CHAR_QUOTE => {
                    self.skip(1);
                    break;
                }
                '\\' => self.decode_escape(&mut payload.decoded_text, &mut payload.raw_text),
                c => {
                    payload.raw_text.push(c);
                    payload.decoded_text.push(c);
                    self.skip(1);
                }
            }
        }

        let mut chars = payload.decoded_text.chars();
        let first = chars.next();
        let single = first.is_some() && chars.next().is_none();
        if single {
            payload.value = first;
        }

        let token = self.token_from(TokenKind::Character, start, start_pos);
        let blame = if payload.is_unclosed {
            Some(BlameKind::UnclosedCharacterLiteral)
        } else if first.is_none() {
            Some(BlameKind::EmptyCharacterLiteral)
        } else if !single {
            Some(BlameKind::CharacterLiteralTooLong)
        } else {
            None
        };
        if let Some(blame) = blame {
            self.blame(blame, token.span);
        }
        self.push_token(token.with_payload(LiteralPayload::Character(payload)));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
