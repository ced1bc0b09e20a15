//! `#` line comments and nestable `#| ... |#` block comments.

use axion_diagnostic::BlameKind;
use axion_ir::{CommentKind, CommentPayload, LiteralPayload, Position, TokenKind};

use crate::lexer::Lexer;
use crate::tables;

pub(crate) const BLOCK_OPEN: &str = "#|";
pub(crate) const BLOCK_CLOSE: &str = "|#";

impl Lexer {
    pub(crate) fn scan_comment(&mut self) {
        let start = self.cursor.offset();
        let start_pos = self.cursor.position();

        if self.cursor.peek_n(2) == BLOCK_OPEN {
            self.skip(2);
            let payload = CommentPayload {
                depth: 1,
                ..CommentPayload::default()
            };
            self.continue_multiline_comment(start, start_pos, payload);
            return;
        }

        self.skip(1);
        let content_start = self.cursor.offset();
        self.cursor.eat_while(|c| !tables::is_line_break(c));
        let payload = CommentPayload {
            content: self.cursor.slice_from(content_start).to_owned(),
            ..CommentPayload::default()
        };
        let token = self
            .token_from(TokenKind::Comment(CommentKind::Single), start, start_pos)
            .with_payload(LiteralPayload::Comment(payload));
        self.push_token(token);
    }

    /// Scan a block comment body until its depth drops to zero.
    pub(crate) fn continue_multiline_comment(
        &mut self,
        start: usize,
        start_pos: Position,
        mut payload: CommentPayload,
    ) {
        loop {
            if self.cursor.is_eof() {
                payload.is_unclosed = true;
                let token = self
                    .token_from(TokenKind::Comment(CommentKind::Multi), start, start_pos)
                    .with_payload(LiteralPayload::Comment(payload));
                self.blame(BlameKind::UnclosedMultilineComment, token.span);
                self.push_token(token);
                self.defer(start);
                return;
            }

            let opens = self.cursor.peek_n(2) == BLOCK_OPEN;
            let closes = self.cursor.peek_n(2) == BLOCK_CLOSE;
            if opens {
                payload.depth += 1;
                payload.content.push_str(BLOCK_OPEN);
                self.skip(2);
            } else if closes {
                payload.depth -= 1;
                self.skip(2);
                if payload.depth == 0 {
                    break;
                }
                payload.content.push_str(BLOCK_CLOSE);
            } else {
                payload.content.push(self.cursor.bump());
            }
        }

        payload.is_unclosed = false;
        let token = self
            .token_from(TokenKind::Comment(CommentKind::Multi), start, start_pos)
            .with_payload(LiteralPayload::Comment(payload));
        self.push_token(token);
    }
}
