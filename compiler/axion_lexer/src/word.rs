//! Identifiers, keywords and word operators.

use axion_ir::{Operator, Position, TokenKind};
use tracing::trace;

use crate::lexer::Lexer;
use crate::tables;

impl Lexer {
    pub(crate) fn scan_word(&mut self) {
        let start = self.cursor.offset();
        let start_pos = self.cursor.position();
        self.cursor.eat_while(tables::is_identifier_part);

        // `a-` scans as `a` followed by `-`.
        let restricted = self
            .cursor
            .slice_from(start)
            .chars()
            .rev()
            .take_while(|&c| tables::is_restricted_ending(c))
            .count();
        if restricted > 0 {
            self.retreat(restricted);
        }

        let word = self.cursor.slice_from(start);
        if let Some(op) = tables::word_operator(word) {
            self.push_word_operator(op, start, start_pos);
            return;
        }

        let kind = if let Some(kw) = tables::keyword(word) {
            TokenKind::Keyword(kw)
        } else if self.config.is_custom_keyword(word) {
            TokenKind::CustomKeyword
        } else {
            TokenKind::Identifier
        };
        let token = self.token_from(kind, start, start_pos);
        self.push_token(token);
    }

    /// Push a word operator, merging `is not` and `not in` into one token.
    fn push_word_operator(&mut self, op: Operator, start: usize, start_pos: Position) {
        let compound = match (self.tokens.last().map(|t| t.kind), op) {
            (Some(TokenKind::Operator(Operator::Is)), Operator::Not) => Some(Operator::IsNot),
            (Some(TokenKind::Operator(Operator::Not)), Operator::In) => Some(Operator::NotIn),
            _ => None,
        };

        let Some(compound) = compound else {
            let token = self.token_from(TokenKind::Operator(op), start, start_pos);
            self.push_token(token);
            return;
        };

        let end = self.cursor.position();
        let word = self.cursor.slice_from(start);
        if let Some(prev) = self.tokens.last_mut() {
            let gap = std::mem::take(&mut prev.trailing_whitespace);
            prev.text.push_str(&gap);
            prev.text.push_str(word);
            prev.kind = TokenKind::Operator(compound);
            prev.span.end = end;
            trace!(op = compound.as_str(), "merged word operator");
        }
    }
}

#[cfg(test)]
mod tests;
