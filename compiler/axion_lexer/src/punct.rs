//! Operators, symbols and bracket tracking.

use axion_diagnostic::BlameKind;
use axion_ir::{BracketSide, Position, Symbol, Token, TokenKind};

use crate::lexer::{Flow, Lexer};
use crate::tables::{self, MAX_PUNCTUATION_LEN};

impl Lexer {
    /// Longest operator or symbol at the cursor.
    ///
    /// Stops the run when an interpolation's closing brace is reached.
    pub(crate) fn scan_punctuation(&mut self) -> Flow {
        let start = self.cursor.offset();
        let start_pos = self.cursor.position();

        let Some((kind, len)) = longest_punctuation(self.cursor.peek_n(MAX_PUNCTUATION_LEN)) else {
            self.scan_invalid(start, start_pos);
            return Flow::Continue;
        };
        self.skip(len);
        let token = self.token_from(kind, start, start_pos);

        let mut closes_brace = false;
        if let TokenKind::Symbol(sym) = kind {
            if let Some(side) = sym.bracket_side() {
                self.track_bracket(&token, sym, side);
                closes_brace = sym == Symbol::CloseBrace;
            }
        }
        self.push_token(token);

        if closes_brace {
            return self.stop_at_terminator();
        }
        Flow::Continue
    }

    fn track_bracket(&mut self, token: &Token, sym: Symbol, side: BracketSide) {
        match side {
            BracketSide::Open => self.brackets.push(token.clone()),
            BracketSide::Close => {
                let opener = sym.matching_bracket().map(TokenKind::Symbol);
                let matches_top = self.brackets.last().map(|t| t.kind) == opener;
                if matches_top {
                    self.brackets.pop();
                } else {
                    self.brackets.push(token.clone());
                }
            }
        }
    }

    /// One character nothing else accepts.
    fn scan_invalid(&mut self, start: usize, start_pos: Position) {
        let c = self.cursor.bump();
        let blame = if c.is_ascii_punctuation() {
            BlameKind::InvalidSymbol
        } else {
            BlameKind::InvalidCharacter
        };
        let token = self.token_from(TokenKind::Invalid, start, start_pos);
        self.blame(blame, token.span);
        self.push_token(token);
    }
}

/// Kind and character length of the longest known spelling prefixing `lookahead`.
fn longest_punctuation(lookahead: &str) -> Option<(TokenKind, usize)> {
    let mut candidate = lookahead;
    while !candidate.is_empty() {
        if let Some(kind) = tables::punctuation(candidate) {
            return Some((kind, candidate.chars().count()));
        }
        let mut chars = candidate.chars();
        chars.next_back();
        candidate = chars.as_str();
    }
    None
}
