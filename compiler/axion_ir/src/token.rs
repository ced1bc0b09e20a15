//! Token types produced by the Axion lexer.

use std::fmt;

use crate::{
    CharPayload, CommentPayload, Keyword, LiteralPayload, NumberPayload, Operator, Span,
    StringPayload, Symbol,
};

/// Comment flavour.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentKind {
    /// `# ...` up to the end of the line.
    Single,
    /// `#| ... |#`, possibly nested and spanning lines.
    Multi,
}

/// Token classification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),
    /// A word registered as a keyword by the host.
    CustomKeyword,
    Number,
    String,
    Character,
    Comment(CommentKind),
    Operator(Operator),
    Symbol(Symbol),
    /// Leading whitespace of a source unit.
    Whitespace,
    Newline,
    Indent,
    Outdent,
    EndOfStream,
    /// Unrecognized input.
    Invalid,
}

impl TokenKind {
    /// Tokens that carry no meaning for block structure or expressions.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Whitespace | TokenKind::Comment(_)
        )
    }

    #[inline]
    pub fn is_operator(self, op: Operator) -> bool {
        self == TokenKind::Operator(op)
    }

    #[inline]
    pub fn is_symbol(self, sym: Symbol) -> bool {
        self == TokenKind::Symbol(sym)
    }

    /// Display name for diagnostics and dumps.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::CustomKeyword => "custom keyword",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Character => "character",
            TokenKind::Comment(CommentKind::Single) => "comment",
            TokenKind::Comment(CommentKind::Multi) => "multi-line comment",
            TokenKind::Operator(op) => op.as_str(),
            TokenKind::Symbol(sym) => sym.as_str(),
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::Indent => "indent",
            TokenKind::Outdent => "outdent",
            TokenKind::EndOfStream => "end of stream",
            TokenKind::Invalid => "invalid token",
        }
    }
}

/// A classified, positioned piece of source text.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token.
    pub text: String,
    pub span: Span,
    /// Whitespace following the token that belongs to no other token.
    pub trailing_whitespace: String,
    pub payload: Option<LiteralPayload>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
            trailing_whitespace: String::new(),
            payload: None,
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: LiteralPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn number(&self) -> Option<&NumberPayload> {
        match &self.payload {
            Some(LiteralPayload::Number(p)) => Some(p),
            _ => None,
        }
    }

    pub fn string(&self) -> Option<&StringPayload> {
        match &self.payload {
            Some(LiteralPayload::String(p)) => Some(p),
            _ => None,
        }
    }

    pub fn character(&self) -> Option<&CharPayload> {
        match &self.payload {
            Some(LiteralPayload::Character(p)) => Some(p),
            _ => None,
        }
    }

    pub fn comment(&self) -> Option<&CommentPayload> {
        match &self.payload {
            Some(LiteralPayload::Comment(p)) => Some(p),
            _ => None,
        }
    }

    /// Whether this is a string or comment that ran out of input.
    pub fn is_unclosed(&self) -> bool {
        match &self.payload {
            Some(LiteralPayload::String(p)) => p.is_unclosed,
            Some(LiteralPayload::Character(p)) => p.is_unclosed,
            Some(LiteralPayload::Comment(p)) => p.is_unclosed,
            Some(LiteralPayload::Number(_)) | None => false,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {:?}", self.kind, self.text, self.span)?;
        if !self.trailing_whitespace.is_empty() {
            write!(f, " +{:?}", self.trailing_whitespace)?;
        }
        Ok(())
    }
}

/// Rebuild source text from a token sequence.
///
/// For a complete scan this equals the scanned source, without the
/// end-of-stream sentinel.
pub fn reconstruct(tokens: &[Token]) -> String {
    let len = tokens
        .iter()
        .map(|t| t.text.len() + t.trailing_whitespace.len())
        .sum();
    let mut out = String::with_capacity(len);
    for token in tokens {
        out.push_str(&token.text);
        out.push_str(&token.trailing_whitespace);
    }
    out
}

#[cfg(test)]
mod tests;
