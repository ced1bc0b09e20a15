//! Punctuation and brackets.

use std::fmt;

/// A non-operator punctuation token's sub-kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    Dot,
    RightPipeline,
    LeftPipeline,
    FatArrow,
    At,
    Question,
    ColonColon,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Comma,
    Colon,
    Semicolon,
}

/// Which side of a bracket pair a symbol is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BracketSide {
    Open,
    Close,
}

impl Symbol {
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::Dot => ".",
            Symbol::RightPipeline => "|>",
            Symbol::LeftPipeline => "<|",
            Symbol::FatArrow => "=>",
            Symbol::At => "@",
            Symbol::Question => "?",
            Symbol::ColonColon => "::",
            Symbol::OpenParen => "(",
            Symbol::CloseParen => ")",
            Symbol::OpenBracket => "[",
            Symbol::CloseBracket => "]",
            Symbol::OpenBrace => "{",
            Symbol::CloseBrace => "}",
            Symbol::Comma => ",",
            Symbol::Colon => ":",
            Symbol::Semicolon => ";",
        }
    }

    /// Side of the bracket pair, or `None` for non-bracket symbols.
    pub const fn bracket_side(self) -> Option<BracketSide> {
        match self {
            Symbol::OpenParen | Symbol::OpenBracket | Symbol::OpenBrace => Some(BracketSide::Open),
            Symbol::CloseParen | Symbol::CloseBracket | Symbol::CloseBrace => {
                Some(BracketSide::Close)
            }
            _ => None,
        }
    }

    /// The bracket that closes (or opens) this one.
    pub const fn matching_bracket(self) -> Option<Symbol> {
        match self {
            Symbol::OpenParen => Some(Symbol::CloseParen),
            Symbol::CloseParen => Some(Symbol::OpenParen),
            Symbol::OpenBracket => Some(Symbol::CloseBracket),
            Symbol::CloseBracket => Some(Symbol::OpenBracket),
            Symbol::OpenBrace => Some(Symbol::CloseBrace),
            Symbol::CloseBrace => Some(Symbol::OpenBrace),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
