//! Reserved words.
//!
//! Word-shaped operators (`not`, `and`, `or`, `as`, `is`, `in`) are
//! [`Operator`](crate::Operator)s, not keywords.

use std::fmt;

/// A reserved word of the language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    // Control flow
    Assert,
    Unless,
    If,
    Elif,
    Else,
    Match,
    Case,
    Default,
    For,
    Do,
    While,
    Break,
    Nobreak,
    Continue,
    Try,
    Raise,
    Catch,
    Anyway,
    Yield,
    Return,
    Pass,
    With,
    When,

    // Declarations
    Const,
    Async,
    Await,
    Use,
    Module,
    Mixin,
    From,
    Class,
    Extends,
    Struct,
    Enum,
    Fn,
    Let,
    New,
    Delete,

    // Constants
    Nil,
    True,
    False,
}

impl Keyword {
    /// Source spelling of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Assert => "assert",
            Keyword::Unless => "unless",
            Keyword::If => "if",
            Keyword::Elif => "elif",
            Keyword::Else => "else",
            Keyword::Match => "match",
            Keyword::Case => "case",
            Keyword::Default => "default",
            Keyword::For => "for",
            Keyword::Do => "do",
            Keyword::While => "while",
            Keyword::Break => "break",
            Keyword::Nobreak => "nobreak",
            Keyword::Continue => "continue",
            Keyword::Try => "try",
            Keyword::Raise => "raise",
            Keyword::Catch => "catch",
            Keyword::Anyway => "anyway",
            Keyword::Yield => "yield",
            Keyword::Return => "return",
            Keyword::Pass => "pass",
            Keyword::With => "with",
            Keyword::When => "when",
            Keyword::Const => "const",
            Keyword::Async => "async",
            Keyword::Await => "await",
            Keyword::Use => "use",
            Keyword::Module => "module",
            Keyword::Mixin => "mixin",
            Keyword::From => "from",
            Keyword::Class => "class",
            Keyword::Extends => "extends",
            Keyword::Struct => "struct",
            Keyword::Enum => "enum",
            Keyword::Fn => "fn",
            Keyword::Let => "let",
            Keyword::New => "new",
            Keyword::Delete => "delete",
            Keyword::Nil => "nil",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }

    /// Keywords that denote a constant value.
    pub const fn is_constant(self) -> bool {
        matches!(self, Keyword::Nil | Keyword::True | Keyword::False)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
