//! Spelling tables and character classes.
//!
//! # Keywords
//!
//! Lookup uses the word's length as a first-pass filter (keywords are 2-8
//! characters), then matches against the keywords of that length.
//!
//! # Punctuation
//!
//! Operators and symbols spelled with punctuation are at most
//! [`MAX_PUNCTUATION_LEN`] characters. The scanner tries the longest
//! lookahead first and shrinks it one character at a time.

use axion_ir::{Keyword, Operator, Symbol, TokenKind};

/// Longest operator or symbol spelling (`**=`, `//=`, `<<=`, `>>=`, `<=>`).
pub(crate) const MAX_PUNCTUATION_LEN: usize = 3;

/// Tab stop used until the indentation unit is known.
pub(crate) const DEFAULT_TAB_WIDTH: u32 = 8;

/// Look up a reserved keyword.
pub(crate) fn keyword(text: &str) -> Option<Keyword> {
    let len = text.len();
    if !(2..=8).contains(&len) || !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(Keyword::If),
            "do" => Some(Keyword::Do),
            "fn" => Some(Keyword::Fn),
            _ => None,
        },
        3 => match text {
            "for" => Some(Keyword::For),
            "try" => Some(Keyword::Try),
            "use" => Some(Keyword::Use),
            "let" => Some(Keyword::Let),
            "new" => Some(Keyword::New),
            "nil" => Some(Keyword::Nil),
            _ => None,
        },
        4 => match text {
            "elif" => Some(Keyword::Elif),
            "else" => Some(Keyword::Else),
            "case" => Some(Keyword::Case),
            "from" => Some(Keyword::From),
            "enum" => Some(Keyword::Enum),
            "pass" => Some(Keyword::Pass),
            "true" => Some(Keyword::True),
            "with" => Some(Keyword::With),
            "when" => Some(Keyword::When),
            _ => None,
        },
        5 => match text {
            "match" => Some(Keyword::Match),
            "while" => Some(Keyword::While),
            "break" => Some(Keyword::Break),
            "raise" => Some(Keyword::Raise),
            "catch" => Some(Keyword::Catch),
            "const" => Some(Keyword::Const),
            "async" => Some(Keyword::Async),
            "await" => Some(Keyword::Await),
            "mixin" => Some(Keyword::Mixin),
            "class" => Some(Keyword::Class),
            "yield" => Some(Keyword::Yield),
            "false" => Some(Keyword::False),
            _ => None,
        },
        6 => match text {
            "assert" => Some(Keyword::Assert),
            "unless" => Some(Keyword::Unless),
            "anyway" => Some(Keyword::Anyway),
            "module" => Some(Keyword::Module),
            "struct" => Some(Keyword::Struct),
            "delete" => Some(Keyword::Delete),
            "return" => Some(Keyword::Return),
            _ => None,
        },
        7 => match text {
            "default" => Some(Keyword::Default),
            "nobreak" => Some(Keyword::Nobreak),
            "extends" => Some(Keyword::Extends),
            _ => None,
        },
        8 => match text {
            "continue" => Some(Keyword::Continue),
            _ => None,
        },
        _ => None,
    }
}

/// Operators spelled as words.
pub(crate) fn word_operator(text: &str) -> Option<Operator> {
    match text {
        "not" => Some(Operator::Not),
        "as" => Some(Operator::As),
        "is" => Some(Operator::Is),
        "in" => Some(Operator::In),
        "and" => Some(Operator::And),
        "or" => Some(Operator::Or),
        _ => None,
    }
}

/// Look up an operator or symbol spelled with punctuation.
pub(crate) fn punctuation(text: &str) -> Option<TokenKind> {
    let op = |op| Some(TokenKind::Operator(op));
    let sym = |sym| Some(TokenKind::Symbol(sym));

    match text.len() {
        1 => match text {
            "~" => op(Operator::BitNot),
            "*" => op(Operator::Multiply),
            "/" => op(Operator::TrueDivide),
            "%" => op(Operator::Remainder),
            "+" => op(Operator::Plus),
            "-" => op(Operator::Minus),
            "<" => op(Operator::Less),
            ">" => op(Operator::Greater),
            "&" => op(Operator::BitAnd),
            "^" => op(Operator::BitXor),
            "|" => op(Operator::BitOr),
            "=" => op(Operator::Assign),
            "." => sym(Symbol::Dot),
            "@" => sym(Symbol::At),
            "?" => sym(Symbol::Question),
            "(" => sym(Symbol::OpenParen),
            ")" => sym(Symbol::CloseParen),
            "[" => sym(Symbol::OpenBracket),
            "]" => sym(Symbol::CloseBracket),
            "{" => sym(Symbol::OpenBrace),
            "}" => sym(Symbol::CloseBrace),
            "," => sym(Symbol::Comma),
            ":" => sym(Symbol::Colon),
            ";" => sym(Symbol::Semicolon),
            _ => None,
        },
        2 => match text {
            "++" => op(Operator::Increment),
            "--" => op(Operator::Decrement),
            "**" => op(Operator::Power),
            "//" => op(Operator::FloorDivide),
            "<<" => op(Operator::LeftShift),
            ">>" => op(Operator::RightShift),
            "<=" => op(Operator::LessEqual),
            ">=" => op(Operator::GreaterEqual),
            "==" => op(Operator::Equal),
            "!=" => op(Operator::NotEqual),
            "&&" => op(Operator::AndAnd),
            "||" => op(Operator::OrOr),
            "??" => op(Operator::Coalesce),
            "+=" => op(Operator::PlusAssign),
            "-=" => op(Operator::MinusAssign),
            "*=" => op(Operator::MultiplyAssign),
            "/=" => op(Operator::TrueDivideAssign),
            "%=" => op(Operator::RemainderAssign),
            "?=" => op(Operator::CoalesceAssign),
            "&=" => op(Operator::BitAndAssign),
            "|=" => op(Operator::BitOrAssign),
            "^=" => op(Operator::BitXorAssign),
            "|>" => sym(Symbol::RightPipeline),
            "<|" => sym(Symbol::LeftPipeline),
            "=>" => sym(Symbol::FatArrow),
            "::" => sym(Symbol::ColonColon),
            _ => None,
        },
        3 => match text {
            "<=>" => op(Operator::ThreeWayCompare),
            "**=" => op(Operator::PowerAssign),
            "//=" => op(Operator::FloorDivideAssign),
            "<<=" => op(Operator::LeftShiftAssign),
            ">>=" => op(Operator::RightShiftAssign),
            _ => None,
        },
        _ => None,
    }
}

/// Value of a single-character escape (the character after `\`).
pub(crate) fn simple_escape(c: char) -> Option<char> {
    match c {
        '0' => Some('\0'),
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{0B}'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        '`' => Some('`'),
        _ => None,
    }
}

#[inline]
pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Characters a word may contain. Restricted endings are trimmed afterwards.
#[inline]
pub(crate) fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_restricted_ending(c)
}

/// Characters allowed inside a word but never at its end (`kebab-case`).
#[inline]
pub(crate) fn is_restricted_ending(c: char) -> bool {
    c == '-'
}

/// Whitespace other than line breaks.
#[inline]
pub(crate) fn is_inline_whitespace(c: char) -> bool {
    c != '\n' && c != '\r' && c.is_whitespace()
}

#[inline]
pub(crate) fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Letters that start a number postfix (`i32`, `f64`, `u8`, `l`, `j`).
#[inline]
pub(crate) fn is_number_postfix(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'i' | 'f' | 'u' | 'l' | 'j')
}
