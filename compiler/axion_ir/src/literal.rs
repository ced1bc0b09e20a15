//! Literal payloads attached to number, string, character and comment tokens.

use num_bigint::BigUint;

use crate::Token;

/// Numeral base of a number literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Radix {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Radix selected by the letter after a leading `0`.
    pub const fn from_specifier(letter: char) -> Option<Radix> {
        match letter {
            'b' | 'B' => Some(Radix::Binary),
            'o' | 'O' => Some(Radix::Octal),
            'x' | 'X' => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.value())
    }
}

/// A complex number with `f64` parts.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

/// Decoded value of a number literal.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericValue {
    /// Integer that fits a machine word.
    Int(u64),
    /// Integer that needs more than 64 bits, or carries the `l` postfix.
    BigInt(BigUint),
    Float(f64),
    Complex(Complex),
}

impl NumericValue {
    /// Integer value, if it fits in `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            NumericValue::Int(v) => Some(*v),
            NumericValue::BigInt(v) => u64::try_from(v).ok(),
            NumericValue::Float(_) | NumericValue::Complex(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumericValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, NumericValue::Int(_) | NumericValue::BigInt(_))
    }
}

impl Default for NumericValue {
    fn default() -> Self {
        NumericValue::Int(0)
    }
}

/// Options and decoded value of a number literal.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberPayload {
    pub radix: Radix,
    /// Significant digits without `_` separators, base prefix or postfix.
    /// Floating literals keep their `.`.
    pub digits: String,
    pub bits: u32,
    pub is_floating: bool,
    pub is_unsigned: bool,
    pub is_unlimited: bool,
    pub is_imaginary: bool,
    pub has_exponent: bool,
    pub exponent: i32,
    pub decoded_value: NumericValue,
}

impl NumberPayload {
    /// Width assumed for literals without an explicit bit rate.
    pub const DEFAULT_BITS: u32 = 32;
}

impl Default for NumberPayload {
    fn default() -> Self {
        NumberPayload {
            radix: Radix::Decimal,
            digits: String::new(),
            bits: Self::DEFAULT_BITS,
            is_floating: false,
            is_unsigned: false,
            is_unlimited: false,
            is_imaginary: false,
            has_exponent: false,
            exponent: 0,
            decoded_value: NumericValue::default(),
        }
    }
}

/// An embedded `{...}` expression of a formatted string.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interpolation {
    /// Byte offset of `{` in the decoded string.
    pub start_offset: usize,
    /// Byte offset just past `}` in the decoded string.
    pub end_offset: usize,
    /// Tokens of the expression, closing brace excluded.
    pub tokens: Vec<Token>,
}

/// Options, content and interpolations of a string literal.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringPayload {
    pub quote_char: char,
    /// 1 for single-line strings, 3 for multi-line strings.
    pub quote_count: u8,
    pub is_raw: bool,
    pub is_formatted: bool,
    pub is_multiline: bool,
    pub is_unclosed: bool,
    /// Closing delimiter as written; empty while unclosed.
    pub trailing_quotes: String,
    /// Content between the delimiters as written.
    pub raw_text: String,
    /// Content with escapes decoded.
    pub decoded_text: String,
    pub interpolations: Vec<Interpolation>,
}

/// Content and value of a character literal.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharPayload {
    pub raw_text: String,
    pub decoded_text: String,
    /// The character, when exactly one was decoded.
    pub value: Option<char>,
    pub is_unclosed: bool,
}

/// Content of a comment.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommentPayload {
    /// Text between the delimiters.
    pub content: String,
    pub is_unclosed: bool,
    /// Nesting depth still open; 0 once closed.
    pub depth: u32,
}

/// Kind-specific data of a literal or comment token.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralPayload {
    Number(NumberPayload),
    String(StringPayload),
    Character(CharPayload),
    Comment(CommentPayload),
}
