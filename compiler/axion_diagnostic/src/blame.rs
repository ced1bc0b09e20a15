//! Kinds of lexical problems.
//!
//! Each kind has a human-readable message (its `Display`), a stable code
//! for searchability and a default [`Severity`].

use thiserror::Error;

use crate::Severity;

/// What went wrong.
///
/// Codes are grouped by family:
/// - `AX00xx`: unrecognized input and bracket balance
/// - `AX01xx`: strings, characters and escapes
/// - `AX02xx`: number literals
/// - `AX03xx`: comments and layout
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlameKind {
    // === Unrecognized input ===
    #[error("invalid character")]
    InvalidCharacter,
    #[error("invalid symbol")]
    InvalidSymbol,

    // === Bracket balance ===
    #[error("mismatched parenthesis")]
    MismatchedParenthesis,
    #[error("mismatched bracket")]
    MismatchedBracket,
    #[error("mismatched brace")]
    MismatchedBrace,

    // === Strings and characters ===
    #[error("string literal is not closed")]
    UnclosedString,
    #[error("character literal is not closed")]
    UnclosedCharacterLiteral,
    #[error("character literal is empty")]
    EmptyCharacterLiteral,
    #[error("character literal contains more than one character")]
    CharacterLiteralTooLong,
    #[error("invalid prefix in string literal")]
    InvalidPrefixInStringLiteral,
    #[error("duplicated string prefix")]
    DuplicatedStringPrefix,
    #[error("string has format prefix but no interpolations")]
    RedundantStringFormatPrefix,
    #[error("prefixes on an empty string have no effect")]
    RedundantPrefixesForEmptyString,

    // === Escapes ===
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,
    #[error("`\\x` escape requires 1 to 4 hexadecimal digits")]
    InvalidXEscapeFormat,
    #[error("truncated escape sequence")]
    TruncatedEscapeSequence,
    #[error("escape is not a valid unicode scalar value")]
    IllegalUnicodeCharacter,

    // === Numbers ===
    #[error("invalid digit in binary literal")]
    InvalidBinaryLiteral,
    #[error("invalid digit in octal literal")]
    InvalidOctalLiteral,
    #[error("invalid digit in decimal literal")]
    InvalidDecimalLiteral,
    #[error("invalid digit in hexadecimal literal")]
    InvalidHexadecimalLiteral,
    #[error("expected digits after number base specifier")]
    ExpectedNumberValueAfterNumberBaseSpecifier,
    #[error("number literal has more than one decimal point")]
    RepeatedDotInNumberLiteral,
    #[error("expected digits after exponent")]
    ExpectedNumberAfterExponentSign,
    #[error("exponent on a zero number has no effect")]
    RedundantExponentForZeroNumber,
    #[error("expected a bit rate after number postfix")]
    ExpectedABitRateAfterNumberPostfix,
    #[error("invalid bit rate for integer number (expected 8, 16, 32, 64 or 128)")]
    InvalidIntegerNumberBitRate,
    #[error("invalid bit rate for floating number (expected 32, 64 or 128)")]
    InvalidFloatNumberBitRate,
    #[error("imaginary postfix requires a decimal number")]
    InvalidComplexNumberLiteral,
    #[error("expected end of number after postfix")]
    ExpectedEndOfNumberAfterPostfix,

    // === Comments and layout ===
    #[error("multi-line comment is not closed")]
    UnclosedMultilineComment,
    #[error("inconsistent indentation")]
    InconsistentIndentation,
}

impl BlameKind {
    /// Default severity for this kind.
    pub const fn severity(self) -> Severity {
        match self {
            BlameKind::InconsistentIndentation
            | BlameKind::DuplicatedStringPrefix
            | BlameKind::RedundantStringFormatPrefix
            | BlameKind::RedundantPrefixesForEmptyString
            | BlameKind::RedundantExponentForZeroNumber => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Stable identifier used in rendered output.
    pub const fn code(self) -> &'static str {
        match self {
            BlameKind::InvalidCharacter => "AX0001",
            BlameKind::InvalidSymbol => "AX0002",
            BlameKind::MismatchedParenthesis => "AX0003",
            BlameKind::MismatchedBracket => "AX0004",
            BlameKind::MismatchedBrace => "AX0005",
            BlameKind::UnclosedString => "AX0101",
            BlameKind::UnclosedCharacterLiteral => "AX0102",
            BlameKind::EmptyCharacterLiteral => "AX0103",
            BlameKind::CharacterLiteralTooLong => "AX0104",
            BlameKind::InvalidPrefixInStringLiteral => "AX0105",
            BlameKind::DuplicatedStringPrefix => "AX0106",
            BlameKind::RedundantStringFormatPrefix => "AX0107",
            BlameKind::RedundantPrefixesForEmptyString => "AX0108",
            BlameKind::InvalidEscapeSequence => "AX0109",
            BlameKind::InvalidXEscapeFormat => "AX0110",
            BlameKind::TruncatedEscapeSequence => "AX0111",
            BlameKind::IllegalUnicodeCharacter => "AX0112",
            BlameKind::InvalidBinaryLiteral => "AX0201",
            BlameKind::InvalidOctalLiteral => "AX0202",
            BlameKind::InvalidDecimalLiteral => "AX0203",
            BlameKind::InvalidHexadecimalLiteral => "AX0204",
            BlameKind::ExpectedNumberValueAfterNumberBaseSpecifier => "AX0205",
            BlameKind::RepeatedDotInNumberLiteral => "AX0206",
            BlameKind::ExpectedNumberAfterExponentSign => "AX0207",
            BlameKind::RedundantExponentForZeroNumber => "AX0208",
            BlameKind::ExpectedABitRateAfterNumberPostfix => "AX0209",
            BlameKind::InvalidIntegerNumberBitRate => "AX0210",
            BlameKind::InvalidFloatNumberBitRate => "AX0211",
            BlameKind::InvalidComplexNumberLiteral => "AX0212",
            BlameKind::ExpectedEndOfNumberAfterPostfix => "AX0213",
            BlameKind::UnclosedMultilineComment => "AX0301",
            BlameKind::InconsistentIndentation => "AX0302",
        }
    }

    /// Whether the kind reports an unmatched bracket.
    pub const fn is_bracket_mismatch(self) -> bool {
        matches!(
            self,
            BlameKind::MismatchedParenthesis
                | BlameKind::MismatchedBracket
                | BlameKind::MismatchedBrace
        )
    }
}
