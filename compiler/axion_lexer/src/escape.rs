//! Escape sequence decoding.
//!
//! Pure function over the text starting at a backslash. The caller advances
//! its cursor by [`Escape::len`] characters and keeps the source text of the
//! sequence when decoding fails.

use axion_diagnostic::BlameKind;

use crate::tables;

/// A decoded (or rejected) escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Escape {
    /// Characters consumed, backslash included.
    pub len: usize,
    pub value: Result<char, BlameKind>,
}

impl Escape {
    fn new(len: usize, value: Result<char, BlameKind>) -> Self {
        Escape { len, value }
    }
}

/// Decode the escape sequence at the start of `text`.
///
/// `text` must start with `\`. A backslash at the end of a line or of the
/// input consumes only itself.
pub(crate) fn decode(text: &str) -> Escape {
    let mut chars = text.chars();
    chars.next();

    let Some(marker) = chars.next().filter(|&c| !tables::is_line_break(c)) else {
        return Escape::new(1, Err(BlameKind::TruncatedEscapeSequence));
    };

    match marker {
        'x' => hex(chars.as_str(), 1, 4, BlameKind::InvalidXEscapeFormat),
        'u' => hex(chars.as_str(), 4, 4, BlameKind::TruncatedEscapeSequence),
        'U' => hex(chars.as_str(), 8, 8, BlameKind::TruncatedEscapeSequence),
        c => match tables::simple_escape(c) {
            Some(value) => Escape::new(2, Ok(value)),
            None => Escape::new(2, Err(BlameKind::InvalidEscapeSequence)),
        },
    }
}

/// Up to `max` hex digits; fewer than `min` is reported as `short`.
fn hex(digits: &str, min: usize, max: usize, short: BlameKind) -> Escape {
    let count = digits
        .bytes()
        .take(max)
        .take_while(u8::is_ascii_hexdigit)
        .count();
    let len = 2 + count;
    if count < min {
        return Escape::new(len, Err(short));
    }

    // At most 8 hex digits, always fits.
    let code = u32::from_str_radix(&digits[..count], 16).unwrap_or(u32::MAX);
    match char::from_u32(code) {
        Some(value) => Escape::new(len, Ok(value)),
        None => Escape::new(len, Err(BlameKind::IllegalUnicodeCharacter)),
    }
}
