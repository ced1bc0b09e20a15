//! Number literals.
//!
//! ```text
//! number   = [ "0" base ] digits [ fraction ] [ exponent ] [ postfix ]
//! base     = "b" | "o" | "x"                 (either case)
//! fraction = "." digit { digit | "_" }        (decimal only)
//! exponent = ( "e" | "E" ) [ "+" | "-" ] digits
//! postfix  = "i" rate | "f" [ rate ] | "u" [ rate ] | "l" | "j"
//! ```
//!
//! Integers without an explicit rate get the smallest of 32, 64 or 128 bits
//! that holds their value. Values past `u64` are kept as [`BigUint`].

use axion_diagnostic::BlameKind;
use axion_ir::{Complex, LiteralPayload, NumberPayload, NumericValue, Position, Radix, TokenKind};
use num_bigint::BigUint;
use tracing::trace;

use crate::lexer::Lexer;
use crate::tables;

const INTEGER_BIT_RATES: [u32; 5] = [8, 16, 32, 64, 128];
const FLOAT_BIT_RATES: [u32; 3] = [32, 64, 128];

/// What the postfix scan found.
#[derive(Copy, Clone, Default)]
struct Postfix {
    present: bool,
    explicit_bits: bool,
}

impl Lexer {
    pub(crate) fn scan_number(&mut self) {
        let start = self.cursor.offset();
        let start_pos = self.cursor.position();
        let mut number = NumberPayload::default();

        if self.cursor.current() == '0' {
            if let Some(radix) = Radix::from_specifier(self.cursor.peek()) {
                number.radix = radix;
                self.skip(2);
            }
        }

        if number.radix == Radix::Decimal {
            self.scan_decimal_digits(&mut number);
        } else {
            self.scan_radix_digits(&mut number, start_pos);
        }
        let postfix = self.scan_postfix(&mut number);
        self.scan_number_tail(number.radix, postfix);

        number.decoded_value = decode(&number);
        if !postfix.explicit_bits && !number.is_unlimited && number.decoded_value.is_integer() {
            number.bits = inferred_bits(&number.decoded_value);
        }
        trace!(radix = number.radix.value(), digits = %number.digits, bits = number.bits, "number");

        let token = self
            .token_from(TokenKind::Number, start, start_pos)
            .with_payload(LiteralPayload::Number(number));
        self.push_token(token);
    }

    /// Digits of a binary, octal or hexadecimal literal.
    fn scan_radix_digits(&mut self, number: &mut NumberPayload, start_pos: Position) {
        let radix = number.radix;
        loop {
            let c = self.cursor.current();
            if self.cursor.is_eof() {
                break;
            }
            if c == '_' {
                self.skip(1);
            } else if radix.is_digit(c) {
                number.digits.push(c);
                self.skip(1);
            } else if tables::is_number_postfix(c) {
                break;
            } else if c.is_alphanumeric() {
                let pos = self.cursor.position();
                self.skip(1);
                let span = self.span_from(pos);
                self.blame(invalid_digit(radix), span);
            } else {
                break;
            }
        }

        if number.digits.is_empty() {
            let span = self.span_from(start_pos);
            self.blame(BlameKind::ExpectedNumberValueAfterNumberBaseSpecifier, span);
        }
    }

    /// Digits, fraction and exponent of a decimal literal.
    fn scan_decimal_digits(&mut self, number: &mut NumberPayload) {
        loop {
            let c = self.cursor.current();
            if self.cursor.is_eof() {
                break;
            }
            match c {
                '0'..='9' => {
                    number.digits.push(c);
                    self.skip(1);
                }
                '_' => self.skip(1),
                '.' if self.cursor.peek().is_ascii_digit() => {
                    let pos = self.cursor.position();
                    self.skip(1);
                    if number.is_floating {
                        let span = self.span_from(pos);
                        self.blame(BlameKind::RepeatedDotInNumberLiteral, span);
                    } else {
                        number.is_floating = true;
                        number.digits.push('.');
                    }
                }
                'e' | 'E' => {
                    self.scan_exponent(number);
                    break;
                }
                c if tables::is_number_postfix(c) => break,
                c if c.is_alphanumeric() => {
                    let pos = self.cursor.position();
                    self.skip(1);
                    let span = self.span_from(pos);
                    self.blame(BlameKind::InvalidDecimalLiteral, span);
                }
                _ => break,
            }
        }
    }

    fn scan_exponent(&mut self, number: &mut NumberPayload) {
        let start_pos = self.cursor.position();
        self.skip(1);
        let negative = match self.cursor.current() {
            '-' => {
                self.skip(1);
                true
            }
            '+' => {
                self.skip(1);
                false
            }
            _ => false,
        };

        let mut digits = String::new();
        while !self.cursor.is_eof() {
            match self.cursor.current() {
                c @ '0'..='9' => digits.push(c),
                '_' => {}
                _ => break,
            }
            self.skip(1);
        }

        let span = self.span_from(start_pos);
        if digits.is_empty() {
            self.blame(BlameKind::ExpectedNumberAfterExponentSign, span);
            return;
        }

        let magnitude: i32 = digits.parse().unwrap_or(i32::MAX);
        number.exponent = if negative { -magnitude } else { magnitude };
        number.has_exponent = true;
        number.is_floating = true;
        if number.digits.chars().all(|c| c == '0' || c == '.') {
            self.blame(BlameKind::RedundantExponentForZeroNumber, span);
        }
    }

    /// At most one postfix: `i<rate>`, `f[rate]`, `u[rate]`, `l` or `j`.
    fn scan_postfix(&mut self, number: &mut NumberPayload) -> Postfix {
        let start_pos = self.cursor.position();
        let letter = self.cursor.current().to_ascii_lowercase();
        if self.cursor.is_eof() || !tables::is_number_postfix(letter) {
            return Postfix::default();
        }
        self.skip(1);

        let mut postfix = Postfix {
            present: true,
            explicit_bits: false,
        };
        match letter {
            'i' => match self.scan_bit_rate() {
                Some(bits) => {
                    self.check_bit_rate(number, bits, start_pos);
                    postfix.explicit_bits = true;
                }
                None => {
                    let span = self.span_from(start_pos);
                    self.blame(BlameKind::ExpectedABitRateAfterNumberPostfix, span);
                }
            },
            'f' | 'u' => {
                if letter == 'f' {
                    number.is_floating = true;
                } else {
                    number.is_unsigned = true;
                }
                if let Some(bits) = self.scan_bit_rate() {
                    self.check_bit_rate(number, bits, start_pos);
                    postfix.explicit_bits = true;
                }
            }
            // Unlimited precision applies to integers only.
            'l' if number.is_floating => {
                let span = self.span_from(start_pos);
                self.blame(BlameKind::InvalidDecimalLiteral, span);
            }
            'l' => number.is_unlimited = true,
            'j' => {
                number.is_imaginary = true;
                if number.radix != Radix::Decimal {
                    let span = self.span_from(start_pos);
                    self.blame(BlameKind::InvalidComplexNumberLiteral, span);
                }
            }
            _ => unreachable!("postfix letter {letter:?}"),
        }
        postfix
    }

    fn scan_bit_rate(&mut self) -> Option<u32> {
        let start = self.cursor.offset();
        self.cursor.eat_while(|c| c.is_ascii_digit());
        let digits = self.cursor.slice_from(start);
        if digits.is_empty() {
            return None;
        }
        Some(digits.parse().unwrap_or(u32::MAX))
    }

    fn check_bit_rate(&mut self, number: &mut NumberPayload, bits: u32, start_pos: Position) {
        let (allowed, blame) = if number.is_floating {
            (&FLOAT_BIT_RATES[..], BlameKind::InvalidFloatNumberBitRate)
        } else {
            (&INTEGER_BIT_RATES[..], BlameKind::InvalidIntegerNumberBitRate)
        };
        if !allowed.contains(&bits) {
            let span = self.span_from(start_pos);
            self.blame(blame, span);
        }
        number.bits = bits;
    }

    /// Letters or digits glued to the end of the literal.
    fn scan_number_tail(&mut self, radix: Radix, postfix: Postfix) {
        let start = self.cursor.offset();
        let start_pos = self.cursor.position();
        self.cursor.eat_while(|c| c.is_alphanumeric() || c == '_');
        if self.cursor.offset() == start {
            return;
        }
        let blame = if postfix.present {
            BlameKind::ExpectedEndOfNumberAfterPostfix
        } else {
            invalid_digit(radix)
        };
        let span = self.span_from(start_pos);
        self.blame(blame, span);
    }
}

fn invalid_digit(radix: Radix) -> BlameKind {
    match radix {
        Radix::Binary => BlameKind::InvalidBinaryLiteral,
        Radix::Octal => BlameKind::InvalidOctalLiteral,
        Radix::Decimal => BlameKind::InvalidDecimalLiteral,
        Radix::Hexadecimal => BlameKind::InvalidHexadecimalLiteral,
    }
}

fn decode(number: &NumberPayload) -> NumericValue {
    if number.is_imaginary {
        return NumericValue::Complex(Complex {
            re: 0.0,
            im: float_value(number),
        });
    }
    if number.is_floating {
        return NumericValue::Float(float_value(number));
    }
    match integer_value(&number.digits, number.radix) {
        NumericValue::Int(value) if number.is_unlimited => NumericValue::BigInt(BigUint::from(value)),
        value => value,
    }
}

fn integer_value(digits: &str, radix: Radix) -> NumericValue {
    if digits.is_empty() {
        return NumericValue::Int(0);
    }
    match u64::from_str_radix(digits, radix.value()) {
        Ok(value) => NumericValue::Int(value),
        Err(_) => BigUint::parse_bytes(digits.as_bytes(), radix.value())
            .map_or(NumericValue::Int(0), NumericValue::BigInt),
    }
}

fn float_value(number: &NumberPayload) -> f64 {
    if number.radix != Radix::Decimal {
        let base = f64::from(number.radix.value());
        return number
            .digits
            .chars()
            .filter_map(|c| c.to_digit(number.radix.value()))
            .fold(0.0, |acc, d| acc * base + f64::from(d));
    }
    let digits = if number.digits.is_empty() {
        "0"
    } else {
        number.digits.as_str()
    };
    format!("{digits}e{}", number.exponent)
        .parse()
        .unwrap_or(0.0)
}

/// Smallest default width that holds `value`.
fn inferred_bits(value: &NumericValue) -> u32 {
    let significant = match value {
        NumericValue::Int(v) => u64::BITS - v.leading_zeros(),
        NumericValue::BigInt(v) => u32::try_from(v.bits()).unwrap_or(u32::MAX),
        NumericValue::Float(_) | NumericValue::Complex(_) => 0,
    };
    [NumberPayload::DEFAULT_BITS, 64, 128]
        .into_iter()
        .find(|&width| significant <= width)
        .unwrap_or(128)
}
