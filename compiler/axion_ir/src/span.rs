//! Source locations.
//!
//! Positions are zero-based `(line, column)` pairs counted in characters.
//! They render one-based for humans.

use std::fmt;

/// A zero-based `(line, column)` coordinate in a source unit.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first character of a source unit.
    pub const START: Position = Position { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Half-open range between two positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Placeholder span for synthesized tokens in tests.
    pub const DUMMY: Span = Span {
        start: Position::START,
        end: Position::START,
    };

    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `pos`.
    #[inline]
    pub const fn point(pos: Position) -> Self {
        Span { start: pos, end: pos }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the span starts and ends on the same line.
    #[inline]
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}
