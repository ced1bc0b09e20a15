//! Character cursor over a sentinel-terminated source unit.
//!
//! The cursor owns the source text with one [`SENTINEL`] appended and walks
//! it character by character, keeping a zero-based `(line, column)` in sync.
//! Reading at or past the end always yields the sentinel; movement never
//! panics and stops at either end.
//!
//! # Interior Null Characters
//!
//! A `'\0'` before the end of the source is ordinary content. The cursor
//! tells it apart from the sentinel by offset: [`Cursor::is_eof`] is only
//! true at the final character.
//!
//! # Backward Movement
//!
//! Moving back across a `\n` must restore the column at the end of the
//! previous line, which cannot be derived from the offset delta alone. The
//! cursor remembers the length of the line before the current one and
//! recomputes the next one lazily when it steps back over a line break.

use axion_ir::Position;

/// End-of-stream marker appended to every source unit.
pub const SENTINEL: char = '\0';

const SENTINEL_LEN: usize = SENTINEL.len_utf8();

/// Cursor over one source unit.
#[derive(Clone, Debug)]
pub struct Cursor {
    /// Source text followed by exactly one sentinel.
    text: String,
    /// Byte offset of the current character.
    pos: usize,
    line: u32,
    column: u32,
    /// Length in characters of the line before `line`, newline excluded.
    prev_line_len: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::new("")
    }
}

impl Cursor {
    /// Create a cursor at the start of `source`.
    ///
    /// The sentinel is appended unless `source` already ends with it.
    pub fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len() + SENTINEL_LEN);
        text.push_str(source);
        if !text.ends_with(SENTINEL) {
            text.push(SENTINEL);
        }
        Cursor {
            text,
            pos: 0,
            line: 0,
            column: 0,
            prev_line_len: 0,
        }
    }

    /// Byte length of the source, sentinel excluded.
    #[inline]
    fn source_len(&self) -> usize {
        self.text.len() - SENTINEL_LEN
    }

    /// The source text without the sentinel.
    #[inline]
    pub fn source(&self) -> &str {
        &self.text[..self.source_len()]
    }

    /// The character at the cursor, or the sentinel at the end.
    #[inline]
    pub fn current(&self) -> char {
        self.text[self.pos..].chars().next().unwrap_or(SENTINEL)
    }

    /// The character after the current one, or the sentinel past the end.
    #[inline]
    pub fn peek(&self) -> char {
        let mut chars = self.text[self.pos..].chars();
        chars.next();
        chars.next().unwrap_or(SENTINEL)
    }

    /// Up to `len` characters starting at the current one.
    ///
    /// Clipped to the remaining source; never includes the sentinel.
    pub fn peek_n(&self, len: usize) -> &str {
        let rest = self.remaining();
        match rest.char_indices().nth(len) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    /// From the current character to the next `\n` inclusive, or to the end.
    pub fn rest_of_line(&self) -> &str {
        let rest = self.remaining();
        match memchr::memchr(b'\n', rest.as_bytes()) {
            Some(nl) => &rest[..=nl],
            None => rest,
        }
    }

    /// Source text from the current character to the end.
    #[inline]
    pub fn remaining(&self) -> &str {
        &self.text[self.pos.min(self.source_len())..self.source_len()]
    }

    /// Move by `n` characters; negative values move backward.
    ///
    /// Stops at the sentinel going forward and at the first character going
    /// backward.
    pub fn advance(&mut self, n: i32) {
        if n >= 0 {
            for _ in 0..n {
                if !self.step_forward() {
                    break;
                }
            }
        } else {
            for _ in 0..n.unsigned_abs() {
                if !self.step_back() {
                    break;
                }
            }
        }
    }

    /// Consume and return the current character.
    ///
    /// Returns the sentinel without moving at the end.
    #[inline]
    pub fn bump(&mut self) -> char {
        let c = self.current();
        self.step_forward();
        c
    }

    /// Consume the current character if it equals `c`.
    #[inline]
    pub fn eat(&mut self, c: char) -> bool {
        if !self.is_eof() && self.current() == c {
            self.step_forward();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds. Never consumes the sentinel.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.step_forward();
        }
    }

    fn step_forward(&mut self) -> bool {
        if self.pos >= self.source_len() {
            return false;
        }
        let c = self.current();
        self.pos += c.len_utf8();
        if c == '\n' {
            self.prev_line_len = self.column;
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        true
    }

    fn step_back(&mut self) -> bool {
        let Some(c) = self.text[..self.pos].chars().next_back() else {
            return false;
        };
        self.pos -= c.len_utf8();
        if c == '\n' {
            self.line = self.line.saturating_sub(1);
            self.column = self.prev_line_len;
            self.prev_line_len = self.length_of_line_before(self.line_start(self.pos));
        } else {
            self.column = self.column.saturating_sub(1);
        }
        true
    }

    /// Byte offset where the line containing `offset` starts.
    fn line_start(&self, offset: usize) -> usize {
        memchr::memrchr(b'\n', &self.text.as_bytes()[..offset]).map_or(0, |nl| nl + 1)
    }

    /// Character length of the line that ends right before `line_start`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line lengths are bounded by the source size"
    )]
    fn length_of_line_before(&self, line_start: usize) -> u32 {
        if line_start == 0 {
            return 0;
        }
        let end = line_start - 1;
        let start = self.line_start(end);
        self.text[start..end].chars().count() as u32
    }

    /// Whether the cursor is on the sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len()
    }

    /// Whether the current character ends a line (`\r`, `\n` or the end).
    #[inline]
    pub fn at_end_of_line(&self) -> bool {
        self.is_eof() || matches!(self.current(), '\n' | '\r')
    }

    /// Current `(line, column)`.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Source between two byte offsets.
    ///
    /// Offsets must come from [`offset`](Self::offset) so they fall on
    /// character boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.text[start..end.min(self.source_len())]
    }

    /// Source from `start` to the current offset.
    pub fn slice_from(&self, start: usize) -> &str {
        self.slice(start, self.pos)
    }

    /// Append another chunk of the same source unit.
    ///
    /// A `\n` separates the chunk from existing content that does not end
    /// with one. The cursor stays where it was, so scanning resumes at the
    /// separator or the first character of the chunk.
    pub fn append(&mut self, chunk: &str) {
        self.text.truncate(self.source_len());
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.text.push_str(chunk.strip_suffix(SENTINEL).unwrap_or(chunk));
        self.text.push(SENTINEL);
    }
}
