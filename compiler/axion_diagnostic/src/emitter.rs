//! Terminal emitter
//!
//! Human-readable diagnostic output with a source snippet, a caret
//! underline and optional ANSI colors.

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes diagnostics for one source unit.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn paint(&mut self, text: &str, color: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{color}{text}{}", colors::RESET)
        } else {
            write!(self.writer, "{text}")
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        }
    }

    /// Write one diagnostic with its source snippet.
    ///
    /// ```text
    /// error[AX0101]: string literal is not closed
    ///  --> 2:9
    ///   |
    /// 2 | let s = "abc
    ///   |         ^^^^
    /// ```
    pub fn emit(&mut self, diagnostic: &Diagnostic, source: &str) -> io::Result<()> {
        let color = Self::severity_color(diagnostic.severity);
        self.paint(&diagnostic.severity.to_string(), color)?;
        self.paint(&format!("[{}]", diagnostic.kind.code()), colors::BOLD)?;
        writeln!(self.writer, ": {}", diagnostic.kind)?;

        let start = diagnostic.span.start;
        let line_no = (start.line + 1).to_string();
        let pad = " ".repeat(line_no.len());
        self.paint(&format!("{pad}-->"), colors::GUTTER)?;
        writeln!(self.writer, " {start}")?;

        let Some(line) = source.lines().nth(start.line as usize) else {
            return writeln!(self.writer);
        };
        let line = line.trim_end_matches('\r');

        self.paint(&format!("{pad} |"), colors::GUTTER)?;
        writeln!(self.writer)?;
        self.paint(&format!("{line_no} |"), colors::GUTTER)?;
        writeln!(self.writer, " {line}")?;
        self.paint(&format!("{pad} |"), colors::GUTTER)?;

        let (offset, width) = caret_range(diagnostic, line);
        write!(self.writer, " {}", " ".repeat(offset))?;
        self.paint(&"^".repeat(width), color)?;
        writeln!(self.writer)?;
        writeln!(self.writer)
    }

    pub fn emit_all(&mut self, diagnostics: &[Diagnostic], source: &str) -> io::Result<()> {
        for diagnostic in diagnostics {
            self.emit(diagnostic, source)?;
        }
        Ok(())
    }

    /// Closing line counting errors and warnings. Writes nothing when both are zero.
    pub fn emit_summary(&mut self, error_count: usize, warning_count: usize) -> io::Result<()> {
        if error_count > 0 {
            self.paint("error", colors::ERROR)?;
            write!(
                self.writer,
                ": {error_count} lexical error{}",
                plural_s(error_count)
            )?;
            if warning_count > 0 {
                write!(
                    self.writer,
                    "; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                )?;
            }
            writeln!(self.writer)
        } else if warning_count > 0 {
            self.paint("warning", colors::WARNING)?;
            writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            )
        } else {
            Ok(())
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Column offset and caret width for a diagnostic on its first line.
///
/// Multi-line spans are underlined to the end of the first line. Empty
/// spans get a single caret.
fn caret_range(diagnostic: &Diagnostic, line: &str) -> (usize, usize) {
    let span = diagnostic.span;
    let line_len = line.chars().count();
    let offset = (span.start.column as usize).min(line_len);
    let end = if span.is_single_line() {
        span.end.column as usize
    } else {
        line_len
    };
    (offset, end.saturating_sub(offset).max(1))
}

/// Render a diagnostic without colors.
pub fn render(diagnostic: &Diagnostic, source: &str) -> String {
    let mut out = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut out, ColorMode::Never, false);
    // Writing into a Vec cannot fail.
    let _ = emitter.emit(diagnostic, source);
    String::from_utf8_lossy(&out).into_owned()
}
