use std::fmt;

use axion_ir::Span;
use thiserror::Error;

use crate::BlameKind;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A recorded lexical error or warning.
///
/// Implements [`std::error::Error`] so a host can propagate a single
/// diagnostic through `?`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{}[{}]: {} at {}", .severity, .kind.code(), .kind, .span.start)]
pub struct Diagnostic {
    pub kind: BlameKind,
    pub severity: Severity,
    pub span: Span,
}

impl Diagnostic {
    /// Create a diagnostic with the kind's default severity.
    pub fn new(kind: BlameKind, span: Span) -> Self {
        Diagnostic {
            kind,
            severity: kind.severity(),
            span,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    #[inline]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}
