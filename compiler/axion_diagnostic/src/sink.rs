//! Append-only diagnostic collection for one source unit.

use axion_ir::Span;

use crate::{BlameKind, Diagnostic};

/// Ordered, append-only list of diagnostics.
///
/// Entries are never removed or reordered once pushed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem of `kind` at `span`.
    pub fn blame(&mut self, kind: BlameKind, span: Span) {
        tracing::trace!(code = kind.code(), %kind, line = span.start.line, "diagnostic");
        self.items.push(Diagnostic::new(kind, span));
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Append every diagnostic of `other`, preserving order.
    pub fn append(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.is_warning())
    }

    /// Whether any entry has the given kind.
    pub fn contains(&self, kind: BlameKind) -> bool {
        self.items.iter().any(|d| d.kind == kind)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
