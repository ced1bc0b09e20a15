//! Diagnostic system for the Axion front end.
//!
//! Lexical problems are never fatal. Each one becomes a [`Diagnostic`]:
//! - a [`BlameKind`] naming what went wrong (with a stable code such as `AX0012`)
//! - a [`Severity`] derived from the kind
//! - a [`Span`](axion_ir::Span) locating it
//!
//! Scanners append diagnostics to a [`Diagnostics`] sink. The sink is
//! append-only; the driver reads it after scanning and renders entries
//! with [`emitter::render`].

mod blame;
mod diagnostic;
pub mod emitter;
mod sink;

pub use blame::BlameKind;
pub use diagnostic::{Diagnostic, Severity};
pub use sink::Diagnostics;
