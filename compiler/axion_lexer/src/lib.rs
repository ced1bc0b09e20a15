//! Lexical scanner for the Axion language.
//!
//! Turns source text into a lossless token sequence: concatenating each
//! token's text and trailing whitespace reproduces the input. Problems are
//! reported as [`Diagnostic`](axion_diagnostic::Diagnostic)s and never stop
//! the scan.
//!
//! Block structure comes from indentation and is made explicit with
//! `Indent` and `Outdent` tokens, which always balance by `EndOfStream`.
//!
//! # Usage
//!
//! ```text
//! let output = axion_lexer::lex("if x:\n    y\n", &LexerConfig::default())?;
//! for token in &output.tokens { ... }
//! ```
//!
//! For input arriving in chunks, drive a [`Lexer`] with
//! [`run`](Lexer::run) and [`feed`](Lexer::feed).
//!
//! # Logging
//!
//! Scanning is instrumented with `tracing`. Call [`init_tracing`] and set
//! `RUST_LOG` (e.g. `RUST_LOG=axion_lexer=trace`) to see per-token events.

mod comment;
mod config;
mod escape;
mod layout;
mod lexer;
mod number;
mod punct;
mod quoted;
mod tables;
mod word;

pub use config::{ConfigError, LexerConfig};
pub use layout::IndentState;
pub use lexer::Lexer;

use axion_diagnostic::Diagnostics;
use axion_ir::Token;

/// Tokens and diagnostics of a complete source unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Diagnostics,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// The source text, rebuilt from the tokens.
    pub fn reconstruct(&self) -> String {
        axion_ir::reconstruct(&self.tokens)
    }
}

/// Scan a complete source unit.
pub fn lex(source: &str, config: &LexerConfig) -> Result<LexOutput, ConfigError> {
    let mut lexer = Lexer::new(source, config.clone())?;
    lexer.run();
    let (tokens, diagnostics) = lexer.into_parts();
    Ok(LexOutput {
        tokens,
        diagnostics,
    })
}

/// Initialize tracing from `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and only takes effect once.
pub fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
