//! Low-level character cursor for the Axion lexer.
//!
//! The [`Cursor`] owns one source unit terminated by a [`SENTINEL`]
//! character, tracks `(line, column)` as it moves and can move backward
//! symmetrically.

mod cursor;

pub use cursor::{Cursor, SENTINEL};
