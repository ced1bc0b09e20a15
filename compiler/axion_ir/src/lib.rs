//! Axion IR - token-level representation types
//!
//! This crate contains the data structures shared by the Axion front end:
//! - Positions and spans for source locations
//! - Tokens, token kinds and their sub-kinds (keywords, operators, symbols)
//! - Literal payloads carrying decoded number, string and character values
//!
//! # Design Philosophy
//!
//! - **One closed kind enum**: every token is a [`Token`] with a [`TokenKind`];
//!   kind-specific data lives in an optional [`LiteralPayload`], so consumers
//!   dispatch with exhaustive `match` instead of downcasting.
//! - **Lossless**: `text + trailing_whitespace` of every token, in order,
//!   reproduces the scanned source (see [`reconstruct`]).

mod keyword;
mod literal;
mod operator;
mod span;
mod symbol;
mod token;

pub use keyword::Keyword;
pub use literal::{
    CharPayload, CommentPayload, Complex, Interpolation, LiteralPayload, NumberPayload,
    NumericValue, Radix, StringPayload,
};
pub use operator::{Arity, Operator};
pub use span::{Position, Span};
pub use symbol::{BracketSide, Symbol};
pub use token::{reconstruct, CommentKind, Token, TokenKind};

pub use num_bigint::BigUint;
