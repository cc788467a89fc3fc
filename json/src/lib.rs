//! A JSON value tree and three independent parsers for it: lexer-driven
//! recursive descent ([`lexed`]), regex-driven recursive descent
//! ([`pattern`]), and a single-pass byte-stream parser ([`stream`]).
//!
//! Numbers are never converted; they stay as their decimal digit strings
//! so callers can hand them to an arbitrary-precision engine untouched.

pub mod lexed;
pub mod pattern;
pub mod stream;

mod error;
mod value;

pub use error::ParseError;
pub use value::{Item, Value};
