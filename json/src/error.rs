use std::io;

use thiserror::Error;

use crate::lexed::TokenSet;

#[derive(Debug, Error)]
pub enum ParseError {
  #[error("lexing error at byte {0}")]
  Lex(usize),
  #[error("expected one of {expected:?}; found `{found}`")]
  Unexpected { expected: TokenSet, found: String },
  #[error("{wanted} expected but `{found}` found")]
  Expected { wanted: String, found: String },
  #[error("illegal symbol at byte {0}")]
  Symbol(usize),
  #[error("malformed document")]
  Syntax,
  #[error("no digits after `{after}` found")]
  MissingDigits { after: char },
  #[error("`{0}` expected but some unknown identifier found")]
  Keyword(&'static str),
  #[error("unexpected end of input")]
  UnexpectedEnd,
  #[error(transparent)]
  Io(#[from] io::Error),
}
