//! Lexer-driven recursive descent: a [`logos`] token stream consumed by a
//! parser that tracks the set of expected tokens for diagnostics.

use std::fmt::{self, Debug};

use indexmap::IndexMap;
use logos::Logos;

use crate::{value::unescape, Item, ParseError, Value};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[repr(u8)]
pub enum Token {
  #[token("{")]
  OpenBrace,
  #[token("}")]
  CloseBrace,
  #[token("[")]
  OpenBracket,
  #[token("]")]
  CloseBracket,
  #[token(",")]
  Comma,
  #[token(":")]
  Colon,
  #[token("true")]
  True,
  #[token("false")]
  False,
  #[regex(r#""(?:[^"\\]|\\.)*""#)]
  Str,
  #[regex(r"-?[0-9]+(\.[0-9]+)?([eE]-?[0-9]+)?", priority = 3)]
  Num,
  #[regex(r#"[^ \t\r\n\f{}\[\],:"]+"#, priority = 1)]
  Word,
}

const TOKENS: [Token; 11] = [
  Token::OpenBrace,
  Token::CloseBrace,
  Token::OpenBracket,
  Token::CloseBracket,
  Token::Comma,
  Token::Colon,
  Token::True,
  Token::False,
  Token::Str,
  Token::Num,
  Token::Word,
];

/// The set of token kinds a parse position would have accepted.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenSet(u16);

impl TokenSet {
  fn reset(&mut self) {
    self.0 = 0;
  }

  fn add(&mut self, kind: Token) {
    self.0 |= 1 << kind as u8;
  }

  fn contains(self, kind: Token) -> bool {
    self.0 & (1 << kind as u8) != 0
  }
}

impl Debug for TokenSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(TOKENS.into_iter().filter(|&kind| self.contains(kind))).finish()
  }
}

/// Parses a JSON document to a [`Value`] tree.
pub fn parse(text: &str) -> Result<Value, ParseError> {
  LexedParser::new(text)?.parse_value()
}

struct LexedParser<'src> {
  lexer: logos::Lexer<'src, Token>,
  token: Option<Token>,
  expected: TokenSet,
}

impl<'src> LexedParser<'src> {
  fn new(text: &'src str) -> Result<Self, ParseError> {
    let mut parser =
      LexedParser { lexer: Token::lexer(text), token: None, expected: TokenSet::default() };
    parser.bump()?;
    Ok(parser)
  }

  fn bump(&mut self) -> Result<(), ParseError> {
    self.expected.reset();
    self.token = match self.lexer.next() {
      Some(Ok(token)) => Some(token),
      Some(Err(())) => return Err(ParseError::Lex(self.lexer.span().start)),
      None => None,
    };
    Ok(())
  }

  fn check(&mut self, kind: Token) -> bool {
    self.expected.add(kind);
    self.token == Some(kind)
  }

  fn eat(&mut self, kind: Token) -> Result<bool, ParseError> {
    let matches = self.check(kind);
    if matches {
      self.bump()?;
    }
    Ok(matches)
  }

  fn expect(&mut self, kind: Token) -> Result<&'src str, ParseError> {
    if self.check(kind) {
      let slice = self.lexer.slice();
      self.bump()?;
      Ok(slice)
    } else {
      self.unexpected()
    }
  }

  fn unexpected<T>(&self) -> Result<T, ParseError> {
    Err(ParseError::Unexpected {
      expected: self.expected,
      found: match self.token {
        Some(_) => self.lexer.slice().to_owned(),
        None => "end of input".to_owned(),
      },
    })
  }

  fn parse_value(&mut self) -> Result<Value, ParseError> {
    if self.eat(Token::OpenBrace)? {
      let mut dict = IndexMap::new();
      loop {
        if self.check(Token::CloseBrace) {
          break;
        }
        let key = unescape(self.expect(Token::Str)?);
        self.expect(Token::Colon)?;
        let value = self.parse_value()?;
        dict.insert(key, value);
        if !self.eat(Token::Comma)? {
          break;
        }
      }
      self.expect(Token::CloseBrace)?;
      return Ok(Value::Dict(dict));
    }

    if self.eat(Token::OpenBracket)? {
      let mut list = Vec::new();
      loop {
        if self.check(Token::CloseBracket) {
          break;
        }
        list.push(self.parse_value()?);
        if !self.eat(Token::Comma)? {
          break;
        }
      }
      self.expect(Token::CloseBracket)?;
      return Ok(Value::List(list));
    }

    if self.check(Token::Str) {
      let slice = self.expect(Token::Str)?;
      return Ok(Value::Item(Item::quoted(unescape(slice))));
    }

    for kind in [Token::Num, Token::True, Token::False] {
      if self.check(kind) {
        let slice = self.expect(kind)?;
        return Ok(Value::Item(Item::unquoted(slice)));
      }
    }

    // bare words are accepted as if they had been quoted
    if self.check(Token::Word) {
      let slice = self.expect(Token::Word)?;
      return Ok(Value::Item(Item::quoted(slice)));
    }

    self.unexpected()
  }
}
