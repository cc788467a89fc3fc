//! Single-pass stream parsing: one byte of lookahead over any
//! [`io::Read`], no backtracking, strict delimiter checking.

use std::io::{self, Read};

use indexmap::IndexMap;

use crate::{Item, ParseError, Value};

/// Parses a JSON document from a byte stream to a [`Value`] tree.
pub fn parse(reader: impl Read) -> Result<Value, ParseError> {
  Stream::new(reader).parse_value()
}

struct Stream<R: Read> {
  bytes: io::Bytes<R>,
  peeked: Option<u8>,
}

impl<R: Read> Stream<R> {
  fn new(reader: R) -> Self {
    Stream { bytes: reader.bytes(), peeked: None }
  }

  fn next(&mut self) -> Result<Option<u8>, ParseError> {
    if let Some(byte) = self.peeked.take() {
      return Ok(Some(byte));
    }
    Ok(self.bytes.next().transpose()?)
  }

  fn put_back(&mut self, byte: u8) {
    self.peeked = Some(byte);
  }

  fn next_or_end(&mut self) -> Result<u8, ParseError> {
    self.next()?.ok_or(ParseError::UnexpectedEnd)
  }

  /// The next byte that is not whitespace.
  fn next_token(&mut self) -> Result<u8, ParseError> {
    loop {
      let byte = self.next_or_end()?;
      if !matches!(byte, b'\n' | b'\t' | b'\r' | b' ') {
        return Ok(byte);
      }
    }
  }

  fn parse_value(&mut self) -> Result<Value, ParseError> {
    let first = self.next_token()?;
    self.parse_value_from(first)
  }

  fn parse_value_from(&mut self, first: u8) -> Result<Value, ParseError> {
    match first {
      b'{' => self.parse_dict(),
      b'[' => self.parse_list(),
      b'"' => Ok(Value::Item(Item::quoted(self.parse_string()?))),
      b't' => {
        self.expect_word("rue", "true")?;
        Ok(Value::Item(Item::unquoted("true")))
      }
      b'f' => {
        self.expect_word("alse", "false")?;
        Ok(Value::Item(Item::unquoted("false")))
      }
      b'-' | b'0'..=b'9' => Ok(Value::Item(Item::unquoted(self.parse_number(first)?))),
      _ => Err(ParseError::Syntax),
    }
  }

  fn parse_dict(&mut self) -> Result<Value, ParseError> {
    let mut dict = IndexMap::new();
    let mut next = self.next_token()?;
    while next != b'}' {
      if next != b'"' {
        return Err(expected("`\"`", next));
      }
      let key = self.parse_string()?;
      let colon = self.next_token()?;
      if colon != b':' {
        return Err(expected("`:`", colon));
      }
      let value = self.parse_value()?;
      dict.insert(key, value);
      next = self.next_token()?;
      if next == b',' {
        next = self.next_token()?;
      } else if next != b'}' {
        return Err(expected("`,` or `}`", next));
      }
    }
    Ok(Value::Dict(dict))
  }

  fn parse_list(&mut self) -> Result<Value, ParseError> {
    let mut list = Vec::new();
    let mut next = self.next_token()?;
    while next != b']' {
      list.push(self.parse_value_from(next)?);
      next = self.next_token()?;
      if next == b',' {
        next = self.next_token()?;
      } else if next != b']' {
        return Err(expected("`,` or `]`", next));
      }
    }
    Ok(Value::List(list))
  }

  /// Reads up to the closing quote; a backslash takes the byte after it
  /// literally. Multi-byte characters pass through untouched, since no
  /// UTF-8 continuation byte collides with `"` or `\`.
  fn parse_string(&mut self) -> Result<String, ParseError> {
    let mut bytes = Vec::new();
    loop {
      match self.next_or_end()? {
        b'"' => return String::from_utf8(bytes).map_err(|_| ParseError::Syntax),
        b'\\' => bytes.push(self.next_or_end()?),
        byte => bytes.push(byte),
      }
    }
  }

  /// `digits [. digits] [eE [-] digits]`, with the byte after the number
  /// pushed back for the caller.
  fn parse_number(&mut self, first: u8) -> Result<String, ParseError> {
    let mut text = String::from(first as char);
    let (any, mut next) = self.read_digits(&mut text)?;
    if first == b'-' && !any {
      return Err(ParseError::MissingDigits { after: '-' });
    }
    if next == Some(b'.') {
      text.push('.');
      let (any, after) = self.read_digits(&mut text)?;
      if !any {
        return Err(ParseError::MissingDigits { after: '.' });
      }
      next = after;
    }
    if let Some(exponent @ (b'e' | b'E')) = next {
      text.push(exponent as char);
      match self.next()? {
        Some(b'-') => text.push('-'),
        Some(other) => self.put_back(other),
        None => {}
      }
      let (any, after) = self.read_digits(&mut text)?;
      if !any {
        return Err(ParseError::MissingDigits { after: exponent as char });
      }
      next = after;
    }
    if let Some(byte) = next {
      self.put_back(byte);
    }
    Ok(text)
  }

  fn read_digits(&mut self, text: &mut String) -> Result<(bool, Option<u8>), ParseError> {
    let mut any = false;
    loop {
      match self.next()? {
        Some(byte) if byte.is_ascii_digit() => {
          text.push(byte as char);
          any = true;
        }
        other => return Ok((any, other)),
      }
    }
  }

  fn expect_word(&mut self, rest: &str, word: &'static str) -> Result<(), ParseError> {
    for wanted in rest.bytes() {
      if self.next()? != Some(wanted) {
        return Err(ParseError::Keyword(word));
      }
    }
    Ok(())
  }
}

fn expected(wanted: &str, found: u8) -> ParseError {
  ParseError::Expected { wanted: wanted.to_owned(), found: (found as char).to_string() }
}
