//! Regex-driven recursive descent: each leaf form is a compiled pattern
//! matched at the cursor, with structural punctuation read directly.

use indexmap::IndexMap;
use regex::Regex;

use crate::{value::unescape, Item, ParseError, Value};

/// Parses a JSON document to a [`Value`] tree.
pub fn parse(text: &str) -> Result<Value, ParseError> {
  let patterns = Patterns::new();
  let mut matcher = Matcher { text, index: 0 };
  matcher.parse_value(&patterns)
}

struct Patterns {
  number: Regex,
  string: Regex,
  boolean: Regex,
}

impl Patterns {
  fn new() -> Self {
    Patterns {
      number: Regex::new(r"-?[0-9]+(?:\.[0-9]+)?(?:[eE]-?[0-9]+)?").unwrap(),
      string: Regex::new(r#""(?:\\.|[^"])*""#).unwrap(),
      boolean: Regex::new("false|true").unwrap(),
    }
  }
}

struct Matcher<'src> {
  text: &'src str,
  index: usize,
}

impl<'src> Matcher<'src> {
  fn skip_blank(&mut self) {
    let rest = &self.text[self.index..];
    let trimmed = rest.trim_start_matches(['\n', '\t', '\r', ' ']);
    self.index += rest.len() - trimmed.len();
  }

  fn peek(&mut self, wanted: char) -> bool {
    self.skip_blank();
    self.text[self.index..].starts_with(wanted)
  }

  fn eat(&mut self, wanted: char) -> bool {
    let matches = self.peek(wanted);
    if matches {
      self.index += wanted.len_utf8();
    }
    matches
  }

  fn expect(&mut self, wanted: char) -> Result<(), ParseError> {
    if self.eat(wanted) {
      Ok(())
    } else {
      Err(ParseError::Expected {
        wanted: format!("`{wanted}`"),
        found: match self.text[self.index..].chars().next() {
          Some(found) => found.to_string(),
          None => "end of input".to_owned(),
        },
      })
    }
  }

  /// Matches `pattern` exactly at the cursor, advancing past it.
  fn read(&mut self, pattern: &Regex) -> Option<&'src str> {
    self.skip_blank();
    let found = pattern.find_at(self.text, self.index)?;
    if found.start() != self.index {
      return None;
    }
    self.index = found.end();
    Some(found.as_str())
  }

  fn parse_value(&mut self, patterns: &Patterns) -> Result<Value, ParseError> {
    if self.eat('{') {
      let mut dict = IndexMap::new();
      loop {
        if self.peek('}') {
          break;
        }
        let key = match self.read(&patterns.string) {
          Some(slice) => unescape(slice),
          None => return Err(ParseError::Symbol(self.index)),
        };
        self.expect(':')?;
        let value = self.parse_value(patterns)?;
        dict.insert(key, value);
        if !self.eat(',') {
          break;
        }
      }
      self.expect('}')?;
      return Ok(Value::Dict(dict));
    }

    if self.eat('[') {
      let mut list = Vec::new();
      loop {
        if self.peek(']') {
          break;
        }
        list.push(self.parse_value(patterns)?);
        if !self.eat(',') {
          break;
        }
      }
      self.expect(']')?;
      return Ok(Value::List(list));
    }

    if let Some(slice) = self.read(&patterns.string) {
      return Ok(Value::Item(Item::quoted(unescape(slice))));
    }
    if let Some(slice) = self.read(&patterns.number).or_else(|| self.read(&patterns.boolean)) {
      return Ok(Value::Item(Item::unquoted(slice)));
    }
    Err(ParseError::Symbol(self.index))
  }
}
