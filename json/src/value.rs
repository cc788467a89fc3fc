use std::fmt::{self, Display};

use indexmap::IndexMap;

/// A node of a parsed JSON tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Item(Item),
  List(Vec<Value>),
  Dict(IndexMap<String, Value>),
}

/// A leaf value. Strings are `quoted`; numbers, booleans, and bare words
/// are not. Numeric text is kept verbatim, never converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
  pub text: String,
  pub quoted: bool,
}

impl Item {
  pub fn quoted(text: impl Into<String>) -> Self {
    Item { text: text.into(), quoted: true }
  }

  pub fn unquoted(text: impl Into<String>) -> Self {
    Item { text: text.into(), quoted: false }
  }
}

impl Value {
  /// The entry under `key`, if this is a dict that contains it.
  pub fn get(&self, key: &str) -> Option<&Value> {
    match self {
      Value::Dict(dict) => dict.get(key),
      _ => None,
    }
  }

  /// The element at `index`, if this is a list that long.
  pub fn at(&self, index: usize) -> Option<&Value> {
    match self {
      Value::List(list) => list.get(index),
      _ => None,
    }
  }

  /// The leaf text, if this is an item.
  pub fn text(&self) -> Option<&str> {
    match self {
      Value::Item(item) => Some(&item.text),
      _ => None,
    }
  }
}

impl Display for Item {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.quoted {
      write!(f, "\"{}\"", escape(&self.text))
    } else {
      write!(f, "{}", self.text)
    }
  }
}

impl Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Item(item) => write!(f, "{item}"),
      Value::List(list) => {
        write!(f, "[")?;
        for (index, value) in list.iter().enumerate() {
          if index > 0 {
            write!(f, ", ")?;
          }
          write!(f, "{value}")?;
        }
        write!(f, "]")
      }
      Value::Dict(dict) => {
        write!(f, "{{")?;
        for (index, (key, value)) in dict.iter().enumerate() {
          if index > 0 {
            write!(f, ", ")?;
          }
          write!(f, "\"{}\": {value}", escape(key))?;
        }
        write!(f, "}}")
      }
    }
  }
}

fn escape(text: &str) -> String {
  text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Strips the surrounding quotes from a string token; a backslash takes
/// the character after it literally.
pub(crate) fn unescape(slice: &str) -> String {
  let inner = &slice[1..slice.len() - 1];
  let mut text = String::with_capacity(inner.len());
  let mut chars = inner.chars();
  while let Some(c) = chars.next() {
    if c == '\\' {
      if let Some(escaped) = chars.next() {
        text.push(escaped);
      }
    } else {
      text.push(c);
    }
  }
  text
}

#[cfg(test)]
mod tests {
  use indexmap::IndexMap;

  use crate::{Item, Value};

  #[test]
  fn display_round_trip() {
    let mut dict = IndexMap::new();
    dict.insert("name".to_owned(), Value::Item(Item::quoted("fileA.txt")));
    dict.insert("size".to_owned(), Value::Item(Item::unquoted("101424")));
    let value = Value::List(vec![Value::Dict(dict), Value::Item(Item::unquoted("true"))]);
    assert_eq!(value.to_string(), r#"[{"name": "fileA.txt", "size": 101424}, true]"#);
  }

  #[test]
  fn accessors() {
    let value = crate::lexed::parse(r#"{"files": [{"name": "a", "size": 7}]}"#).unwrap();
    let file = value.get("files").and_then(|files| files.at(0)).unwrap();
    assert_eq!(file.get("name").and_then(Value::text), Some("a"));
    assert_eq!(file.get("size").and_then(Value::text), Some("7"));
    assert_eq!(value.get("missing"), None);
    assert_eq!(value.at(0), None);
  }
}
