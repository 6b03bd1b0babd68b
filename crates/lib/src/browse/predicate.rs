//! Free-text record matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::ParseError;
use crate::record::{Record, scalar_text};

/// A searchable lookup on a record.
///
/// Written as `name` for a top-level field or `list[].field` for a field
/// of every entry in a nested list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldPath {
  Field(String),
  Nested { list: String, field: String },
}

impl FieldPath {
  pub fn field(name: &str) -> Self {
    FieldPath::Field(name.to_string())
  }

  pub fn nested(list: &str, field: &str) -> Self {
    FieldPath::Nested {
      list: list.to_string(),
      field: field.to_string(),
    }
  }

  /// True if any value this path reaches contains `needle`, which must
  /// already be lowercased.
  fn contains(&self, record: &Record, needle: &str) -> bool {
    match self {
      FieldPath::Field(name) => record.text(name).contains(needle),
      FieldPath::Nested { list, field } => record
        .nested(list)
        .any(|entry| scalar_text(entry.get(field)).to_lowercase().contains(needle)),
    }
  }
}

impl fmt::Display for FieldPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FieldPath::Field(name) => f.write_str(name),
      FieldPath::Nested { list, field } => write!(f, "{}[].{}", list, field),
    }
  }
}

impl FromStr for FieldPath {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = |reason: &'static str| ParseError::InvalidFieldPath {
      path: s.to_string(),
      reason,
    };

    match s.split_once("[].") {
      Some((list, field)) => {
        if list.is_empty() || field.is_empty() {
          return Err(invalid("list and field names must be non-empty"));
        }
        if field.contains("[].") {
          return Err(invalid("only one level of nesting is supported"));
        }
        Ok(FieldPath::nested(list, field))
      }
      None if s.is_empty() => Err(invalid("empty path")),
      None if s.contains('[') || s.contains(']') => Err(invalid("expected 'list[].field'")),
      None => Ok(FieldPath::field(s)),
    }
  }
}

impl TryFrom<String> for FieldPath {
  type Error = ParseError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<FieldPath> for String {
  fn from(path: FieldPath) -> Self {
    path.to_string()
  }
}

/// Case-insensitive substring match of `term` against `fields` of `record`.
///
/// An empty term matches every record. Field names themselves are never
/// searched, only their values.
pub fn matches(record: &Record, term: &str, fields: &[FieldPath]) -> bool {
  matches_lowered(record, &term.to_lowercase(), fields)
}

pub(crate) fn matches_lowered(record: &Record, needle: &str, fields: &[FieldPath]) -> bool {
  needle.is_empty() || fields.iter().any(|path| path.contains(record, needle))
}
