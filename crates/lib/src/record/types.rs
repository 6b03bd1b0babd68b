use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Precondition violations on incoming collections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
  /// The collection was not a JSON array.
  #[error("expected an array of records, found {found}")]
  NotAnArray { found: &'static str },

  /// An element of the collection was not a JSON object.
  #[error("record {index} is not an object, found {found}")]
  NotAnObject { index: usize, found: &'static str },
}

/// A single record: a JSON object with no fixed schema.
///
/// Records are never mutated by the engine; every derived view clones
/// or borrows them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
  /// The record's identity, if it has a scalar `id` field.
  pub fn id(&self) -> Option<String> {
    match self.0.get("id")? {
      Value::String(s) => Some(s.clone()),
      Value::Number(n) => Some(n.to_string()),
      _ => None,
    }
  }

  pub fn get(&self, field: &str) -> Option<&Value> {
    self.0.get(field)
  }

  /// Field value as display text, empty when absent or null.
  pub fn display(&self, field: &str) -> String {
    scalar_text(self.0.get(field))
  }

  /// Field value lowercased for comparison, empty when absent or null.
  pub fn text(&self, field: &str) -> String {
    self.display(field).to_lowercase()
  }

  /// Number of entries in a nested list field; 0 when absent or not a list.
  pub fn list_len(&self, field: &str) -> usize {
    match self.0.get(field) {
      Some(Value::Array(items)) => items.len(),
      _ => 0,
    }
  }

  /// Object entries of a nested list field. Non-object entries are skipped.
  pub fn nested<'a>(&'a self, field: &str) -> impl Iterator<Item = &'a Map<String, Value>> + 'a {
    let items = match self.0.get(field) {
      Some(Value::Array(items)) => items.as_slice(),
      _ => &[],
    };
    items.iter().filter_map(Value::as_object)
  }

  /// Nested list entries cloned out as standalone records.
  pub fn children(&self, field: &str) -> Vec<Record> {
    self.nested(field).cloned().map(Record).collect()
  }

  pub fn as_map(&self) -> &Map<String, Value> {
    &self.0
  }

  pub fn into_map(self) -> Map<String, Value> {
    self.0
  }
}

impl From<Map<String, Value>> for Record {
  fn from(fields: Map<String, Value>) -> Self {
    Self(fields)
  }
}

/// Converts a scalar JSON value to text. Nested structures have no scalar
/// form and read as empty.
pub fn scalar_text(value: Option<&Value>) -> String {
  match value {
    Some(Value::String(s)) => s.clone(),
    Some(Value::Number(n)) => n.to_string(),
    Some(Value::Bool(b)) => b.to_string(),
    Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) | None => String::new(),
  }
}

fn kind_of(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

/// Converts a fetched JSON payload into records.
///
/// # Errors
///
/// Fails fast when the payload is not an array of objects; the engine is
/// never run on a collection of the wrong shape.
pub fn records_from_value(value: Value) -> Result<Vec<Record>, RecordError> {
  let items = match value {
    Value::Array(items) => items,
    other => return Err(RecordError::NotAnArray { found: kind_of(&other) }),
  };

  items
    .into_iter()
    .enumerate()
    .map(|(index, item)| match item {
      Value::Object(map) => Ok(Record(map)),
      other => Err(RecordError::NotAnObject {
        index,
        found: kind_of(&other),
      }),
    })
    .collect()
}
