use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{Record, scalar_text};

/// Shape of a schema-less record's nested field list, e.g. discovered data
/// entities carrying `fields: [{field_name, field_value}, ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedFields {
  /// Name of the list field on the parent record.
  pub list: String,
  /// Key holding each entry's field name.
  pub name_key: String,
  /// Key holding each entry's field value.
  pub value_key: String,
}

impl NestedFields {
  pub fn new(list: &str, name_key: &str, value_key: &str) -> Self {
    Self {
      list: list.to_string(),
      name_key: name_key.to_string(),
      value_key: value_key.to_string(),
    }
  }
}

/// A value two records can be ordered by.
///
/// Counts stay numeric so that `10` sorts after `9`. A record set never
/// mixes the two variants for one column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Comparable {
  Number(usize),
  Text(String),
}

/// How a sort column key is read from a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
  /// A top-level scalar field.
  Field(String),
  /// Derived: length of a nested list.
  Count { list: String },
  /// The value of the named entry inside a nested field list.
  Nested { fields: NestedFields, name: String },
}

/// Resolves `column` on `record`. Missing data reads as empty text.
pub fn resolve(record: &Record, column: &Column) -> Comparable {
  match column {
    Column::Field(name) => Comparable::Text(record.text(name)),
    Column::Count { list } => Comparable::Number(record.list_len(list)),
    Column::Nested { fields, name } => Comparable::Text(scalar_text(nested_value(record, fields, name)).to_lowercase()),
  }
}

/// Value of the first nested entry whose name is `name`.
pub fn nested_value<'a>(record: &'a Record, fields: &NestedFields, name: &str) -> Option<&'a Value> {
  record
    .nested(&fields.list)
    .find(|entry| scalar_text(entry.get(&fields.name_key)) == name)
    .and_then(|entry| entry.get(&fields.value_key))
}
