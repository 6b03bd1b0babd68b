//! Column discovery for schema-less records and layout selection.

use std::collections::HashSet;

use serde::Serialize;

use super::view::Layout;
use crate::record::{NestedFields, Record, scalar_text};

/// How the current page should be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "columns", rename_all = "lowercase")]
pub enum ViewMode {
  /// The screen's fixed column set.
  List,
  /// One column per discovered nested field name.
  Wide(Vec<String>),
}

impl ViewMode {
  pub fn columns(&self) -> Option<&[String]> {
    match self {
      ViewMode::List => None,
      ViewMode::Wide(columns) => Some(columns),
    }
  }
}

/// Union of nested field names across `records`, in first-seen order.
///
/// Entries without a name are ignored.
pub fn discover_columns<'a, I>(records: I, fields: &NestedFields) -> Vec<String>
where
  I: IntoIterator<Item = &'a Record>,
{
  let mut seen = HashSet::new();
  let mut columns = Vec::new();

  for record in records {
    for entry in record.nested(&fields.list) {
      let name = scalar_text(entry.get(&fields.name_key));
      if !name.is_empty() && seen.insert(name.clone()) {
        columns.push(name);
      }
    }
  }

  columns
}

/// Decides whether discovery should run at all for this layout.
pub fn wants_discovery(layout: Layout, scoped: bool) -> bool {
  match layout {
    Layout::Auto => scoped,
    Layout::Wide => true,
    Layout::List => false,
  }
}

/// Picks the rendering mode. Wide needs at least one discovered column;
/// otherwise the fixed list is used.
pub fn resolve_mode(layout: Layout, scoped: bool, columns: Vec<String>) -> ViewMode {
  if wants_discovery(layout, scoped) && !columns.is_empty() {
    ViewMode::Wide(columns)
  } else {
    ViewMode::List
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn fields() -> NestedFields {
    NestedFields::new("f", "field_name", "field_value")
  }

  #[test]
  fn first_seen_order_deduplicated() {
    let records: Vec<Record> = serde_json::from_value(json!([
      {"f": [{"field_name": "a"}]},
      {"f": [{"field_name": "b"}, {"field_name": "a"}]}
    ]))
    .unwrap();
    assert_eq!(discover_columns(&records, &fields()), ["a", "b"]);
  }

  #[test]
  fn not_alphabetical() {
    let records: Vec<Record> = serde_json::from_value(json!([
      {"f": [{"field_name": "zone"}, {"field_name": "app"}, {"field_value": "orphan"}]}
    ]))
    .unwrap();
    assert_eq!(discover_columns(&records, &fields()), ["zone", "app"]);
  }

  #[test]
  fn auto_mode_needs_scope_and_columns() {
    let cols = || vec!["a".to_string()];
    assert_eq!(resolve_mode(Layout::Auto, true, cols()), ViewMode::Wide(cols()));
    assert_eq!(resolve_mode(Layout::Auto, false, cols()), ViewMode::List);
    assert_eq!(resolve_mode(Layout::Auto, true, vec![]), ViewMode::List);
  }

  #[test]
  fn explicit_layouts_ignore_scope() {
    let cols = || vec!["a".to_string()];
    assert_eq!(resolve_mode(Layout::Wide, false, cols()), ViewMode::Wide(cols()));
    assert_eq!(resolve_mode(Layout::Wide, false, vec![]), ViewMode::List);
    assert_eq!(resolve_mode(Layout::List, true, cols()), ViewMode::List);
  }
}
