//! The record browser pipeline: filter, scope, discover, sort, paginate.
//!
//! [`browse`] is a pure function of the records, the view state and the
//! screen's configuration. Nothing is cached between calls, so the UI can
//! re-run it on every interaction and commit whichever result is latest.

use serde::Serialize;
use tracing::debug;

use super::columns::{ViewMode, discover_columns, resolve_mode, wants_discovery};
use super::compare::sort_records;
use super::paginate::paginate;
use super::predicate::{FieldPath, matches_lowered};
use super::view::{SourceKind, ViewState};
use crate::record::{Column, NestedFields, Record, nested_value, scalar_text};

/// Per-screen description of how its records are searched and sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrowseConfig {
  /// Lookups tested by the free-text search.
  pub searchable: Vec<FieldPath>,
  /// Fields compared for equality against the scope filter; any match keeps
  /// the record.
  pub scope_fields: Vec<String>,
  /// Derived count columns: column key and the nested list it counts.
  pub count_columns: Vec<(String, String)>,
  /// Nested field list for schema-less records, enabling column discovery.
  pub nested: Option<NestedFields>,
  /// Field classified by [`SourceKind::classify`] for ingestion filtering.
  pub source_type_field: Option<String>,
}

impl BrowseConfig {
  pub fn new(searchable: Vec<FieldPath>) -> Self {
    Self {
      searchable,
      ..Self::default()
    }
  }

  pub fn with_scope_fields(mut self, fields: &[&str]) -> Self {
    self.scope_fields = fields.iter().map(|f| f.to_string()).collect();
    self
  }

  pub fn with_count_column(mut self, key: &str, list: &str) -> Self {
    self.count_columns.push((key.to_string(), list.to_string()));
    self
  }

  pub fn with_nested(mut self, nested: NestedFields) -> Self {
    self.nested = Some(nested);
    self
  }

  pub fn with_source_type_field(mut self, field: &str) -> Self {
    self.source_type_field = Some(field.to_string());
    self
  }

  /// Resolves a sort key. Count columns stay numeric; in wide mode a
  /// discovered column sorts by its nested value.
  pub fn column(&self, key: &str, mode: &ViewMode) -> Column {
    if let Some((_, list)) = self.count_columns.iter().find(|(k, _)| k == key) {
      return Column::Count { list: list.clone() };
    }

    if let (Some(nested), Some(columns)) = (&self.nested, mode.columns())
      && columns.iter().any(|c| c == key)
    {
      return Column::Nested {
        fields: nested.clone(),
        name: key.to_string(),
      };
    }

    Column::Field(key.to_string())
  }

  /// Display text of `key` on `record`, read the same way [`column`](Self::column) sorts it.
  pub fn cell(&self, record: &Record, key: &str, mode: &ViewMode) -> String {
    match self.column(key, mode) {
      Column::Field(name) => record.display(&name),
      Column::Count { list } => record.list_len(&list).to_string(),
      Column::Nested { fields, name } => scalar_text(nested_value(record, &fields, &name)),
    }
  }
}

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowseResult<'a> {
  /// Records on the current page, in sorted order.
  pub visible: Vec<&'a Record>,
  /// Number of records that passed all filters.
  pub total_items: usize,
  pub total_pages: usize,
  /// The page actually shown after clamping.
  pub page: usize,
  /// Offset of `visible[0]` within the filtered collection.
  pub start_index: usize,
  #[serde(flatten)]
  pub mode: ViewMode,
}

impl BrowseResult<'_> {
  /// Discovered columns when rendering the wide grid.
  pub fn columns(&self) -> Option<&[String]> {
    self.mode.columns()
  }
}

/// Runs the pipeline over `records`.
pub fn browse<'a>(records: &'a [Record], view: &ViewState, config: &BrowseConfig) -> BrowseResult<'a> {
  let needle = view.search_term.to_lowercase();
  let mut filtered: Vec<&Record> = records
    .iter()
    .filter(|r| matches_lowered(r, &needle, &config.searchable))
    .collect();
  let matched = filtered.len();

  // A scope on a screen without scope fields is ignored, not an empty result.
  let scope = view.scope().filter(|_| !config.scope_fields.is_empty());
  if let Some(scope) = scope {
    let scope = scope.to_lowercase();
    filtered.retain(|r| config.scope_fields.iter().any(|f| r.text(f) == scope));
  }

  if let (Some(kinds), Some(field)) = (&view.source_kinds, &config.source_type_field) {
    filtered.retain(|r| SourceKind::classify(&r.text(field)).is_none_or(|kind| kinds.contains(&kind)));
  }

  let mode = match &config.nested {
    Some(nested) if wants_discovery(view.layout, scope.is_some()) => {
      let columns = discover_columns(filtered.iter().copied(), nested);
      resolve_mode(view.layout, scope.is_some(), columns)
    }
    _ => ViewMode::List,
  };

  let column = config.column(&view.sort_column, &mode);
  sort_records(&mut filtered, &column, view.sort_direction);

  let total_items = filtered.len();
  let page = paginate(filtered, view.page, view.page_size);

  debug!(
    total = records.len(),
    matched,
    filtered = total_items,
    page = page.page,
    total_pages = page.total_pages,
    wide = mode.columns().is_some(),
    "browse pipeline complete"
  );

  BrowseResult {
    visible: page.items,
    total_items,
    total_pages: page.total_pages,
    page: page.page,
    start_index: page.start_index,
    mode,
  }
}
