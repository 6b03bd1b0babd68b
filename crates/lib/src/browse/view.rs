//! View state for one browser instance and the actions that replace it.
//!
//! A [`ViewState`] is never edited in place by the UI. Every interaction is
//! expressed as a [`ViewAction`] and folded into a fresh state with
//! [`ViewState::apply`], which is then handed to [`browse`](super::browse).

use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::ParseError;
use crate::consts::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
  #[default]
  Asc,
  Desc,
}

impl SortDirection {
  pub fn toggled(self) -> Self {
    match self {
      SortDirection::Asc => SortDirection::Desc,
      SortDirection::Desc => SortDirection::Asc,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      SortDirection::Asc => "asc",
      SortDirection::Desc => "desc",
    }
  }
}

impl fmt::Display for SortDirection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SortDirection {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "asc" => Ok(SortDirection::Asc),
      "desc" => Ok(SortDirection::Desc),
      _ => Err(ParseError::unknown("sort direction", s, &["asc", "desc"])),
    }
  }
}

/// Requested rendering layout.
///
/// `Auto` switches to the wide grid only when a scope filter is active and
/// the scoped records expose nested fields. `List` and `Wide` pin the
/// layout regardless of scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
  #[default]
  Auto,
  List,
  Wide,
}

impl Layout {
  pub fn as_str(self) -> &'static str {
    match self {
      Layout::Auto => "auto",
      Layout::List => "list",
      Layout::Wide => "wide",
    }
  }
}

impl fmt::Display for Layout {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Layout {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "auto" => Ok(Layout::Auto),
      "list" => Ok(Layout::List),
      "wide" => Ok(Layout::Wide),
      _ => Err(ParseError::unknown("layout", s, &["auto", "list", "wide"])),
    }
  }
}

/// Ingestion channel a discovered record came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
  File,
  Network,
  Cmdb,
  Manual,
}

impl SourceKind {
  pub const ALL: [SourceKind; 4] = [SourceKind::File, SourceKind::Network, SourceKind::Cmdb, SourceKind::Manual];

  /// Maps a record's `source_type` to its ingestion channel.
  ///
  /// Returns `None` for source types outside the known channels; such
  /// records are never hidden by a source-kind filter.
  pub fn classify(source_type: &str) -> Option<SourceKind> {
    match source_type.to_lowercase().as_str() {
      "file" | "excel" | "csv" => Some(SourceKind::File),
      "network_scan" | "network scan" => Some(SourceKind::Network),
      "cmdb" => Some(SourceKind::Cmdb),
      "manual" => Some(SourceKind::Manual),
      _ => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      SourceKind::File => "file",
      SourceKind::Network => "network",
      SourceKind::Cmdb => "cmdb",
      SourceKind::Manual => "manual",
    }
  }
}

impl fmt::Display for SourceKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SourceKind {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    SourceKind::ALL
      .into_iter()
      .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| ParseError::unknown("source kind", s, &["file", "network", "cmdb", "manual"]))
  }
}

/// Filter, sort and page parameters for one browser instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
  pub search_term: String,
  pub sort_column: String,
  pub sort_direction: SortDirection,
  /// 1-based page number. Out-of-range values are clamped by the engine.
  pub page: usize,
  pub page_size: NonZeroUsize,
  pub scope_filter: Option<String>,
  #[serde(default)]
  pub layout: Layout,
  /// Ingestion channels to show; `None` shows all.
  #[serde(default)]
  pub source_kinds: Option<BTreeSet<SourceKind>>,
}

impl ViewState {
  /// Initial state for a screen: no search, first page, default page size.
  pub fn new(sort_column: &str, sort_direction: SortDirection) -> Self {
    Self {
      search_term: String::new(),
      sort_column: sort_column.to_string(),
      sort_direction,
      page: 1,
      page_size: DEFAULT_PAGE_SIZE,
      scope_filter: None,
      layout: Layout::Auto,
      source_kinds: None,
    }
  }

  pub fn with_page_size(self, page_size: NonZeroUsize) -> Self {
    Self { page_size, ..self }
  }

  /// The scope filter, treating an empty string as no scope.
  pub fn scope(&self) -> Option<&str> {
    self.scope_filter.as_deref().filter(|s| !s.is_empty())
  }

  /// Folds one user interaction into a new state.
  pub fn apply(self, action: ViewAction) -> Self {
    match action {
      ViewAction::Search(search_term) => Self {
        search_term,
        page: 1,
        ..self
      },
      ViewAction::SortBy(column) => {
        let sort_direction = if column == self.sort_column {
          self.sort_direction.toggled()
        } else {
          SortDirection::Asc
        };
        Self {
          sort_column: column,
          sort_direction,
          ..self
        }
      }
      ViewAction::GoToPage(page) => Self {
        page: page.max(1),
        ..self
      },
      ViewAction::NextPage => Self {
        page: self.page.saturating_add(1),
        ..self
      },
      ViewAction::PrevPage => Self {
        page: self.page.saturating_sub(1).max(1),
        ..self
      },
      ViewAction::Scope(scope_filter) => Self {
        scope_filter,
        page: 1,
        ..self
      },
      ViewAction::SetLayout(layout) => Self { layout, ..self },
      ViewAction::SetSourceKinds(source_kinds) => Self {
        source_kinds,
        page: 1,
        ..self
      },
    }
  }
}

/// A single user interaction on a browser instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
  /// New search text (already debounced). Returns to the first page.
  Search(String),
  /// Column header click: toggles direction on the current column,
  /// otherwise sorts the new column ascending.
  SortBy(String),
  GoToPage(usize),
  NextPage,
  PrevPage,
  /// Narrow to one logical source, or clear the scope with `None`.
  Scope(Option<String>),
  SetLayout(Layout),
  SetSourceKinds(Option<BTreeSet<SourceKind>>),
}
