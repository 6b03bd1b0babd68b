//! Browse command implementation.
//!
//! Fetches one screen's collection, runs it through the browser pipeline
//! and prints the visible page.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Serialize;

use migmap_lib::browse::{BrowseResult, Layout, Screen, SortDirection, SourceKind, ViewAction, ViewMode, ViewState, browse};
use migmap_lib::consts::DEFAULT_PAGE_SIZE;
use migmap_lib::settings::Settings;
use migmap_lib::source::{fetch_children, fetch_records};

use super::source::{SourceArgs, load_settings};
use crate::output::{OutputFormat, print_error, print_heading, print_info, print_json, print_table};

#[derive(Debug, Args)]
pub struct BrowseArgs {
  /// Screen to browse (see `mm screens`)
  pub screen: Screen,

  /// Parent record id, for the nested field screens
  #[arg(long)]
  pub parent: Option<String>,

  /// Case-insensitive search text
  #[arg(short, long)]
  pub search: Option<String>,

  /// Column key to sort by
  #[arg(long)]
  pub sort: Option<String>,

  /// Sort descending
  #[arg(long, conflicts_with = "asc")]
  pub desc: bool,

  /// Sort ascending
  #[arg(long)]
  pub asc: bool,

  /// 1-based page number; out-of-range pages are clamped
  #[arg(short, long, default_value_t = 1)]
  pub page: usize,

  /// Rows per page
  #[arg(long)]
  pub page_size: Option<NonZeroUsize>,

  /// Narrow to one logical source (matched against the screen's scope fields)
  #[arg(long)]
  pub scope: Option<String>,

  /// Rendering layout
  #[arg(long, default_value_t = Layout::Auto)]
  pub layout: Layout,

  /// Only show records ingested through these channels (repeatable)
  #[arg(long = "source-kind")]
  pub source_kinds: Vec<SourceKind>,

  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,

  #[command(flatten)]
  pub source: SourceArgs,
}

impl BrowseArgs {
  /// Folds the flags into the screen's initial view.
  fn view(&self, settings: &Settings) -> ViewState {
    let mut view = self.screen.default_view();

    // A screen with its own page size keeps it unless overridden by flag.
    let page_size = self
      .page_size
      .or((view.page_size == DEFAULT_PAGE_SIZE).then_some(settings.page_size));
    if let Some(page_size) = page_size {
      view = view.with_page_size(page_size);
    }

    if let Some(column) = &self.sort {
      view.sort_column = column.clone();
      view.sort_direction = SortDirection::Asc;
    }
    if self.desc {
      view.sort_direction = SortDirection::Desc;
    } else if self.asc {
      view.sort_direction = SortDirection::Asc;
    }

    let source_kinds = (!self.source_kinds.is_empty()).then(|| self.source_kinds.iter().copied().collect::<BTreeSet<_>>());

    [
      ViewAction::Search(self.search.clone().unwrap_or_default()),
      ViewAction::Scope(self.scope.clone()),
      ViewAction::SetSourceKinds(source_kinds),
      ViewAction::SetLayout(self.layout),
      ViewAction::GoToPage(self.page),
    ]
    .into_iter()
    .fold(view, ViewState::apply)
  }
}

#[derive(Serialize)]
struct BrowseOutput<'a> {
  screen: &'static str,
  #[serde(flatten)]
  result: BrowseResult<'a>,
}

pub async fn cmd_browse(args: BrowseArgs) -> Result<()> {
  let settings = load_settings()?;
  let source = args.source.open(&settings)?;
  let screen = args.screen;

  let fetched = match (screen.parent_list(), &args.parent) {
    (Some(list), Some(parent)) => fetch_children(&source, screen.endpoint(), parent, list).await,
    (Some(_), None) => bail!("screen '{}' browses nested fields; pass --parent <ID>", screen),
    (None, Some(_)) => bail!("screen '{}' has no parent records", screen),
    (None, None) => fetch_records(&source, screen.endpoint()).await,
  };
  let records = match fetched {
    Ok(records) => records,
    Err(e) => {
      print_error(&format!("Error loading {}: {}", screen.title(), e));
      return Err(e).with_context(|| format!("Failed to load records for {}", screen));
    }
  };

  let view = args.view(&settings);
  let config = screen.config();
  let result = browse(&records, &view, &config);

  if args.format.is_json() {
    return print_json(&BrowseOutput {
      screen: screen.name(),
      result,
    });
  }

  print_heading(screen.title());
  println!();

  if result.total_items == 0 {
    print_info("No records match the current filters.");
  } else {
    let (headers, keys): (Vec<String>, Vec<String>) = match &result.mode {
      ViewMode::Wide(columns) => (columns.clone(), columns.clone()),
      ViewMode::List => screen
        .columns()
        .iter()
        .map(|c| (c.header.to_string(), c.key.to_string()))
        .unzip(),
    };
    let rows: Vec<Vec<String>> = result
      .visible
      .iter()
      .map(|record| keys.iter().map(|key| config.cell(record, key, &result.mode)).collect())
      .collect();
    print_table(&headers, &rows);
  }

  println!();
  println!(
    "Page {} of {} ({} items)",
    result.page, result.total_pages, result.total_items
  );

  Ok(())
}
