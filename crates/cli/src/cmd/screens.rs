//! Screens command implementation.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use migmap_lib::browse::Screen;

use crate::output::{OutputFormat, print_json, print_table};

#[derive(Debug, Args)]
pub struct ScreensArgs {
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,
}

pub fn cmd_screens(args: ScreensArgs) -> Result<()> {
  if args.format.is_json() {
    let screens: Vec<_> = Screen::ALL
      .iter()
      .map(|screen| {
        let view = screen.default_view();
        json!({
          "name": screen.name(),
          "title": screen.title(),
          "endpoint": screen.endpoint().path(),
          "parent_list": screen.parent_list(),
          "config": screen.config(),
          "default_view": view,
        })
      })
      .collect();
    return print_json(&screens);
  }

  let headers: Vec<String> = ["Screen", "Title", "Search Fields", "Default Sort"]
    .iter()
    .map(|h| h.to_string())
    .collect();
  let rows: Vec<Vec<String>> = Screen::ALL
    .iter()
    .map(|screen| {
      let view = screen.default_view();
      let searchable: Vec<String> = screen.config().searchable.iter().map(|f| f.to_string()).collect();
      vec![
        screen.name().to_string(),
        screen.title().to_string(),
        searchable.join(", "),
        format!("{} {}", view.sort_column, view.sort_direction),
      ]
    })
    .collect();
  print_table(&headers, &rows);
  Ok(())
}
