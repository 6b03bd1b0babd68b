//! CLI output formatting utilities.
//!
//! Colored status messages, plain-text tables and the JSON printer shared
//! by every command.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
}

/// Widest a table cell may render before it is cut with an ellipsis.
const MAX_CELL_WIDTH: usize = 40;

pub fn truncate_cell(text: &str) -> String {
  let single_line = text.replace('\n', " ");
  if single_line.chars().count() <= MAX_CELL_WIDTH {
    return single_line;
  }
  let mut cut: String = single_line.chars().take(MAX_CELL_WIDTH - 1).collect();
  cut.push('…');
  cut
}

/// Lays out `rows` under `headers` as left-aligned, space-separated
/// columns. The first line is the header row.
pub fn format_table(headers: &[String], rows: &[Vec<String>]) -> Vec<String> {
  let headers: Vec<String> = headers.iter().map(|h| truncate_cell(h)).collect();
  let rows: Vec<Vec<String>> = rows
    .iter()
    .map(|row| row.iter().map(|cell| truncate_cell(cell)).collect())
    .collect();

  let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
  for row in &rows {
    for (i, cell) in row.iter().enumerate().take(widths.len()) {
      widths[i] = widths[i].max(cell.chars().count());
    }
  }

  let line = |cells: &[String]| {
    let padded: Vec<String> = cells
      .iter()
      .zip(&widths)
      .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
      .collect();
    padded.join("  ").trim_end().to_string()
  };

  std::iter::once(line(&headers))
    .chain(rows.iter().map(|row| line(row)))
    .collect()
}

pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
  let mut lines = format_table(headers, rows).into_iter();
  if let Some(header) = lines.next() {
    println!("{}", header.if_supports_color(Stream::Stdout, |s| s.bold()));
  }
  for line in lines {
    println!("{}", line);
  }
}

pub fn print_heading(title: &str) {
  println!("{}", title.if_supports_color(Stream::Stdout, |s| s.bold()));
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
