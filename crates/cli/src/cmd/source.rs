//! Selection of the record source shared by every data command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;
use tracing::debug;

use migmap_lib::settings::{DATA_DIR_ENV, Settings};
use migmap_lib::source::{Endpoint, FileSource, HttpSource, RecordSource, SourceError};

#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
  /// Directory of exported JSON collections
  #[arg(long, conflicts_with = "url")]
  pub data_dir: Option<PathBuf>,

  /// Backend base URL, e.g. http://localhost:8000
  #[arg(long)]
  pub url: Option<String>,
}

/// The source picked for this invocation.
#[derive(Debug)]
pub enum Source {
  Files(FileSource),
  Http(HttpSource),
}

impl RecordSource for Source {
  async fn fetch(&self, endpoint: Endpoint) -> Result<Value, SourceError> {
    match self {
      Source::Files(files) => files.fetch(endpoint).await,
      Source::Http(http) => http.fetch(endpoint).await,
    }
  }
}

impl SourceArgs {
  /// Flags win over settings; a configured URL wins over a data directory.
  pub fn open(&self, settings: &Settings) -> Result<Source> {
    let source = match (&self.data_dir, &self.url) {
      (Some(dir), _) => Source::Files(FileSource::new(dir)),
      (None, Some(url)) => Source::Http(HttpSource::new(url.as_str())),
      (None, None) => match (&settings.base_url, &settings.data_dir) {
        (Some(url), _) => Source::Http(HttpSource::new(url.as_str())),
        (None, Some(dir)) => Source::Files(FileSource::new(dir)),
        (None, None) => bail!(
          "no record source configured: pass --data-dir or --url, or set {}",
          DATA_DIR_ENV
        ),
      },
    };

    if let Source::Files(files) = &source
      && !files.dir().is_dir()
    {
      bail!("Data directory not found: {}", files.dir().display());
    }

    debug!(source = ?source, "selected record source");
    Ok(source)
  }
}

pub fn load_settings() -> Result<Settings> {
  Settings::load().context("Failed to load settings")
}
