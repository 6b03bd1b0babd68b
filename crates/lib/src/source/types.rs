use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::RecordError;

/// A backend collection the UI fetches in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  DataEntities,
  DiscoveredData,
  RawData,
  Workloads,
  Dependencies,
  ConfigItems,
}

impl Endpoint {
  /// REST path relative to the backend base URL.
  pub fn path(self) -> &'static str {
    match self {
      Endpoint::DataEntities => "/data-entities",
      Endpoint::DiscoveredData => "/discovered-data",
      Endpoint::RawData => "/raw-data",
      Endpoint::Workloads => "/map/workloads",
      Endpoint::Dependencies => "/map/dependencies",
      Endpoint::ConfigItems => "/prepare/items",
    }
  }

  /// File name of the collection inside a data directory.
  pub fn file_name(self) -> &'static str {
    match self {
      Endpoint::DataEntities => "data-entities.json",
      Endpoint::DiscoveredData => "discovered-data.json",
      Endpoint::RawData => "raw-data.json",
      Endpoint::Workloads => "workloads.json",
      Endpoint::Dependencies => "dependencies.json",
      Endpoint::ConfigItems => "items.json",
    }
  }
}

impl fmt::Display for Endpoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.path())
  }
}

/// Failures while obtaining a collection. Any of these means the engine
/// must not run for that screen.
#[derive(Debug, Error)]
pub enum SourceError {
  /// The request could not be sent or the connection failed.
  #[error("request to {url} failed: {message}")]
  Http { url: String, message: String },

  /// The backend answered with a non-success status.
  #[error("{url} returned HTTP {status}")]
  Status { url: String, status: u16 },

  /// A collection file could not be read.
  #[error("failed to read {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The payload was not valid JSON or did not match the expected rows.
  #[error("invalid data from {origin}: {message}")]
  Decode { origin: String, message: String },

  /// The payload was JSON but not an array of objects.
  #[error("{endpoint}: {source}")]
  Records {
    endpoint: Endpoint,
    #[source]
    source: RecordError,
  },

  /// A nested panel's parent record was not in the collection.
  #[error("no record with id '{id}' in {endpoint}")]
  ParentNotFound { endpoint: Endpoint, id: String },
}
