use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use super::fetch::RecordSource;
use super::types::{Endpoint, SourceError};

/// Reads collections from JSON files in a directory, one file per
/// endpoint (see [`Endpoint::file_name`]).
#[derive(Debug, Clone)]
pub struct FileSource {
  dir: PathBuf,
}

impl FileSource {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  pub fn path_for(&self, endpoint: Endpoint) -> PathBuf {
    self.dir.join(endpoint.file_name())
  }
}

impl RecordSource for FileSource {
  async fn fetch(&self, endpoint: Endpoint) -> Result<Value, SourceError> {
    let path = self.path_for(endpoint);
    info!(path = ?path, "reading records");

    let bytes = tokio::fs::read(&path).await.map_err(|source| SourceError::Io {
      path: path.clone(),
      source,
    })?;

    serde_json::from_slice(&bytes).map_err(|e| SourceError::Decode {
      origin: path.display().to_string(),
      message: e.to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[tokio::test]
  async fn reads_endpoint_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("workloads.json"), r#"[{"id": "w1"}]"#).unwrap();

    let source = FileSource::new(temp.path());
    let value = source.fetch(Endpoint::Workloads).await.unwrap();
    assert_eq!(value, serde_json::json!([{"id": "w1"}]));
  }

  #[tokio::test]
  async fn missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = FileSource::new(temp.path()).fetch(Endpoint::RawData).await.unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
    assert!(err.to_string().contains("raw-data.json"));
  }

  #[tokio::test]
  async fn malformed_json_is_decode_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("items.json"), "[{").unwrap();
    let err = FileSource::new(temp.path()).fetch(Endpoint::ConfigItems).await.unwrap_err();
    assert!(matches!(err, SourceError::Decode { .. }));
  }
}
