use serde_json::Value;
use tracing::info;

use super::fetch::RecordSource;
use super::types::{Endpoint, SourceError};

/// Fetches collections from the migration backend's REST API.
#[derive(Debug, Clone)]
pub struct HttpSource {
  base_url: String,
  client: reqwest::Client,
}

impl HttpSource {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      client: reqwest::Client::new(),
    }
  }

  pub fn url_for(&self, endpoint: Endpoint) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
  }
}

impl RecordSource for HttpSource {
  async fn fetch(&self, endpoint: Endpoint) -> Result<Value, SourceError> {
    let url = self.url_for(endpoint);
    info!(url = %url, "fetching records");

    let response = self.client.get(&url).send().await.map_err(|e| SourceError::Http {
      url: url.clone(),
      message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
      return Err(SourceError::Status {
        url,
        status: status.as_u16(),
      });
    }

    response.json::<Value>().await.map_err(|e| SourceError::Decode {
      origin: url,
      message: e.to_string(),
    })
  }
}
