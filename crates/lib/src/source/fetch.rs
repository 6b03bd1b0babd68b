use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::types::{Endpoint, SourceError};
use crate::graph::{Asset, Dependency, Workload};
use crate::record::{Record, records_from_value};

/// Supplies complete collections to the engine.
pub trait RecordSource {
  /// Fetches the raw JSON payload of one collection.
  fn fetch(&self, endpoint: Endpoint) -> impl Future<Output = Result<Value, SourceError>> + Send;
}

/// Fetches a collection and checks it is an array of records.
pub async fn fetch_records<S: RecordSource>(source: &S, endpoint: Endpoint) -> Result<Vec<Record>, SourceError> {
  let value = source.fetch(endpoint).await?;
  let records = records_from_value(value).map_err(|source| SourceError::Records { endpoint, source })?;
  debug!(endpoint = %endpoint, count = records.len(), "fetched records");
  Ok(records)
}

/// Fetches a collection, finds the record with `parent_id` and returns the
/// entries of its nested `list` as records.
pub async fn fetch_children<S: RecordSource>(
  source: &S,
  endpoint: Endpoint,
  parent_id: &str,
  list: &str,
) -> Result<Vec<Record>, SourceError> {
  let records = fetch_records(source, endpoint).await?;
  records
    .iter()
    .find(|r| r.id().as_deref() == Some(parent_id))
    .map(|parent| parent.children(list))
    .ok_or_else(|| SourceError::ParentNotFound {
      endpoint,
      id: parent_id.to_string(),
    })
}

/// The three collections the graph builder needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphInputs {
  pub workloads: Vec<Workload>,
  pub assets: Vec<Asset>,
  pub dependencies: Vec<Dependency>,
}

/// Fetches workloads, configuration items and dependencies concurrently.
///
/// Fails if any one of them fails; there is no partial result.
pub async fn fetch_graph_inputs<S: RecordSource>(source: &S) -> Result<GraphInputs, SourceError> {
  let (workloads, assets, dependencies) = tokio::try_join!(
    fetch_typed::<_, Workload>(source, Endpoint::Workloads),
    fetch_typed::<_, Asset>(source, Endpoint::ConfigItems),
    fetch_typed::<_, Dependency>(source, Endpoint::Dependencies),
  )?;

  Ok(GraphInputs {
    workloads,
    assets,
    dependencies,
  })
}

async fn fetch_typed<S: RecordSource, T: DeserializeOwned>(source: &S, endpoint: Endpoint) -> Result<Vec<T>, SourceError> {
  let records = fetch_records(source, endpoint).await?;
  records
    .into_iter()
    .enumerate()
    .map(|(index, record)| {
      serde_json::from_value(Value::Object(record.into_map())).map_err(|e| SourceError::Decode {
        origin: endpoint.to_string(),
        message: format!("row {}: {}", index, e),
      })
    })
    .collect()
}
