use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Reads `null` as the type's default so partially populated rows decode.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An application workload instance: a set of assets migrated together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
  pub id: String,
  #[serde(default, deserialize_with = "nullable")]
  pub name: String,
  #[serde(default, deserialize_with = "nullable")]
  pub environment: String,
  /// Asset ids. Weak references into the separately fetched asset list.
  #[serde(default, deserialize_with = "nullable")]
  pub ci_ids: Vec<String>,
}

/// A configuration item that can appear under one or more workloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
  pub id: String,
  #[serde(default, deserialize_with = "nullable")]
  pub name: String,
}

/// A directed dependency between two workloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
  pub source_workload_id: String,
  pub target_workload_id: String,
  #[serde(default, deserialize_with = "nullable")]
  pub level: String,
  #[serde(default, deserialize_with = "nullable")]
  pub latency_sensitive: bool,
  #[serde(default, deserialize_with = "nullable")]
  pub environment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
  Workload,
  Asset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
  pub id: String,
  pub label: String,
  /// Compound parent; set on asset nodes only.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub parent: Option<String>,
  pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
  pub id: String,
  /// Source workload node id.
  pub source: String,
  /// Target workload node id.
  pub target: String,
  pub label: String,
  pub latency_sensitive: bool,
  pub environment: String,
}

/// An input row the builder left out of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Skipped {
  /// A workload referenced an asset id absent from the asset list.
  MissingAsset { workload_id: String, asset_id: String },
  /// A dependency named a workload that is not in the workload list.
  DanglingDependency {
    index: usize,
    source_workload_id: String,
    target_workload_id: String,
  },
  /// A workload id appeared more than once; only the first is drawn.
  DuplicateWorkload { index: usize, workload_id: String },
  /// A workload listed the same asset id more than once.
  DuplicateAsset { workload_id: String, asset_id: String },
}

impl fmt::Display for Skipped {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Skipped::MissingAsset { workload_id, asset_id } => {
        write!(f, "asset {} referenced by workload {} not found", asset_id, workload_id)
      }
      Skipped::DanglingDependency {
        index,
        source_workload_id,
        target_workload_id,
      } => write!(
        f,
        "dependency {} ({} -> {}): source or target workload not found",
        index, source_workload_id, target_workload_id
      ),
      Skipped::DuplicateWorkload { index, workload_id } => {
        write!(f, "workload {} at position {} is a duplicate", workload_id, index)
      }
      Skipped::DuplicateAsset { workload_id, asset_id } => {
        write!(f, "asset {} listed more than once by workload {}", asset_id, workload_id)
      }
    }
  }
}

/// A renderable compound graph: workload nodes containing asset nodes,
/// with dependency edges between workloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphModel {
  pub nodes: Vec<GraphNode>,
  pub edges: Vec<GraphEdge>,
  #[serde(default)]
  pub skipped: Vec<Skipped>,
}

/// Element counts for a [`GraphModel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
  pub workloads: usize,
  pub assets: usize,
  pub edges: usize,
  pub skipped: usize,
}

impl GraphModel {
  /// True when there is nothing to draw.
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty() && self.edges.is_empty()
  }

  pub fn stats(&self) -> GraphStats {
    let workloads = self.nodes.iter().filter(|n| n.kind == NodeKind::Workload).count();
    GraphStats {
      workloads,
      assets: self.nodes.len() - workloads,
      edges: self.edges.len(),
      skipped: self.skipped.len(),
    }
  }

  pub fn node(&self, id: &str) -> Option<&GraphNode> {
    self.nodes.iter().find(|n| n.id == id)
  }

  /// Asset nodes parented to the given workload node.
  pub fn children<'a>(&'a self, parent_id: &'a str) -> impl Iterator<Item = &'a GraphNode> + 'a {
    self.nodes.iter().filter(move |n| n.parent.as_deref() == Some(parent_id))
  }
}

/// Node id of a workload.
pub fn workload_node_id(workload_id: &str) -> String {
  format!("wl-{}", workload_id)
}

/// Node id of an asset under one workload. The same asset under two
/// workloads yields two distinct nodes.
pub fn asset_node_id(asset_id: &str, workload_id: &str) -> String {
  format!("ci-{}-wl-{}", asset_id, workload_id)
}

/// Edge id for the dependency at `index` in the input list.
pub fn edge_id(index: usize) -> String {
  format!("dep-{}", index)
}
