//! Neighborhood queries over a built graph model.

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{GraphModel, NodeKind, workload_node_id};

/// Workload-level topology of a [`GraphModel`]: one graph node per workload
/// node, one graph edge per dependency edge.
pub struct WorkloadTopology<'a> {
  graph: DiGraph<&'a str, &'a str>,
  index: HashMap<&'a str, NodeIndex>,
}

impl<'a> WorkloadTopology<'a> {
  pub fn from_model(model: &'a GraphModel) -> Self {
    let mut graph = DiGraph::new();
    let mut index = HashMap::new();

    for node in model.nodes.iter().filter(|n| n.kind == NodeKind::Workload) {
      let idx = graph.add_node(node.id.as_str());
      index.insert(node.id.as_str(), idx);
    }

    for edge in &model.edges {
      if let (Some(&from), Some(&to)) = (index.get(edge.source.as_str()), index.get(edge.target.as_str())) {
        graph.add_edge(from, to, edge.id.as_str());
      }
    }

    Self { graph, index }
  }

  /// Workload node ids this node depends on (outgoing edges).
  pub fn downstream(&self, node_id: &str) -> Vec<&'a str> {
    self.neighbors(node_id, Direction::Outgoing)
  }

  /// Workload node ids depending on this node (incoming edges).
  pub fn upstream(&self, node_id: &str) -> Vec<&'a str> {
    self.neighbors(node_id, Direction::Incoming)
  }

  fn neighbors(&self, node_id: &str, direction: Direction) -> Vec<&'a str> {
    let Some(&idx) = self.index.get(node_id) else {
      return Vec::new();
    };
    let mut ids: Vec<&'a str> = self
      .graph
      .neighbors_directed(idx, direction)
      .map(|n| self.graph[n])
      .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
  }
}

/// Restricts `model` to one workload and its direct dependency neighbors.
///
/// Kept: the workload, every workload one edge away in either direction,
/// their asset children, and the edges between kept workloads. Node and
/// edge order follow `model`. An unknown workload id yields an empty model.
pub fn focus(model: &GraphModel, workload_id: &str) -> GraphModel {
  let center = workload_node_id(workload_id);
  if model.node(&center).is_none() {
    return GraphModel::default();
  }

  let topology = WorkloadTopology::from_model(model);
  let mut kept: HashSet<&str> = HashSet::from([center.as_str()]);
  kept.extend(topology.downstream(&center));
  kept.extend(topology.upstream(&center));

  let nodes = model
    .nodes
    .iter()
    .filter(|n| match n.kind {
      NodeKind::Workload => kept.contains(n.id.as_str()),
      NodeKind::Asset => n.parent.as_deref().is_some_and(|p| kept.contains(p)),
    })
    .cloned()
    .collect();

  let edges = model
    .edges
    .iter()
    .filter(|e| kept.contains(e.source.as_str()) && kept.contains(e.target.as_str()))
    .cloned()
    .collect();

  GraphModel {
    nodes,
    edges,
    skipped: Vec::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::graph::{Asset, Dependency, Workload, build_graph};

  fn sample() -> GraphModel {
    let workloads: Vec<Workload> = ["a", "b", "c", "d"]
      .iter()
      .map(|id| Workload {
        id: id.to_string(),
        ci_ids: vec![format!("{}1", id)],
        ..Workload::default()
      })
      .collect();
    let assets: Vec<Asset> = ["a1", "b1", "c1", "d1"]
      .iter()
      .map(|id| Asset {
        id: id.to_string(),
        name: id.to_string(),
      })
      .collect();
    let dep = |s: &str, t: &str| Dependency {
      source_workload_id: s.to_string(),
      target_workload_id: t.to_string(),
      ..Dependency::default()
    };
    // a -> b -> c, d -> b, c -> d
    build_graph(&workloads, &assets, &[dep("a", "b"), dep("b", "c"), dep("d", "b"), dep("c", "d")])
  }

  #[test]
  fn neighbors_by_direction() {
    let model = sample();
    let topology = WorkloadTopology::from_model(&model);
    assert_eq!(topology.downstream("wl-b"), ["wl-c"]);
    assert_eq!(topology.upstream("wl-b"), ["wl-a", "wl-d"]);
    assert!(topology.upstream("wl-zzz").is_empty());
  }

  #[test]
  fn focus_keeps_direct_neighbors_and_their_assets() {
    let focused = focus(&sample(), "a");
    let ids: Vec<_> = focused.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["wl-a", "ci-a1-wl-a", "wl-b", "ci-b1-wl-b"]);
    let edges: Vec<_> = focused.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(edges, ["dep-0"]);
  }

  #[test]
  fn focus_includes_edges_among_neighbors() {
    let focused = focus(&sample(), "b");
    let edges: Vec<_> = focused.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(edges, ["dep-0", "dep-1", "dep-2", "dep-3"]);
    assert_eq!(focused.stats().workloads, 4);
  }

  #[test]
  fn unknown_workload_is_empty() {
    assert!(focus(&sample(), "nope").is_empty());
  }
}
