//! Projection of workload, asset and dependency rows into a graph model.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::types::{
  Asset, Dependency, GraphEdge, GraphModel, GraphNode, NodeKind, Skipped, Workload, asset_node_id, edge_id,
  workload_node_id,
};

/// Builds the compound dependency graph.
///
/// Missing references never fail the build. An asset id with no matching
/// asset, or a dependency whose source or target workload is absent, is
/// left out and recorded in [`GraphModel::skipped`]. An asset listed twice
/// under one workload is drawn once, and when two asset rows share an id the
/// first row is used. Edge ids come from the
/// dependency's position in `dependencies`, so identical input always
/// produces identical ids.
pub fn build_graph(workloads: &[Workload], assets: &[Asset], dependencies: &[Dependency]) -> GraphModel {
  let mut assets_by_id: HashMap<&str, &Asset> = HashMap::new();
  for asset in assets {
    assets_by_id.entry(asset.id.as_str()).or_insert(asset);
  }
  let mut model = GraphModel::default();
  let mut emitted: HashSet<&str> = HashSet::new();

  for (index, workload) in workloads.iter().enumerate() {
    if !emitted.insert(workload.id.as_str()) {
      warn!(index, workload_id = %workload.id, "skipping duplicate workload");
      model.skipped.push(Skipped::DuplicateWorkload {
        index,
        workload_id: workload.id.clone(),
      });
      continue;
    }

    let parent_id = workload_node_id(&workload.id);
    model.nodes.push(GraphNode {
      id: parent_id.clone(),
      label: format!("{}\n({})", workload.name, workload.environment),
      parent: None,
      kind: NodeKind::Workload,
    });

    let mut members: HashSet<&str> = HashSet::new();
    for asset_id in &workload.ci_ids {
      if !members.insert(asset_id.as_str()) {
        warn!(workload_id = %workload.id, asset_id = %asset_id, "skipping duplicate asset reference");
        model.skipped.push(Skipped::DuplicateAsset {
          workload_id: workload.id.clone(),
          asset_id: asset_id.clone(),
        });
        continue;
      }

      let Some(asset) = assets_by_id.get(asset_id.as_str()) else {
        warn!(workload_id = %workload.id, asset_id = %asset_id, "skipping missing asset");
        model.skipped.push(Skipped::MissingAsset {
          workload_id: workload.id.clone(),
          asset_id: asset_id.clone(),
        });
        continue;
      };

      let label = if asset.name.is_empty() {
        asset.id.clone()
      } else {
        asset.name.clone()
      };
      model.nodes.push(GraphNode {
        id: asset_node_id(&asset.id, &workload.id),
        label,
        parent: Some(parent_id.clone()),
        kind: NodeKind::Asset,
      });
    }
  }

  for (index, dep) in dependencies.iter().enumerate() {
    let source = dep.source_workload_id.as_str();
    let target = dep.target_workload_id.as_str();
    if !emitted.contains(source) || !emitted.contains(target) {
      warn!(index, source, target, "skipping dependency: source or target workload not found");
      model.skipped.push(Skipped::DanglingDependency {
        index,
        source_workload_id: dep.source_workload_id.clone(),
        target_workload_id: dep.target_workload_id.clone(),
      });
      continue;
    }

    model.edges.push(GraphEdge {
      id: edge_id(index),
      source: workload_node_id(source),
      target: workload_node_id(target),
      label: dep.level.clone(),
      latency_sensitive: dep.latency_sensitive,
      environment: dep.environment.clone(),
    });
  }

  debug!(
    nodes = model.nodes.len(),
    edges = model.edges.len(),
    skipped = model.skipped.len(),
    "built dependency graph"
  );

  model
}
