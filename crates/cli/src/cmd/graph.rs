//! Graph command implementation.
//!
//! Fetches workloads, configuration items and dependencies, builds the
//! compound graph and prints it grouped by workload.

use anyhow::{Context, Result};
use clap::Args;

use migmap_lib::graph::{GraphModel, NodeKind, build_graph, focus, workload_node_id};
use migmap_lib::source::fetch_graph_inputs;

use super::source::{SourceArgs, load_settings};
use crate::output::{
  OutputFormat, print_error, print_heading, print_info, print_json, print_stat, print_success, print_warning,
  symbols, truncate_cell,
};

#[derive(Debug, Args)]
pub struct GraphArgs {
  /// Only show this workload and its direct dependency neighbors
  #[arg(long, value_name = "WORKLOAD_ID")]
  pub focus: Option<String>,

  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,

  #[command(flatten)]
  pub source: SourceArgs,
}

pub async fn cmd_graph(args: GraphArgs) -> Result<()> {
  let settings = load_settings()?;
  let source = args.source.open(&settings)?;

  let inputs = match fetch_graph_inputs(&source).await {
    Ok(inputs) => inputs,
    Err(e) => {
      print_error(&format!("Error loading graph data: {}", e));
      return Err(e).context("Failed to load graph data");
    }
  };

  let full = build_graph(&inputs.workloads, &inputs.assets, &inputs.dependencies);
  let model = match &args.focus {
    Some(workload_id) => {
      let focused = focus(&full, workload_id);
      if focused.is_empty() {
        anyhow::bail!("Workload not found: {}", workload_id);
      }
      // Diagnostics describe the whole input, not just the focused slice.
      GraphModel {
        skipped: full.skipped.clone(),
        ..focused
      }
    }
    None => full,
  };

  if args.format.is_json() {
    return print_json(&model);
  }

  print_model(&model, args.focus.as_deref());
  Ok(())
}

fn print_model(model: &GraphModel, focus: Option<&str>) {
  if model.is_empty() {
    print_info("No workloads to draw.");
  }

  let center = focus.map(workload_node_id);
  for node in model.nodes.iter().filter(|n| n.kind == NodeKind::Workload) {
    let label = truncate_cell(&node.label);
    if center.as_deref() == Some(node.id.as_str()) {
      print_heading(&format!("{} {} [{}]", symbols::INFO, label, node.id));
    } else {
      println!("{} {} [{}]", symbols::INFO, label, node.id);
    }
    for child in model.children(&node.id) {
      println!("    {} [{}]", child.label, child.id);
    }
  }

  if !model.edges.is_empty() {
    println!();
    println!("Dependencies:");
    for edge in &model.edges {
      let latency = if edge.latency_sensitive { " (latency sensitive)" } else { "" };
      println!(
        "  {} {} {} {}{}",
        edge.source,
        symbols::ARROW,
        edge.target,
        edge.label,
        latency
      );
    }
  }

  if !model.skipped.is_empty() {
    println!();
    for skipped in &model.skipped {
      print_warning(&format!("Skipped: {}", skipped));
    }
  }

  let stats = model.stats();
  println!();
  print_success("Graph built");
  print_stat("Workloads", &stats.workloads.to_string());
  print_stat("Assets", &stats.assets.to_string());
  print_stat("Dependencies", &stats.edges.to_string());
  print_stat("Skipped", &stats.skipped.to_string());
}
