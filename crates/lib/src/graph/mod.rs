//! Dependency graph model.
//!
//! Converts flat workload, configuration item and dependency rows into a
//! compound node/edge list for a force-directed renderer. Layout and
//! styling belong to the renderer; this module only decides which nodes
//! and edges exist and what they are called.

mod build;
mod focus;
mod types;

pub use build::build_graph;
pub use focus::{WorkloadTopology, focus};
pub use types::*;
