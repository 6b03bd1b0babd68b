//! migmap-lib: Core types and logic for the migration mapping workbench
//!
//! This crate provides the pieces behind every browsing screen and the
//! dependency map:
//! - `record`: schema-light records and the values columns sort by
//! - `browse`: the search, scope, sort and paginate pipeline plus the screen registry
//! - `graph`: projection of workloads, assets and dependencies into a compound graph
//! - `source`: loading record collections from a backend or exported files
//! - `settings`: user settings layered over defaults and environment

pub mod browse;
pub mod consts;
pub mod debounce;
pub mod graph;
pub mod paths;
pub mod record;
pub mod settings;
pub mod source;
