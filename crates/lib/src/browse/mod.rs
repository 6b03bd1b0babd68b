//! Record browser engine.
//!
//! Every list screen runs the same pipeline over an already-fetched
//! collection:
//!
//! 1. free-text search over the screen's searchable fields
//! 2. scope and ingestion-channel filters
//! 3. column discovery when the wide grid is in play
//! 4. stable sort by the selected column
//! 5. pagination with page clamping
//!
//! Screens differ only in their [`BrowseConfig`], looked up through
//! [`Screen`].

mod columns;
mod compare;
mod engine;
mod paginate;
mod predicate;
mod screens;
mod types;
mod view;

pub use columns::{ViewMode, discover_columns, resolve_mode};
pub use compare::{compare, sort_records};
pub use engine::{BrowseConfig, BrowseResult, browse};
pub use paginate::{Page, paginate};
pub use predicate::{FieldPath, matches};
pub use screens::{ListColumn, Screen};
pub use types::ParseError;
pub use view::{Layout, SortDirection, SourceKind, ViewAction, ViewState};
