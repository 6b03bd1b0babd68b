//! Collection sources.
//!
//! The engine never fetches anything itself. A [`RecordSource`] supplies
//! each collection in full, either from the backend's REST API
//! ([`HttpSource`]) or from exported JSON files ([`FileSource`]). A fetch
//! error stops the caller before any browse or graph build runs.

mod fetch;
mod fs;
mod http;
mod types;

pub use fetch::{GraphInputs, RecordSource, fetch_children, fetch_graph_inputs, fetch_records};
pub use fs::FileSource;
pub use http::HttpSource;
pub use types::{Endpoint, SourceError};
