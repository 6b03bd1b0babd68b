//! Heterogeneous records and field access.
//!
//! Every collection the application browses (schema entities, discovered
//! data, configuration items, workloads, dependencies) arrives as a JSON
//! array of objects. A [`Record`] wraps one such object without imposing a
//! schema; the [`Column`] resolver turns a column key into a
//! [`Comparable`] value for sorting.

mod access;
mod types;

pub use access::*;
pub use types::*;
