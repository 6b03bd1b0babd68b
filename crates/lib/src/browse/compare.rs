//! Column ordering.

use std::cmp::Ordering;

use super::view::SortDirection;
use crate::record::{Column, Record, resolve};

/// Orders two records by `column`. Equal values compare as equal; there is
/// no secondary key, so tie order is whatever the (stable) sort preserves.
pub fn compare(a: &Record, b: &Record, column: &Column, direction: SortDirection) -> Ordering {
  let ascending = resolve(a, column).cmp(&resolve(b, column));
  match direction {
    SortDirection::Asc => ascending,
    SortDirection::Desc => ascending.reverse(),
  }
}

/// Stable in-place sort of borrowed records.
pub fn sort_records(records: &mut [&Record], column: &Column, direction: SortDirection) {
  records.sort_by(|a, b| compare(a, b, column, direction));
}
