//! Page slicing with range clamping.

use std::num::NonZeroUsize;

/// One page of a sorted, filtered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
  pub items: Vec<T>,
  pub total_pages: usize,
  /// The requested page after clamping into `1..=total_pages`.
  pub page: usize,
  /// Offset of the first item on this page within the whole collection.
  pub start_index: usize,
}

/// Slices `items` into the requested page.
///
/// `total_pages` is at least 1, so an empty collection has one empty page.
/// A page past the end is clamped to the last page, and page 0 to page 1;
/// neither is an error.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: NonZeroUsize) -> Page<T> {
  let size = page_size.get();
  let total_pages = items.len().div_ceil(size).max(1);
  let page = page.clamp(1, total_pages);
  let start_index = (page - 1) * size;

  Page {
    items: items.into_iter().skip(start_index).take(size).collect(),
    total_pages,
    page,
    start_index,
  }
}
