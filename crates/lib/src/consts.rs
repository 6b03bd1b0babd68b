use std::num::NonZeroUsize;
use std::time::Duration;

pub const APP_NAME: &str = "migmap";

/// Rows per page when a screen does not override it.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Quiescence window applied to free-text search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Derived column: number of nested field records.
pub const FIELDS_COUNT: &str = "fields_count";

/// Derived column: number of assets referenced by a workload.
pub const ASSET_COUNT: &str = "asset_count";
