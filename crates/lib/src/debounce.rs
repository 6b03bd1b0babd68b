//! Quiescence-window debouncing for free-text input.
//!
//! Typing produces a burst of intermediate search terms. Only the value
//! that survives a full window without being replaced is released to the
//! browser pipeline. Sort and page clicks bypass the debouncer; callers
//! [`flush`](Debouncer::flush) first so a pending term is not lost.

use std::time::{Duration, Instant};

use crate::consts::DEFAULT_DEBOUNCE;

#[derive(Debug)]
pub struct Debouncer<T> {
  window: Duration,
  pending: Option<(T, Instant)>,
}

impl<T> Default for Debouncer<T> {
  fn default() -> Self {
    Self::new(DEFAULT_DEBOUNCE)
  }
}

impl<T> Debouncer<T> {
  pub fn new(window: Duration) -> Self {
    Self { window, pending: None }
  }

  pub fn window(&self) -> Duration {
    self.window
  }

  /// Records a new value and restarts the window.
  pub fn push(&mut self, value: T, now: Instant) {
    self.pending = Some((value, now));
  }

  /// Releases the pending value once the window has elapsed since the last
  /// push. Each value is released at most once.
  pub fn poll(&mut self, now: Instant) -> Option<T> {
    match &self.pending {
      Some((_, pushed)) if now.saturating_duration_since(*pushed) >= self.window => {
        self.pending.take().map(|(value, _)| value)
      }
      _ => None,
    }
  }

  /// When the pending value becomes due, if there is one.
  pub fn deadline(&self) -> Option<Instant> {
    self.pending.as_ref().map(|(_, pushed)| *pushed + self.window)
  }

  /// Releases the pending value immediately.
  pub fn flush(&mut self) -> Option<T> {
    self.pending.take().map(|(value, _)| value)
  }

  pub fn is_pending(&self) -> bool {
    self.pending.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const MS: Duration = Duration::from_millis(1);

  #[test]
  fn only_final_value_of_a_burst_is_released() {
    let start = Instant::now();
    let mut d = Debouncer::default();
    d.push("d", start);
    d.push("db", start + 120 * MS);
    d.push("db-", start + 300 * MS);

    assert_eq!(d.poll(start + 700 * MS), None);
    assert_eq!(d.deadline(), Some(start + 800 * MS));
    assert_eq!(d.poll(start + 800 * MS), Some("db-"));
    assert_eq!(d.poll(start + 2000 * MS), None);
  }

  #[test]
  fn flush_releases_immediately() {
    let start = Instant::now();
    let mut d = Debouncer::new(500 * MS);
    d.push(String::from("cmdb"), start);
    assert!(d.is_pending());
    assert_eq!(d.flush().as_deref(), Some("cmdb"));
    assert!(!d.is_pending());
    assert_eq!(d.poll(start + 1000 * MS), None);
  }

  #[test]
  fn default_window_is_half_a_second() {
    assert_eq!(Debouncer::<()>::default().window(), Duration::from_millis(500));
  }
}
