use thiserror::Error;

/// Errors from parsing view parameters and field paths.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
  /// A keyword did not name any known variant.
  #[error("unknown {kind} '{value}' (expected one of: {expected})")]
  Unknown {
    kind: &'static str,
    value: String,
    expected: String,
  },

  /// A field path was syntactically invalid.
  #[error("invalid field path '{path}': {reason}")]
  InvalidFieldPath { path: String, reason: &'static str },
}

impl ParseError {
  pub(crate) fn unknown(kind: &'static str, value: &str, expected: &[&str]) -> Self {
    ParseError::Unknown {
      kind,
      value: value.to_string(),
      expected: expected.join(", "),
    }
  }
}
