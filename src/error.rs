//! Error types for configuration and pagination.
//!
//! Scoring and retrieval never fail; only user-supplied settings are checked.

use thiserror::Error;

/// Result type alias for fallible `postsift` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a search or a page view.
#[derive(Debug, Error)]
pub enum Error {
  /// The threshold is NaN or outside `[0, 1]`.
  #[error("invalid threshold {0}: must be within [0, 1]")]
  InvalidThreshold(f64),

  /// Pages are numbered from 1.
  #[error("invalid page {0}: pages start at 1")]
  InvalidPage(usize),

  /// A page must hold at least one item.
  #[error("invalid page size {0}: must be at least 1")]
  InvalidPerPage(usize),

  /// A JSON configuration document could not be parsed.
  #[error("invalid configuration: {0}")]
  Config(#[from] serde_json::Error),
}
