//! Core data types shared by the search functions.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "parallel")]
pub trait Searchable: Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Send + Sync> Searchable for T {}

#[cfg(not(feature = "parallel"))]
pub trait Searchable {}
#[cfg(not(feature = "parallel"))]
impl<T> Searchable for T {}

/// Minimum score an item needs to be returned when no threshold is set.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Function turning an item into the text it is searched by.
pub type Extractor<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// An item paired with the score it received for a query.
///
/// Returned by the score-preserving search path. Scores range from `0.0` to
/// `1.0`; `1.0` means the normalized query and text are identical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
  /// The matched item.
  pub item: T,
  /// Relevance of the item for the query.
  pub score: f64,
}

impl<T> SearchResult<T> {
  /// Creates a new result.
  pub fn new(item: T, score: f64) -> Self {
    Self { item, score }
  }
}

/// The serializable part of the search options.
///
/// ```rust
/// use postsift::prelude::*;
///
/// let config = SearchConfig::from_json(r#"{ "limit": 5 }"#).unwrap();
/// assert_eq!(config.threshold, DEFAULT_THRESHOLD);
/// assert_eq!(config.limit, Some(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
  /// Items scoring strictly below this value are dropped.
  #[serde(default = "default_threshold")]
  pub threshold: f64,
  /// The maximum number of results. `None` (or `0`) keeps every match.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub limit: Option<usize>,
}

fn default_threshold() -> f64 {
  DEFAULT_THRESHOLD
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      threshold: default_threshold(),
      limit: None,
    }
  }
}

impl SearchConfig {
  /// Parses and validates a JSON configuration.
  pub fn from_json(json: &str) -> Result<Self> {
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  /// Sets the minimum score.
  pub fn threshold(mut self, threshold: f64) -> Self {
    self.threshold = threshold;
    self
  }

  /// Sets the maximum number of results.
  pub fn limit(mut self, limit: usize) -> Self {
    self.limit = Some(limit);
    self
  }

  /// Checks that the threshold is a number within `[0, 1]`.
  pub fn validate(&self) -> Result<()> {
    validate_threshold(self.threshold)
  }

  /// The effective limit; a limit of zero means "no limit".
  pub(crate) fn effective_limit(&self) -> Option<usize> {
    self.limit.filter(|&limit| limit > 0)
  }
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
  if (0.0..=1.0).contains(&threshold) {
    Ok(())
  } else {
    Err(Error::InvalidThreshold(threshold))
  }
}

/// Options controlling a search: threshold, limit and text extraction.
///
/// Items that implement [`Display`](fmt::Display) get a default that searches
/// their string form. Any other type supplies an extractor with
/// [`SearchOptions::with_value`].
///
/// ```rust
/// use postsift::prelude::*;
///
/// struct Post { title: String }
///
/// let options = SearchOptions::with_value(|post: &Post| post.title.clone())
///   .threshold(0.5)
///   .limit(10);
/// assert_eq!(options.config().limit, Some(10));
/// ```
pub struct SearchOptions<T> {
  config: SearchConfig,
  get_value: Extractor<T>,
}

impl<T> SearchOptions<T> {
  /// Creates options that search the text returned by `get_value`.
  pub fn with_value<F>(get_value: F) -> Self
  where
    F: Fn(&T) -> String + Send + Sync + 'static,
  {
    Self {
      config: SearchConfig::default(),
      get_value: Arc::new(get_value),
    }
  }

  /// Attaches an extractor to a previously loaded configuration.
  pub fn from_config(config: SearchConfig, get_value: Extractor<T>) -> Self {
    Self { config, get_value }
  }

  /// Sets the minimum score.
  pub fn threshold(mut self, threshold: f64) -> Self {
    self.config.threshold = threshold;
    self
  }

  /// Sets the maximum number of results.
  pub fn limit(mut self, limit: usize) -> Self {
    self.config.limit = Some(limit);
    self
  }

  /// Replaces the text extractor.
  pub fn value<F>(mut self, get_value: F) -> Self
  where
    F: Fn(&T) -> String + Send + Sync + 'static,
  {
    self.get_value = Arc::new(get_value);
    self
  }

  /// The threshold and limit in effect.
  pub fn config(&self) -> &SearchConfig {
    &self.config
  }

  /// Extracts the searchable text of an item.
  pub fn text_of(&self, item: &T) -> String {
    (self.get_value)(item)
  }
}

impl<T: fmt::Display + 'static> Default for SearchOptions<T> {
  fn default() -> Self {
    Self::with_value(|item: &T| item.to_string())
  }
}

impl<T> Clone for SearchOptions<T> {
  fn clone(&self) -> Self {
    Self {
      config: self.config,
      get_value: Arc::clone(&self.get_value),
    }
  }
}

impl<T> fmt::Debug for SearchOptions<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SearchOptions")
      .field("threshold", &self.config.threshold)
      .field("limit", &self.config.limit)
      .finish_non_exhaustive()
  }
}
