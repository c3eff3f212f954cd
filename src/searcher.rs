//! A reusable search handle bound to a fixed collection.

use crate::search::{search, search_with_scores};
use crate::types::{SearchOptions, SearchResult, Searchable};

/// A collection and its search options, searched many times with new queries.
///
/// The searcher keeps no index and no cache: every call scores the whole
/// collection again. When the underlying data changes, build a new searcher.
///
/// # Examples
///
/// ```rust
/// use postsift::prelude::*;
///
/// let searcher = create_searcher(
///   vec!["Rust in Action", "Programming Rust", "The Go Programming Language"],
///   SearchOptions::default().limit(2),
/// );
///
/// let results = searcher.search("rust");
/// assert_eq!(results.len(), 2);
/// assert!(searcher.search("").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Searcher<T> {
  items: Vec<T>,
  options: SearchOptions<T>,
}

impl<T: Searchable> Searcher<T> {
  /// Binds `items` and `options` together.
  pub fn new(items: Vec<T>, options: SearchOptions<T>) -> Self {
    tracing::debug!(items = items.len(), ?options, "searcher created");
    Self { items, options }
  }

  /// Returns the items matching `query`, best match first.
  ///
  /// See [`search`](crate::search::search).
  pub fn search(&self, query: &str) -> Vec<&T> {
    search(query, &self.items, &self.options)
  }

  /// Returns the matching items together with their scores.
  ///
  /// See [`search_with_scores`](crate::search::search_with_scores).
  pub fn search_with_scores(&self, query: &str) -> Vec<SearchResult<&T>> {
    search_with_scores(query, &self.items, &self.options)
  }

  /// The bound collection.
  pub fn items(&self) -> &[T] {
    &self.items
  }

  /// The bound options.
  pub fn options(&self) -> &SearchOptions<T> {
    &self.options
  }

  /// Releases the collection.
  pub fn into_items(self) -> Vec<T> {
    self.items
  }
}

/// Creates a [`Searcher`] over `items`.
pub fn create_searcher<T: Searchable>(items: Vec<T>, options: SearchOptions<T>) -> Searcher<T> {
  Searcher::new(items, options)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::search;

  #[test]
  fn test_matches_free_functions() {
    let items = vec!["alpha beta", "beta gamma", "gamma delta", "alphabet"];
    let options = SearchOptions::default().threshold(0.4);
    let searcher = create_searcher(items.clone(), options.clone());

    for query in ["alpha", "gama", "beta gamma", "zzz", ""] {
      assert_eq!(
        searcher.search_with_scores(query),
        search::search_with_scores(query, &items, &options)
      );
      assert_eq!(searcher.search(query), search::search(query, &items, &options));
    }
  }

  #[test]
  fn test_repeated_calls_are_idempotent() {
    let searcher = create_searcher(vec!["one", "two", "three"], SearchOptions::default());
    assert_eq!(searcher.search("tw"), searcher.search("tw"));
  }

  #[test]
  fn test_into_items_returns_collection() {
    let searcher = Searcher::new(vec![1, 2, 3], SearchOptions::default());
    assert_eq!(searcher.items(), &[1, 2, 3]);
    assert_eq!(searcher.into_items(), vec![1, 2, 3]);
  }
}
