//! Thresholded, ranked retrieval over a slice of items.

use crate::scoring::match_score;
use crate::text::is_blank;
use crate::types::{SearchOptions, SearchResult, Searchable};
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Returns the items matching `query`, best match first.
///
/// Every item is scored with [`match_score`] against the text produced by the
/// options' extractor. Items scoring below the threshold are dropped, the rest
/// are sorted by descending score (ties keep their input order) and cut to the
/// limit, if any.
///
/// An empty or whitespace-only query returns no items.
///
/// # Examples
///
/// ```rust
/// use postsift::prelude::*;
///
/// let names = ["John Doe", "Jane Smith", "Bob Johnson"];
/// let results = search("john", &names, &SearchOptions::default());
/// assert_eq!(results, vec![&"John Doe", &"Bob Johnson"]);
///
/// assert!(search("   ", &names, &SearchOptions::default()).is_empty());
/// ```
pub fn search<'a, T: Searchable>(
  query: &str,
  items: &'a [T],
  options: &SearchOptions<T>,
) -> Vec<&'a T> {
  search_with_scores(query, items, options)
    .into_iter()
    .map(|result| result.item)
    .collect()
}

/// Like [`search`], but keeps the score of every returned item.
///
/// ```rust
/// use postsift::prelude::*;
///
/// let titles = ["rust", "rust book"];
/// let results = search_with_scores("Rust", &titles, &SearchOptions::default());
/// assert_eq!(results[0].score, 1.0);
/// assert!(results[1].score >= 0.8);
/// ```
pub fn search_with_scores<'a, T: Searchable>(
  query: &str,
  items: &'a [T],
  options: &SearchOptions<T>,
) -> Vec<SearchResult<&'a T>> {
  rank(query, items, options)
    .into_iter()
    .map(|result| SearchResult::new(&items[result.item], result.score))
    .collect()
}

/// Ranks `items` against `query` and returns the positions of the kept items,
/// best match first.
pub(crate) fn rank<T: Searchable>(
  query: &str,
  items: &[T],
  options: &SearchOptions<T>,
) -> Vec<SearchResult<usize>> {
  if is_blank(query) {
    tracing::trace!("blank query, skipping scoring");
    return Vec::new();
  }

  let config = options.config();
  let mut results = score_items(query, items, options, config.threshold);
  sort_results(&mut results);

  if let Some(limit) = config.effective_limit() {
    results.truncate(limit);
  }

  tracing::debug!(
    query,
    candidates = items.len(),
    matches = results.len(),
    threshold = config.threshold,
    "fuzzy search finished"
  );

  results
}

/// Scores every item and keeps those at or above `threshold`, in input order.
#[cfg(not(feature = "parallel"))]
fn score_items<T: Searchable>(
  query: &str,
  items: &[T],
  options: &SearchOptions<T>,
  threshold: f64,
) -> Vec<SearchResult<usize>> {
  items
    .iter()
    .enumerate()
    .map(|(index, item)| SearchResult::new(index, match_score(query, &options.text_of(item))))
    .filter(|result| result.score >= threshold)
    .collect()
}

/// Scores every item and keeps those at or above `threshold`, in input order.
#[cfg(feature = "parallel")]
fn score_items<T: Searchable>(
  query: &str,
  items: &[T],
  options: &SearchOptions<T>,
  threshold: f64,
) -> Vec<SearchResult<usize>> {
  items
    .par_iter()
    .enumerate()
    .map(|(index, item)| SearchResult::new(index, match_score(query, &options.text_of(item))))
    .filter(|result| result.score >= threshold)
    .collect()
}

fn by_descending_score<T>(a: &SearchResult<T>, b: &SearchResult<T>) -> Ordering {
  b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Sort the search results. The sort is stable.
#[cfg(not(feature = "parallel"))]
fn sort_results<T>(results: &mut [SearchResult<T>]) {
  results.sort_by(by_descending_score);
}

/// Sort the search results. The sort is stable.
#[cfg(feature = "parallel")]
fn sort_results<T: Send>(results: &mut [SearchResult<T>]) {
  results.par_sort_by(by_descending_score);
}
