//! Composite relevance scoring between a query and a candidate text.

use super::similarity::similarity;
use crate::text::{char_len, normalize, words};

/// Lowest score a substring match can receive.
pub const SUBSTRING_BASE: f64 = 0.8;
/// Share of the score awarded for how much of the text the substring covers.
pub const SUBSTRING_LENGTH_WEIGHT: f64 = 0.2;
/// A text word counts as a typo of a query word above this similarity.
pub const WORD_SIMILARITY_CUTOFF: f64 = 0.7;
/// Weight applied to the fraction of query words found in the text.
pub const WORD_COVERAGE_WEIGHT: f64 = 0.6;

/// Scores how well `text` matches `query`, from `0.0` to `1.0`.
///
/// Both inputs are lower-cased and trimmed first. The checks run from the
/// cheapest to the most expensive:
///
/// 1. An empty query scores `0.0`.
/// 2. An exact match scores `1.0`.
/// 3. A substring match scores `0.8` plus up to `0.2` for how much of the
///    text the query covers, so it always outranks the fuzzy cases below.
/// 4. Otherwise each query word is looked up among the text words, either as
///    a prefix or as a close typo. If any are found the score is the larger
///    of `0.6 * coverage` and the whole-string similarity.
/// 5. With no word hits the whole-string similarity is returned.
///
/// # Examples
///
/// ```rust
/// use postsift::scoring::match_score;
///
/// assert_eq!(match_score("  Rust ", "rust"), 1.0);
/// assert_eq!(match_score("rust", "rust book"), 0.8 + (4.0 / 9.0) * 0.2);
/// assert_eq!(match_score("", "anything"), 0.0);
/// ```
pub fn match_score(query: &str, text: &str) -> f64 {
  let query = normalize(query);
  let text = normalize(text);

  if query.is_empty() {
    return 0.0;
  }

  if query == text {
    return 1.0;
  }

  if text.contains(query.as_str()) {
    let length_ratio = char_len(&query) as f64 / char_len(&text) as f64;
    return SUBSTRING_BASE + length_ratio * SUBSTRING_LENGTH_WEIGHT;
  }

  let query_words = words(&query);
  let text_words = words(&text);

  let word_matches = query_words
    .iter()
    .filter(|query_word| {
      text_words.iter().any(|text_word| {
        text_word.starts_with(*query_word)
          || similarity(query_word, text_word) > WORD_SIMILARITY_CUTOFF
      })
    })
    .count();

  if word_matches > 0 {
    let word_score = word_matches as f64 / query_words.len() as f64;
    let fuzzy_score = similarity(&query, &text);
    return (word_score * WORD_COVERAGE_WEIGHT).max(fuzzy_score);
  }

  similarity(&query, &text)
}
