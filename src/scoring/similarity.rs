//! Edit distance normalized into a similarity ratio.

use super::distance::edit_distance;
use crate::text::char_len;

/// Returns how similar two strings are, from `0.0` (nothing shared) to `1.0`.
///
/// The comparison ignores case. Two empty strings are considered identical.
///
/// ```rust
/// use postsift::scoring::similarity;
///
/// assert_eq!(similarity("", ""), 1.0);
/// assert_eq!(similarity("Rust", "rust"), 1.0);
/// assert_eq!(similarity("rust", "bust"), 0.75);
/// ```
pub fn similarity(query: &str, text: &str) -> f64 {
  let max_length = char_len(query).max(char_len(text));
  if max_length == 0 {
    return 1.0;
  }

  let distance = edit_distance(&query.to_lowercase(), &text.to_lowercase());

  // Lower-casing can lengthen a string, so the distance may exceed max_length.
  max_length.saturating_sub(distance) as f64 / max_length as f64
}
