//! Text normalization utilities shared by the scorers.

/// Lower-case and trim a string.
pub fn normalize(text: &str) -> String {
  text.to_lowercase().trim().to_string()
}

/// Split text into whitespace-separated words.
pub fn words(text: &str) -> Vec<&str> {
  text.split_whitespace().collect()
}

/// Length in Unicode scalar values.
pub fn char_len(text: &str) -> usize {
  text.chars().count()
}

/// Returns `true` when the query is empty or whitespace-only.
pub fn is_blank(query: &str) -> bool {
  query.trim().is_empty()
}
