//! Levenshtein edit distance.

/// Computes the Levenshtein distance between `source` and `target`.
///
/// The distance is the minimum number of single-character insertions,
/// deletions or substitutions needed to turn `source` into `target`.
/// Characters are compared exactly (case-sensitive) as Unicode scalar values.
///
/// The full `(|target| + 1) x (|source| + 1)` table is built; inputs are
/// expected to be short strings such as titles.
///
/// # Examples
///
/// ```rust
/// use postsift::scoring::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(source: &str, target: &str) -> usize {
  let source: Vec<char> = source.chars().collect();
  let target: Vec<char> = target.chars().collect();

  let columns = source.len() + 1;
  let mut matrix: Vec<Vec<usize>> = (0..=target.len())
    .map(|i| {
      (0..columns)
        .map(|j| if i == 0 { j } else if j == 0 { i } else { 0 })
        .collect()
    })
    .collect();

  for i in 1..=target.len() {
    for j in 1..=source.len() {
      let cost = if source[j - 1] == target[i - 1] { 0 } else { 1 };

      matrix[i][j] = (matrix[i - 1][j] + 1)
        .min(matrix[i][j - 1] + 1)
        .min(matrix[i - 1][j - 1] + cost);
    }
  }

  matrix[target.len()][source.len()]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_identical() {
    assert_eq!(edit_distance("hello", "hello"), 0);
    assert_eq!(edit_distance("", ""), 0);
  }

  #[test]
  fn test_single_edits() {
    assert_eq!(edit_distance("hello", "hallo"), 1);
    assert_eq!(edit_distance("helo", "hello"), 1);
    assert_eq!(edit_distance("hello", "helo"), 1);
  }

  #[test]
  fn test_against_empty() {
    assert_eq!(edit_distance("abc", ""), 3);
    assert_eq!(edit_distance("", "abcd"), 4);
  }

  #[test]
  fn test_case_sensitive() {
    assert_eq!(edit_distance("ABC", "abc"), 3);
  }

  #[test]
  fn test_multibyte_characters() {
    assert_eq!(edit_distance("café", "cafe"), 1);
    assert_eq!(edit_distance("日本語", "日本"), 1);
  }

  #[test]
  fn test_classic_pairs() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(edit_distance("flaw", "lawn"), 2);
    assert_eq!(edit_distance("saturday", "sunday"), 3);
  }
}
