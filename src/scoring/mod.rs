//! The string metrics behind every search.
//!
//! The functions build on each other:
//!
//! - [`edit_distance`]: Levenshtein distance, case-sensitive.
//! - [`similarity`]: distance normalized to `[0, 1]`, case-insensitive.
//! - [`match_score`]: the composite relevance score used for ranking.

/// Levenshtein edit distance.
pub mod distance;
/// Composite query/text relevance scoring.
pub mod scorer;
/// Normalized string similarity.
pub mod similarity;

pub use distance::edit_distance;
pub use scorer::{
  match_score, SUBSTRING_BASE, SUBSTRING_LENGTH_WEIGHT, WORD_COVERAGE_WEIGHT,
  WORD_SIMILARITY_CUTOFF,
};
pub use similarity::similarity;
