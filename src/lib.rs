//! Postsift - typo-tolerant fuzzy filtering for in-memory collections.
//!
//! Postsift scores every item of a collection against a query with an
//! edit-distance based heuristic, drops weak matches and returns the rest
//! best first. It also provides the pieces a searchable listing needs on top
//! of that: field extraction from serializable records and pagination.
//!
//! ```rust
//! use postsift::prelude::*;
//!
//! #[derive(serde::Serialize)]
//! struct Post { id: u32, title: String }
//!
//! let posts = vec![
//!   Post { id: 1, title: "Tom Bombadil adventures".into() },
//!   Post { id: 2, title: "Gardening tips".into() },
//! ];
//!
//! let results = search("bombadil", &posts, &SearchOptions::fields(["title"]));
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].id, 1);
//! ```

pub mod error;
pub mod fields;
pub mod pagination;
pub mod scoring;
pub mod search;
pub mod searcher;
pub mod text;
pub mod types;
pub mod view;

pub use error::{Error, Result};

pub mod prelude {
  //! Convenient re-exports for common types and functions.

  pub use crate::error::Error;
  pub use crate::fields::*;
  pub use crate::pagination::*;
  pub use crate::scoring::*;
  pub use crate::search::*;
  pub use crate::searcher::*;
  pub use crate::types::*;
  pub use crate::view::*;
}
