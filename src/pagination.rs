//! Page slicing for ranked results.

use crate::error::{Error, Result};
use serde::Serialize;

/// The first page. Pages are numbered from 1.
pub const DEFAULT_PAGE: usize = 1;
/// Items shown per page unless configured otherwise.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Returns the items on `page` when showing `per_page` items per page.
///
/// Pages past the end, page `0` and a page size of `0` all yield an empty slice.
///
/// ```rust
/// use postsift::pagination::paginate;
///
/// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// assert_eq!(paginate(&data, 2, 3), &[4, 5, 6]);
/// assert_eq!(paginate(&data, 4, 3), &[10]);
/// assert!(paginate(&data, 5, 3).is_empty());
/// ```
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
  if page == 0 || per_page == 0 {
    return &[];
  }

  let start = (page - 1).saturating_mul(per_page).min(items.len());
  let end = page.saturating_mul(per_page).min(items.len());
  &items[start..end]
}

/// The current page and page size of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pagination {
  page: usize,
  per_page: usize,
}

impl Default for Pagination {
  fn default() -> Self {
    Self {
      page: DEFAULT_PAGE,
      per_page: DEFAULT_PER_PAGE,
    }
  }
}

impl Pagination {
  /// Creates a pagination state, rejecting page `0` and page size `0`.
  pub fn new(page: usize, per_page: usize) -> Result<Self> {
    check_page(page)?;
    check_per_page(per_page)?;
    Ok(Self { page, per_page })
  }

  /// The current page, starting at 1.
  pub fn page(&self) -> usize {
    self.page
  }

  /// Items per page.
  pub fn per_page(&self) -> usize {
    self.per_page
  }

  /// Applies a change coming from a pagination control.
  ///
  /// If the page size changed, the listing goes back to the first page with
  /// the new size; otherwise it moves to `page`.
  pub fn handle_pagination(&mut self, page: usize, per_page: usize) -> Result<()> {
    if per_page != self.per_page {
      self.set_per_page(per_page)
    } else {
      self.go_to_page(page)
    }
  }

  /// Moves back to the first page.
  pub fn reset_to_first_page(&mut self) {
    self.page = DEFAULT_PAGE;
  }

  /// Moves to `page`.
  pub fn go_to_page(&mut self, page: usize) -> Result<()> {
    check_page(page)?;
    self.page = page;
    Ok(())
  }

  /// Changes the page size and moves back to the first page.
  pub fn set_per_page(&mut self, per_page: usize) -> Result<()> {
    check_per_page(per_page)?;
    self.per_page = per_page;
    self.page = DEFAULT_PAGE;
    Ok(())
  }

  /// Number of pages needed for `total_items`. An empty listing has no pages.
  pub fn total_pages(&self, total_items: usize) -> usize {
    total_items.div_ceil(self.per_page)
  }

  /// The slice of `items` on the current page.
  pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
    paginate(items, self.page, self.per_page)
  }
}

fn check_page(page: usize) -> Result<()> {
  if page == 0 {
    return Err(Error::InvalidPage(page));
  }
  Ok(())
}

fn check_per_page(per_page: usize) -> Result<()> {
  if per_page == 0 {
    return Err(Error::InvalidPerPage(per_page));
  }
  Ok(())
}
