//! A filtered, paginated listing driven by a search box.
//!
//! [`SearchView`] is the layer a listing screen talks to. It owns the
//! collection, searches the configured fields as the query changes and keeps
//! track of the current page. Unlike the core search functions, an empty
//! query lists every item.

use crate::error::Result;
use crate::pagination::{Pagination, DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::search::rank;
use crate::text::normalize;
use crate::types::{validate_threshold, SearchOptions, Searchable};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Minimum score for a listing search unless configured otherwise.
pub const DEFAULT_VIEW_THRESHOLD: f64 = 0.6;

/// Settings of a [`SearchView`].
///
/// ```rust
/// use postsift::view::ViewConfig;
///
/// let config = ViewConfig::from_json(r#"{ "fields": ["title", "body"] }"#).unwrap();
/// assert_eq!(config.threshold, 0.6);
/// assert_eq!(config.per_page, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
  /// Fields whose string values are searched.
  #[serde(default)]
  pub fields: Vec<String>,
  /// Minimum score for an item to be listed while a query is active.
  #[serde(default = "default_view_threshold")]
  pub threshold: f64,
  /// The page shown first.
  #[serde(default = "default_page")]
  pub page: usize,
  /// Items per page.
  #[serde(default = "default_per_page")]
  pub per_page: usize,
}

fn default_view_threshold() -> f64 {
  DEFAULT_VIEW_THRESHOLD
}

fn default_page() -> usize {
  DEFAULT_PAGE
}

fn default_per_page() -> usize {
  DEFAULT_PER_PAGE
}

impl Default for ViewConfig {
  fn default() -> Self {
    Self {
      fields: Vec::new(),
      threshold: default_view_threshold(),
      page: default_page(),
      per_page: default_per_page(),
    }
  }
}

impl ViewConfig {
  /// Creates a configuration searching the given fields.
  pub fn new<I, S>(fields: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      fields: fields.into_iter().map(Into::into).collect(),
      ..Self::default()
    }
  }

  /// Parses a JSON configuration.
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

  /// Sets the first page and the page size.
  pub fn pagination(mut self, page: usize, per_page: usize) -> Self {
    self.page = page;
    self.per_page = per_page;
    self
  }

  /// Checks the threshold and pagination settings.
  pub fn validate(&self) -> Result<()> {
    validate_threshold(self.threshold)?;
    Pagination::new(self.page, self.per_page)?;
    Ok(())
  }
}

/// A collection listed page by page and filtered by a fuzzy query.
///
/// # Examples
///
/// ```rust
/// use postsift::view::{SearchView, ViewConfig};
///
/// #[derive(serde::Serialize)]
/// struct Post { id: u32, title: String }
///
/// let posts = (1..=25)
///   .map(|id| Post { id, title: format!("post number {id}") })
///   .collect();
///
/// let mut view = SearchView::new(posts, ViewConfig::new(["title"])).unwrap();
/// assert_eq!(view.total_items(), 25);
/// assert_eq!(view.page_items().len(), 10);
///
/// view.go_to_page(3).unwrap();
/// assert_eq!(view.page_items().len(), 5);
///
/// view.set_query("number 7");
/// assert_eq!(view.pagination().page(), 1);
/// assert_eq!(view.page_items()[0].id, 7);
/// ```
#[derive(Debug)]
pub struct SearchView<T> {
  items: Vec<T>,
  options: SearchOptions<T>,
  query: String,
  pagination: Pagination,
  /// Positions in `items` of the listed items, best match first.
  listed: Vec<usize>,
  /// Serialized listed items, compared to detect a new listing.
  snapshot: Vec<Value>,
}

impl<T: Serialize + Searchable + 'static> SearchView<T> {
  /// Creates a view over `items` with no active query.
  pub fn new(items: Vec<T>, config: ViewConfig) -> Result<Self> {
    config.validate()?;
    let pagination = Pagination::new(config.page, config.per_page)?;
    let options = SearchOptions::fields(config.fields).threshold(config.threshold);

    let mut view = Self {
      items,
      options,
      query: String::new(),
      pagination,
      listed: Vec::new(),
      snapshot: Vec::new(),
    };
    view.listed = view.listing();
    view.snapshot = view.snapshot_of(&view.listed);
    Ok(view)
  }

  /// Replaces the query. The view returns to the first page whenever the
  /// listed items change, either in number or in which items are listed.
  pub fn set_query(&mut self, query: &str) {
    self.query = normalize(query);
    self.refresh();
  }

  /// Replaces the collection and keeps the query. The page is kept only when
  /// the listed items serialize the same as before.
  pub fn set_items(&mut self, items: Vec<T>) {
    self.items = items;
    self.refresh();
  }

  /// The normalized query in effect.
  pub fn query(&self) -> &str {
    &self.query
  }

  /// Every listed item, best match first; all items when no query is set.
  pub fn filtered(&self) -> Vec<&T> {
    self.listed.iter().map(|&index| &self.items[index]).collect()
  }

  /// Number of listed items across all pages.
  pub fn total_items(&self) -> usize {
    self.listed.len()
  }

  /// Number of pages for the listed items.
  pub fn total_pages(&self) -> usize {
    self.pagination.total_pages(self.total_items())
  }

  /// The listed items on the current page.
  pub fn page_items(&self) -> Vec<&T> {
    self
      .pagination
      .slice(&self.listed)
      .iter()
      .map(|&index| &self.items[index])
      .collect()
  }

  /// The current pagination state.
  pub fn pagination(&self) -> Pagination {
    self.pagination
  }

  /// Applies a change coming from a pagination control.
  pub fn handle_pagination(&mut self, page: usize, per_page: usize) -> Result<()> {
    self.pagination.handle_pagination(page, per_page)
  }

  /// Moves to `page`.
  pub fn go_to_page(&mut self, page: usize) -> Result<()> {
    self.pagination.go_to_page(page)
  }

  /// Changes the page size and returns to the first page.
  pub fn set_per_page(&mut self, per_page: usize) -> Result<()> {
    self.pagination.set_per_page(per_page)
  }

  fn listing(&self) -> Vec<usize> {
    if self.items.is_empty() {
      return Vec::new();
    }

    if self.query.is_empty() {
      return (0..self.items.len()).collect();
    }

    rank(&self.query, &self.items, &self.options)
      .into_iter()
      .map(|result| result.item)
      .collect()
  }

  fn snapshot_of(&self, listed: &[usize]) -> Vec<Value> {
    listed
      .iter()
      .map(|&index| serde_json::to_value(&self.items[index]).unwrap_or(Value::Null))
      .collect()
  }

  fn refresh(&mut self) {
    let listed = self.listing();
    let snapshot = self.snapshot_of(&listed);

    if snapshot != self.snapshot {
      tracing::debug!(
        previous = self.snapshot.len(),
        current = snapshot.len(),
        "listing changed, back to first page"
      );
      self.pagination.reset_to_first_page();
    }

    self.listed = listed;
    self.snapshot = snapshot;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Clone, PartialEq, Serialize)]
  struct Post {
    id: u32,
    title: String,
    body: String,
  }

  fn posts(count: u32) -> Vec<Post> {
    (1..=count)
      .map(|id| Post {
        id,
        title: format!("title {id}"),
        body: format!("body of post {id}"),
      })
      .collect()
  }

  #[test]
  fn test_empty_query_lists_everything() {
    let view = SearchView::new(posts(3), ViewConfig::new(["title"])).unwrap();
    let ids: Vec<u32> = view.filtered().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
  }

  #[test]
  fn test_empty_collection() {
    let mut view = SearchView::new(Vec::<Post>::new(), ViewConfig::new(["title"])).unwrap();
    view.set_query("anything");
    assert!(view.filtered().is_empty());
    assert_eq!(view.total_pages(), 0);
  }

  #[test]
  fn test_query_is_normalized() {
    let mut view = SearchView::new(posts(3), ViewConfig::new(["title"])).unwrap();
    view.set_query("  TITLE 2 ");
    assert_eq!(view.query(), "title 2");
    assert_eq!(view.filtered()[0].id, 2);
  }

  #[test]
  fn test_query_change_resets_page() {
    let mut view = SearchView::new(posts(30), ViewConfig::new(["title"])).unwrap();
    view.go_to_page(3).unwrap();
    assert_eq!(view.pagination().page(), 3);

    view.set_query("zzz");
    assert_eq!(view.total_items(), 0);
    assert_eq!(view.pagination().page(), 1);
  }

  fn greek(prefix: &str, first_id: u32) -> Vec<Post> {
    (0..15)
      .map(|n| Post {
        id: first_id + n,
        title: format!("{prefix} {}", n + 1),
        body: String::new(),
      })
      .collect()
  }

  fn alpha_and_beta() -> Vec<Post> {
    let mut items = greek("alpha", 1);
    items.extend(greek("beta", 16));
    items
  }

  #[test]
  fn test_same_listing_keeps_page() {
    let mut view = SearchView::new(posts(30), ViewConfig::new(["title"])).unwrap();
    view.go_to_page(2).unwrap();
    // A blank query lists the same 30 items.
    view.set_query("   ");
    assert_eq!(view.pagination().page(), 2);
  }

  #[test]
  fn test_same_size_different_items_resets_page() {
    let config = ViewConfig::new(["title"]).pagination(1, 5);
    let mut view = SearchView::new(alpha_and_beta(), config).unwrap();

    view.set_query("alpha");
    assert_eq!(view.total_items(), 15);
    view.go_to_page(2).unwrap();

    view.set_query("beta");
    assert_eq!(view.total_items(), 15);
    assert_eq!(view.pagination().page(), 1);
    assert!(view.page_items().iter().all(|p| p.id > 15));
  }

  #[test]
  fn test_set_items_refreshes() {
    let mut view = SearchView::new(posts(2), ViewConfig::new(["title"])).unwrap();
    assert_eq!(view.total_items(), 2);
    view.set_items(posts(12));
    assert_eq!(view.total_items(), 12);
    assert_eq!(view.total_pages(), 2);
  }

  #[test]
  fn test_set_items_with_new_data_resets_page() {
    let mut view = SearchView::new(posts(30), ViewConfig::new(["title"])).unwrap();
    view.go_to_page(3).unwrap();

    let replaced: Vec<Post> = posts(30)
      .into_iter()
      .map(|post| Post {
        id: post.id + 100,
        ..post
      })
      .collect();
    view.set_items(replaced);

    assert_eq!(view.total_items(), 30);
    assert_eq!(view.pagination().page(), 1);
    assert_eq!(view.page_items()[0].id, 101);
  }

  #[test]
  fn test_set_items_with_equal_data_keeps_page() {
    let mut view = SearchView::new(posts(30), ViewConfig::new(["title"])).unwrap();
    view.go_to_page(3).unwrap();
    view.set_items(posts(30));
    assert_eq!(view.pagination().page(), 3);
    assert_eq!(view.page_items()[0].id, 21);
  }

  #[test]
  fn test_page_items_follow_ranking() {
    let config = ViewConfig::new(["title"]).pagination(2, 5);
    let mut view = SearchView::new(alpha_and_beta(), config).unwrap();
    view.set_query("beta");
    view.go_to_page(2).unwrap();

    let filtered = view.filtered();
    let page: Vec<u32> = view.page_items().iter().map(|p| p.id).collect();
    let expected: Vec<u32> = filtered[5..10].iter().map(|p| p.id).collect();
    assert_eq!(page, expected);
  }

  #[test]
  fn test_rejects_invalid_config() {
    assert!(SearchView::new(posts(1), ViewConfig::new(["title"]).threshold(2.0)).is_err());
    assert!(SearchView::new(posts(1), ViewConfig::new(["title"]).pagination(0, 10)).is_err());
  }

  #[test]
  fn test_config_from_json() {
    let config =
      ViewConfig::from_json(r#"{ "fields": ["title"], "threshold": 0.5, "per_page": 20 }"#).unwrap();
    assert_eq!(config, ViewConfig::new(["title"]).threshold(0.5).pagination(1, 20));
    assert!(ViewConfig::from_json(r#"{ "per_page": 0 }"#).is_err());
  }
}
