//! Fuzzy search over a small list of blog posts.

use postsift::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct Post {
  id: u32,
  title: String,
  body: String,
}

fn sample_posts() -> Vec<Post> {
  [
    (1, "Tom Bombadil adventures", "Old Forest tales and songs"),
    (2, "Getting started with Rust", "Ownership, borrowing and lifetimes"),
    (3, "Fearless concurrency", "Threads, channels and Rust's Send and Sync"),
    (4, "Gardening in spring", "What to plant before the last frost"),
    (5, "Rust web development", "Building services with async Rust"),
  ]
  .into_iter()
  .map(|(id, title, body)| Post {
    id,
    title: title.to_string(),
    body: body.to_string(),
  })
  .collect()
}

fn main() {
  println!("=== Postsift Fuzzy Search Example ===\n");

  let posts = sample_posts();
  let searcher = create_searcher(posts, SearchOptions::fields(["title", "body"]).limit(3));

  for query in ["rust", "bombadli", "concurency threads", "garden", "   "] {
    println!("Query: \"{}\"", query);

    let results = searcher.search_with_scores(query);
    if results.is_empty() {
      println!("  No results found.\n");
      continue;
    }

    for (i, result) in results.iter().enumerate() {
      println!(
        "  {}. [{}] {} (score: {:.3})",
        i + 1,
        result.item.id,
        result.item.title,
        result.score
      );
    }
    println!();
  }
}
