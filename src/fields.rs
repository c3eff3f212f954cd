//! Searchable text built from named fields of serializable records.

use crate::text::normalize;
use crate::types::SearchOptions;
use serde::Serialize;
use serde_json::Value;

/// Builds the searchable text of `item` from the given fields.
///
/// The item is serialized to JSON and each field is looked up in order.
/// String values are joined with a single space; missing or `null` fields
/// contribute an empty string and any other value (numbers, booleans, arrays,
/// objects) is skipped. The result is lower-cased and trimmed.
///
/// An item that does not serialize to a JSON object yields an empty string.
///
/// ```rust
/// use postsift::fields::field_text;
///
/// #[derive(serde::Serialize)]
/// struct User { name: &'static str, email: &'static str, age: u32 }
///
/// let user = User { name: "John Doe", email: "John@Example.com", age: 25 };
/// let fields = vec!["name".to_string(), "email".to_string(), "age".to_string()];
/// assert_eq!(field_text(&user, &fields), "john doe john@example.com");
/// ```
pub fn field_text<T: Serialize>(item: &T, fields: &[String]) -> String {
  let value = match serde_json::to_value(item) {
    Ok(value) => value,
    Err(err) => {
      tracing::trace!(%err, "item could not be serialized, searching as empty text");
      return String::new();
    }
  };

  let parts: Vec<&str> = fields
    .iter()
    .filter_map(|field| match value.get(field.as_str()) {
      Some(Value::String(s)) => Some(s.as_str()),
      None | Some(Value::Null) => Some(""),
      Some(_) => None,
    })
    .collect();

  normalize(&parts.join(" "))
}

impl<T: Serialize + 'static> SearchOptions<T> {
  /// Creates options that search the string values of the named fields.
  ///
  /// See [`field_text`] for how the text is assembled.
  pub fn fields<I, S>(fields: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
    Self::with_value(move |item: &T| field_text(item, &fields))
  }
}
