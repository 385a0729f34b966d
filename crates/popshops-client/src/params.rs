//! Query parameter handling
//!
//! PopShops search filters are open-ended and defined by the remote API, so
//! the client forwards them verbatim instead of modeling them. `QueryOptions`
//! keeps insertion order and allows repeated values, which the transport
//! flattens into URL-encoded query pairs.

/// An ordered, open-ended set of query parameters.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
  entries: Vec<(String, QueryValue)>,
}

/// A scalar or list query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
  /// A single value
  Scalar(String),
  /// Multiple values for the same key
  List(Vec<String>),
}

impl QueryOptions {
  /// Create an empty set of options.
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style insert.
  pub fn set(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
    self.insert(key, value);
    self
  }

  /// Append a parameter, keeping any existing entries for the same key.
  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
    self.entries.push((key.into(), value.into()));
  }

  /// True when no parameters have been added.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Flattened `(key, value)` pairs in insertion order; list values repeat
  /// their key once per element.
  pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().flat_map(|(key, value)| {
      let values: Vec<&str> = match value {
        QueryValue::Scalar(s) => vec![s.as_str()],
        QueryValue::List(items) => items.iter().map(String::as_str).collect(),
      };
      values.into_iter().map(move |v| (key.as_str(), v))
    })
  }
}

impl From<&str> for QueryValue {
  fn from(value: &str) -> Self {
    QueryValue::Scalar(value.to_string())
  }
}

impl From<String> for QueryValue {
  fn from(value: String) -> Self {
    QueryValue::Scalar(value)
  }
}

impl From<u32> for QueryValue {
  fn from(value: u32) -> Self {
    QueryValue::Scalar(value.to_string())
  }
}

impl From<u64> for QueryValue {
  fn from(value: u64) -> Self {
    QueryValue::Scalar(value.to_string())
  }
}

impl From<i64> for QueryValue {
  fn from(value: i64) -> Self {
    QueryValue::Scalar(value.to_string())
  }
}

impl From<Vec<String>> for QueryValue {
  fn from(values: Vec<String>) -> Self {
    QueryValue::List(values)
  }
}

impl From<Vec<&str>> for QueryValue {
  fn from(values: Vec<&str>) -> Self {
    QueryValue::List(values.into_iter().map(str::to_string).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_pairs_keep_insertion_order() {
    let options = QueryOptions::new().set("keyword", "shoes").set("page", 2u32);
    let pairs: Vec<_> = options.pairs().collect();
    assert_eq!(pairs, vec![("keyword", "shoes"), ("page", "2")]);
  }

  #[test]
  fn test_list_values_repeat_the_key() {
    let options = QueryOptions::new().set("merchant_type_id", vec!["1", "7"]);
    let pairs: Vec<_> = options.pairs().collect();
    assert_eq!(pairs, vec![("merchant_type_id", "1"), ("merchant_type_id", "7")]);
  }

  #[test]
  fn test_empty_options() {
    assert!(QueryOptions::new().is_empty());
    assert_eq!(QueryOptions::new().pairs().count(), 0);
  }
}
