//! One module per PopShops resource group

pub mod catalogs;
pub mod deals;
pub mod merchants;
pub mod networks;
pub mod products;

use popshops_core::{Document, Error, Result};

/// Extract the named top-level element from a parsed response.
///
/// The data of interest always sits under one well-known key (the PopShops
/// response root, or a nested path like `results.catalogs`); anything else is
/// metadata the caller never sees. An absent key is a parse-class failure,
/// never an empty document.
pub(crate) fn unwrap_key(doc: Document, key: &str) -> Result<Document> {
  doc.into_at(key).ok_or_else(|| Error::Parse(format!("response missing `{key}` element")))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_unwrap_key_extracts_root_element() {
    let doc = Document::parse("<merchants><merchant>Acme</merchant></merchants>").unwrap();
    let merchants = unwrap_key(doc, "merchants").unwrap();
    assert_eq!(merchants.get_str("merchant"), Some("Acme"));
  }

  #[test]
  fn test_unwrap_key_follows_nested_path() {
    let doc = Document::parse("<results><catalogs><catalog>c</catalog></catalogs></results>")
      .unwrap();
    let catalogs = unwrap_key(doc, "results.catalogs").unwrap();
    assert_eq!(catalogs.get_str("catalog"), Some("c"));
  }

  #[test]
  fn test_unwrap_key_missing_is_parse_error() {
    let doc = Document::parse("<unexpected/>").unwrap();
    let err = unwrap_key(doc, "search_results").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
  }
}
