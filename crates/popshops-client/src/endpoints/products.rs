//! Product search endpoint
//!
//! Searches the PopShops product catalog with the remote API's open-ended
//! filter set (keyword, merchant, price range, pagination hints and so on);
//! filters are forwarded verbatim, never validated locally.

use super::unwrap_key;
use crate::params::QueryOptions;
use crate::transport::Transport;
use popshops_core::{Document, Result};
use std::sync::Arc;
use tracing::instrument;

/// Product search endpoint
pub struct ProductEndpoints {
    transport: Arc<Transport>,
}

impl ProductEndpoints {
    /// Create a new product endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Search products
    ///
    /// Performs `GET {api}/{api_key}/products.xml` with `options` as query
    /// parameters and returns the response's `search_results` element.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use popshops_client::{PopShopsClient, QueryOptions};
    /// # use popshops_core::Config;
    /// # async fn run() -> popshops_core::Result<()> {
    /// # let client = PopShopsClient::new(Config::default_with_key("key".into()))?;
    /// let results = client.products().search(QueryOptions::new().set("keyword", "shoes")).await?;
    /// for product in results.get_seq("products.product") {
    ///     println!("{:?}", product.get_str("name"));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, options))]
    pub async fn search(&self, options: QueryOptions) -> Result<Document> {
        let url = self.transport.api_url("products.xml");
        let doc = self.transport.get(&url, &options).await?;
        unwrap_key(doc, "search_results")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use popshops_core::{Config, Error};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_transport(server_uri: &str) -> Arc<Transport> {
        let mut config = Config::default_with_key("test_key".to_string());
        config.api_base_url = server_uri.to_string();
        config.site_base_url = server_uri.to_string();
        Arc::new(Transport::new(&config).unwrap())
    }

    #[tokio::test]
    async fn test_search_builds_request_and_unwraps_results() {
        let server = MockServer::start().await;
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<search_results>
  <products count="2">
    <product><name>Widget</name><price>9.99</price></product>
    <product><name>Gadget</name><price>19.99</price></product>
  </products>
</search_results>"#;

        Mock::given(method("GET"))
            .and(path("/test_key/products.xml"))
            .and(query_param("keyword", "shoes"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let endpoints = ProductEndpoints::new(test_transport(&server.uri()));
        let options = QueryOptions::new().set("keyword", "shoes").set("page", 2u32);
        let results = endpoints.search(options).await.unwrap();

        let products = results.get_seq("products.product");
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].get_str("name"), Some("Widget"));
        assert_eq!(products[1].get_str("price"), Some("19.99"));
    }

    #[tokio::test]
    async fn test_search_missing_unwrap_key_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test_key/products.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<unrelated/>"))
            .mount(&server)
            .await;

        let endpoints = ProductEndpoints::new(test_transport(&server.uri()));
        let err = endpoints.search(QueryOptions::new()).await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn test_search_surfaces_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test_key/products.xml"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let endpoints = ProductEndpoints::new(test_transport(&server.uri()));
        let err = endpoints.search(QueryOptions::new()).await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }
}
