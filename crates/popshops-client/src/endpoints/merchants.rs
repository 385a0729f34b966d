//! Merchant search and merchant-type metadata endpoints

use super::unwrap_key;
use crate::params::QueryOptions;
use crate::transport::Transport;
use popshops_core::{Document, Result};
use std::sync::Arc;
use tracing::instrument;

/// Merchant endpoints
pub struct MerchantEndpoints {
    transport: Arc<Transport>,
}

impl MerchantEndpoints {
    /// Create a new merchant endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Search merchants
    ///
    /// Performs `GET {api}/{api_key}/merchants.xml` with `options` as query
    /// parameters and returns the response's `merchants` element.
    #[instrument(skip(self, options))]
    pub async fn search(&self, options: QueryOptions) -> Result<Document> {
        let url = self.transport.api_url("merchants.xml");
        let doc = self.transport.get(&url, &options).await?;
        unwrap_key(doc, "merchants")
    }

    /// List the merchant types PopShops classifies merchants under
    ///
    /// Performs `GET {api}/{api_key}/merchant_types.xml` and returns the
    /// response's `merchant_types` element.
    #[instrument(skip(self))]
    pub async fn types(&self) -> Result<Document> {
        let url = self.transport.api_url("merchant_types.xml");
        let doc = self.transport.get(&url, &QueryOptions::new()).await?;
        unwrap_key(doc, "merchant_types")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use popshops_core::Config;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_transport(server_uri: &str) -> Arc<Transport> {
        let mut config = Config::default_with_key("test_key".to_string());
        config.api_base_url = server_uri.to_string();
        config.site_base_url = server_uri.to_string();
        Arc::new(Transport::new(&config).unwrap())
    }

    #[tokio::test]
    async fn test_search_forwards_options() {
        let server = MockServer::start().await;
        let body = r#"<merchants count="1">
  <merchant id="42"><name>Acme</name></merchant>
</merchants>"#;

        Mock::given(method("GET"))
            .and(path("/test_key/merchants.xml"))
            .and(query_param("keyword", "acme"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let endpoints = MerchantEndpoints::new(test_transport(&server.uri()));
        let merchants =
            endpoints.search(QueryOptions::new().set("keyword", "acme")).await.unwrap();

        assert_eq!(merchants.get_str("count"), Some("1"));
        assert_eq!(merchants.get_str("merchant.name"), Some("Acme"));
    }

    #[tokio::test]
    async fn test_types_has_no_query_parameters() {
        let server = MockServer::start().await;
        let body = "<merchant_types><merchant_type>Apparel</merchant_type></merchant_types>";

        Mock::given(method("GET"))
            .and(path("/test_key/merchant_types.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let endpoints = MerchantEndpoints::new(test_transport(&server.uri()));
        let types = endpoints.types().await.unwrap();
        assert_eq!(types.get_seq("merchant_type").len(), 1);
    }
}
