//! HTTP transport layer for PopShops API requests

use crate::params::QueryOptions;
use popshops_core::{Config, Document, Error, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// HTTP transport layer for making requests to the PopShops API
///
/// Holds the credentials and both base URLs (the read API lives on
/// api.popshops.com, the catalog endpoints on www.popshops.com). Every call
/// is a single request/response round trip; failures propagate unchanged.
pub struct Transport {
    client: Client,
    api_key: String,
    private_api_key: Option<String>,
    api_base_url: String,
    site_base_url: String,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("popshops-client/0.1.0")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            private_api_key: config.private_api_key.clone(),
            api_base_url: config.api_base_url.clone(),
            site_base_url: config.site_base_url.clone(),
        })
    }

    /// Full URL for a read-API resource, e.g. `products.xml`
    pub fn api_url(&self, resource: &str) -> String {
        format!("{}/{}/{}", self.api_base_url, self.api_key, resource)
    }

    /// Full URL for a catalog resource, e.g. `catalogs/update.xml`
    pub fn site_url(&self, resource: &str) -> String {
        format!("{}/{}/{}", self.site_base_url, self.api_key, resource)
    }

    /// Private API key, if one was configured
    pub fn private_api_key(&self) -> Option<&str> {
        self.private_api_key.as_deref()
    }

    /// Make a GET request and parse the XML response body
    #[instrument(skip(self, params), fields(url = %url))]
    pub async fn get(&self, url: &str, params: &QueryOptions) -> Result<Document> {
        let url = self.build_url(url, params)?;
        debug!("GET {}", url);
        let request = self.client.get(url.as_str());
        self.execute(request).await
    }

    /// Make a POST request with URL-encoded query parameters and parse the
    /// XML response body
    #[instrument(skip(self, params), fields(url = %url))]
    pub async fn post(&self, url: &str, params: &QueryOptions) -> Result<Document> {
        let url = self.build_url(url, params)?;
        debug!("POST {}", url);
        let request = self.client.post(url.as_str());
        self.execute(request).await
    }

    /// Build the full URL for an API request
    fn build_url(&self, url: &str, params: &QueryOptions) -> Result<Url> {
        let mut url =
            Url::parse(url).map_err(|e| Error::Http(format!("Invalid URL: {}", e)))?;

        if !params.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params.pairs() {
                query_pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Send the request, check the status and parse the body
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Document> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            error!("Request failed with status: {}", status);
            return Err(Error::Http(format!("HTTP error: {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;
        debug!("Response body length: {} bytes", text.len());

        Document::parse(&text)
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("api_base_url", &self.api_base_url)
            .field("site_base_url", &self.site_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_transport() -> Transport {
        let config = Config::default_with_key("test_key".to_string())
            .with_private_key("secret".to_string());
        Transport::new(&config).unwrap()
    }

    #[test]
    fn test_api_url() {
        let transport = test_transport();
        assert_eq!(
            transport.api_url("products.xml"),
            "https://api.popshops.com/v2/test_key/products.xml"
        );
    }

    #[test]
    fn test_site_url() {
        let transport = test_transport();
        assert_eq!(
            transport.site_url("catalogs/list.xml"),
            "https://www.popshops.com/v2/test_key/catalogs/list.xml"
        );
    }

    #[test]
    fn test_build_url_encodes_query_params() {
        let transport = test_transport();
        let params = QueryOptions::new().set("keyword", "red shoes").set("page", 2u32);

        let url = transport
            .build_url("https://api.popshops.com/v2/test_key/products.xml", &params)
            .unwrap();

        assert_eq!(url.query(), Some("keyword=red+shoes&page=2"));
    }

    #[test]
    fn test_build_url_without_params_has_no_query() {
        let transport = test_transport();
        let url = transport
            .build_url("https://api.popshops.com/v2/test_key/networks.xml", &QueryOptions::new())
            .unwrap();

        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_build_url_rejects_invalid_url() {
        let transport = test_transport();
        let result = transport.build_url("not a url", &QueryOptions::new());
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
