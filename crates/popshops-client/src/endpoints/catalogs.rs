//! Catalog listing and merchant activation endpoints
//!
//! Catalogs live on www.popshops.com rather than the read API host and every
//! call requires the account's private API key. The guard runs locally: a
//! client configured without a private key fails before any request is sent.

use super::unwrap_key;
use crate::params::{QueryOptions, QueryValue};
use crate::transport::Transport;
use popshops_core::{Document, Error, Result};
use std::sync::Arc;
use tracing::instrument;

/// Catalog endpoints
pub struct CatalogEndpoints {
    transport: Arc<Transport>,
}

impl CatalogEndpoints {
    /// Create a new catalog endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List the account's catalogs
    ///
    /// Performs `GET {site}/{api_key}/catalogs/list.xml?private_api_key=...`
    /// and returns the response's `results.catalogs` element.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Document> {
        let private_api_key = self.require_private_key()?.to_string();
        let url = self.transport.site_url("catalogs/list.xml");
        let options = QueryOptions::new().set("private_api_key", private_api_key);
        let doc = self.transport.get(&url, &options).await?;
        unwrap_key(doc, "results.catalogs")
    }

    /// Update a catalog
    ///
    /// Merges `catalog_key` and the private API key into `options`, performs
    /// `POST {site}/{api_key}/catalogs/update.xml?...` and returns the
    /// response's `response` element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] without issuing any request when
    /// the client was built without a private API key.
    #[instrument(skip(self, options), fields(catalog_key = %catalog_key))]
    pub async fn update(&self, catalog_key: &str, options: QueryOptions) -> Result<Document> {
        let private_api_key = self.require_private_key()?.to_string();
        let mut options = options;
        options.insert("catalog_key", catalog_key);
        options.insert("private_api_key", private_api_key);

        let url = self.transport.site_url("catalogs/update.xml");
        let doc = self.transport.post(&url, &options).await?;
        unwrap_key(doc, "response")
    }

    /// Activate merchants in a catalog by network-merchant id
    ///
    /// `network_merchant_ids` is the combined `{network_id}-{network_merchant_id}`
    /// form PopShops requires, comma-separated for multiple. For example,
    /// activating 'Things From Another World' (network_merchant_id 8908) on
    /// ShareASale (network_id 1) takes `"1-8908"`; several at once take
    /// `"1-8908,2-3233"`. The ids are passed through opaquely.
    #[instrument(skip(self))]
    pub async fn activate_network_merchants(
        &self,
        catalog_key: &str,
        network_merchant_ids: &str,
    ) -> Result<Document> {
        let options = QueryOptions::new()
            .set("network_merchant_id", network_merchant_ids)
            .set("active", 1u32);
        self.update(catalog_key, options).await
    }

    /// Deactivate merchants in a catalog by network-merchant id
    ///
    /// Takes the same combined-id form as
    /// [`activate_network_merchants`](Self::activate_network_merchants).
    #[instrument(skip(self))]
    pub async fn deactivate_network_merchants(
        &self,
        catalog_key: &str,
        network_merchant_ids: &str,
    ) -> Result<Document> {
        let options = QueryOptions::new()
            .set("network_merchant_id", network_merchant_ids)
            .set("active", 0u32);
        self.update(catalog_key, options).await
    }

    /// Activate merchants in a catalog by PopShops merchant id
    ///
    /// `merchants` can be a single id (number or string) or a sequence of
    /// ids; a sequence is joined into a comma-separated list.
    #[instrument(skip(self, merchants))]
    pub async fn activate_merchants(
        &self,
        catalog_key: &str,
        merchants: impl Into<MerchantIds>,
    ) -> Result<Document> {
        let options = QueryOptions::new()
            .set("merchant_id", merchants.into())
            .set("active", 1u32);
        self.update(catalog_key, options).await
    }

    /// Deactivate merchants in a catalog by PopShops merchant id
    #[instrument(skip(self, merchants))]
    pub async fn deactivate_merchants(
        &self,
        catalog_key: &str,
        merchants: impl Into<MerchantIds>,
    ) -> Result<Document> {
        let options = QueryOptions::new()
            .set("merchant_id", merchants.into())
            .set("active", 0u32);
        self.update(catalog_key, options).await
    }

    fn require_private_key(&self) -> Result<&str> {
        self.transport.private_api_key().ok_or_else(|| {
            Error::MissingCredential(
                "private_api_key is required for catalog operations".to_string(),
            )
        })
    }
}

/// A normalized merchant-id list
///
/// Accepts a single id or a sequence; a sequence becomes a comma-joined
/// string, a scalar passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantIds(String);

impl MerchantIds {
    /// The normalized comma-separated form sent on the wire
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for MerchantIds {
    fn from(id: u32) -> Self {
        MerchantIds(id.to_string())
    }
}

impl From<u64> for MerchantIds {
    fn from(id: u64) -> Self {
        MerchantIds(id.to_string())
    }
}

impl From<&str> for MerchantIds {
    fn from(id: &str) -> Self {
        MerchantIds(id.to_string())
    }
}

impl From<String> for MerchantIds {
    fn from(id: String) -> Self {
        MerchantIds(id)
    }
}

impl From<Vec<u32>> for MerchantIds {
    fn from(ids: Vec<u32>) -> Self {
        let joined: Vec<String> = ids.into_iter().map(|id| id.to_string()).collect();
        MerchantIds(joined.join(","))
    }
}

impl From<Vec<u64>> for MerchantIds {
    fn from(ids: Vec<u64>) -> Self {
        let joined: Vec<String> = ids.into_iter().map(|id| id.to_string()).collect();
        MerchantIds(joined.join(","))
    }
}

impl From<Vec<&str>> for MerchantIds {
    fn from(ids: Vec<&str>) -> Self {
        MerchantIds(ids.join(","))
    }
}

impl From<Vec<String>> for MerchantIds {
    fn from(ids: Vec<String>) -> Self {
        MerchantIds(ids.join(","))
    }
}

impl From<MerchantIds> for QueryValue {
    fn from(ids: MerchantIds) -> Self {
        QueryValue::Scalar(ids.0)
    }
}
