//! Deal search and deal-type metadata endpoints

use super::unwrap_key;
use crate::params::QueryOptions;
use crate::transport::Transport;
use popshops_core::{Document, Result};
use std::sync::Arc;
use tracing::instrument;

/// Deal endpoints
pub struct DealEndpoints {
    transport: Arc<Transport>,
}

impl DealEndpoints {
    /// Create a new deal endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Search deals
    ///
    /// Performs `GET {api}/{api_key}/deals.xml` with `options` as query
    /// parameters and returns the response's `search_results` element.
    #[instrument(skip(self, options))]
    pub async fn search(&self, options: QueryOptions) -> Result<Document> {
        let url = self.transport.api_url("deals.xml");
        let doc = self.transport.get(&url, &options).await?;
        unwrap_key(doc, "search_results")
    }

    /// List the deal types PopShops classifies deals under
    ///
    /// Performs `GET {api}/{api_key}/deal_types.xml` and returns the
    /// response's `deal_types` element.
    #[instrument(skip(self))]
    pub async fn types(&self) -> Result<Document> {
        let url = self.transport.api_url("deal_types.xml");
        let doc = self.transport.get(&url, &QueryOptions::new()).await?;
        unwrap_key(doc, "deal_types")
    }
}
