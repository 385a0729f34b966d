//! Affiliate network metadata endpoint

use super::unwrap_key;
use crate::params::QueryOptions;
use crate::transport::Transport;
use popshops_core::{Document, Result};
use std::sync::Arc;
use tracing::instrument;

/// Network endpoints
pub struct NetworkEndpoints {
    transport: Arc<Transport>,
}

impl NetworkEndpoints {
    /// Create a new network endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List the affiliate networks PopShops aggregates
    ///
    /// Performs `GET {api}/{api_key}/networks.xml` and returns the response's
    /// `networks` element.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Document> {
        let url = self.transport.api_url("networks.xml");
        let doc = self.transport.get(&url, &QueryOptions::new()).await?;
        unwrap_key(doc, "networks")
    }
}
