//! The top-level PopShops client

use crate::endpoints::{
  catalogs::CatalogEndpoints, deals::DealEndpoints, merchants::MerchantEndpoints,
  networks::NetworkEndpoints, products::ProductEndpoints,
};
use crate::transport::Transport;
use popshops_core::{Config, Error, Result};
use std::sync::Arc;

/// Main PopShops API client
///
/// Provides access to all PopShops v2 endpoints through organized endpoint
/// modules. Holds the credentials and a shared transport; instances are
/// immutable after construction, so one client may serve concurrent calls.
///
/// # Examples
///
/// ```ignore
/// use popshops_client::{PopShopsClient, QueryOptions};
/// use popshops_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = PopShopsClient::new(config)?;
///
///     // Search products
///     let results = client.products().search(QueryOptions::new().set("keyword", "shoes")).await?;
///     println!("total: {:?}", results.get_str("products.count"));
///
///     // Activate two merchants in a catalog
///     client.catalogs().activate_network_merchants("cat123", "1-8908,2-3233").await?;
///
///     Ok(())
/// }
/// ```
pub struct PopShopsClient {
  transport: Arc<Transport>,
}

impl PopShopsClient {
  /// Create a new PopShops API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing the API keys and base URLs
  ///
  /// # Errors
  ///
  /// Returns an error if `api_key` is empty or the HTTP client cannot be
  /// created.
  pub fn new(config: Config) -> Result<Self> {
    if config.api_key.trim().is_empty() {
      return Err(Error::Config("api_key must not be empty".to_string()));
    }

    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport })
  }

  /// Get access to the product search endpoint
  pub fn products(&self) -> ProductEndpoints {
    ProductEndpoints::new(self.transport.clone())
  }

  /// Get access to the merchant search and merchant-type endpoints
  pub fn merchants(&self) -> MerchantEndpoints {
    MerchantEndpoints::new(self.transport.clone())
  }

  /// Get access to the affiliate network endpoint
  pub fn networks(&self) -> NetworkEndpoints {
    NetworkEndpoints::new(self.transport.clone())
  }

  /// Get access to the deal search and deal-type endpoints
  pub fn deals(&self) -> DealEndpoints {
    DealEndpoints::new(self.transport.clone())
  }

  /// Get access to the catalog endpoints
  ///
  /// Catalog operations require a `private_api_key` in the configuration and
  /// fail with [`Error::MissingCredential`] before any network I/O otherwise.
  pub fn catalogs(&self) -> CatalogEndpoints {
    CatalogEndpoints::new(self.transport.clone())
  }
}

impl std::fmt::Debug for PopShopsClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PopShopsClient").field("transport", &self.transport).finish()
  }
}
