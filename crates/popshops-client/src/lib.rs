//! # popshops-client
//!
//! A PopShops v2 affiliate-marketing API client for Rust.
//!
//! ## Features
//!
//! - **Clean API**: Simple, idiomatic Rust interface
//! - **Async/Await**: Built on tokio and reqwest
//! - **Generic responses**: PopShops' schemaless XML payloads come back as a
//!   navigable [`Document`](popshops_core::Document) tree
//! - **Configurable**: Environment-based configuration via popshops-core
//! - **Complete**: Product, merchant, network, deal and catalog endpoints
//!
//! ## Usage
//!
//! ```rust,no_run
//! use popshops_client::{PopShopsClient, QueryOptions};
//! use popshops_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = PopShopsClient::new(config)?;
//!
//!     // Search products by keyword
//!     let results = client.products().search(QueryOptions::new().set("keyword", "shoes")).await?;
//!     for product in results.get_seq("products.product") {
//!         println!("{:?} {:?}", product.get_str("name"), product.get_str("price"));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Credentials
//!
//! Every read endpoint authenticates with the public `api_key` embedded in
//! the URL path. The catalog endpoints additionally require the account's
//! `private_api_key`; calls fail locally with
//! [`Error::MissingCredential`](popshops_core::Error::MissingCredential)
//! when it is absent, before any request is sent.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, popshops_core::Error>`. Failures propagate
//! unchanged: no retries, no silent defaults.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod params;
pub mod transport;

// Re-export the main client and common types
pub use client::PopShopsClient;
pub use params::{QueryOptions, QueryValue};
pub use popshops_core::{Config, Document, Error, Result};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
    catalogs::{CatalogEndpoints, MerchantIds},
    deals::DealEndpoints,
    merchants::MerchantEndpoints,
    networks::NetworkEndpoints,
    products::ProductEndpoints,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = Config::default_with_key("test_key".to_string());
        assert_eq!(config.api_key, "test_key");
    }
}
