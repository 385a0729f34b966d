//! Configuration management for the PopShops client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the PopShops client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// PopShops public API key, used by every read endpoint
  pub api_key: String,

  /// PopShops private API key, required by the catalog endpoints
  pub private_api_key: Option<String>,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the read API (api.popshops.com)
  pub api_base_url: String,

  /// Base URL for the catalog endpoints (www.popshops.com)
  pub site_base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("POPSHOPS_API_KEY")
      .map_err(|_| Error::Config("POPSHOPS_API_KEY not set".to_string()))?;

    let private_api_key = env::var("POPSHOPS_PRIVATE_API_KEY").ok();

    let timeout_secs = env::var("POPSHOPS_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid POPSHOPS_TIMEOUT_SECS".to_string()))?;

    let api_base_url =
      env::var("POPSHOPS_API_BASE_URL").unwrap_or_else(|_| crate::POPSHOPS_API_BASE_URL.to_string());

    let site_base_url = env::var("POPSHOPS_SITE_BASE_URL")
      .unwrap_or_else(|_| crate::POPSHOPS_SITE_BASE_URL.to_string());

    Ok(Config { api_key, private_api_key, timeout_secs, api_base_url, site_base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      private_api_key: None,
      timeout_secs: 30,
      api_base_url: crate::POPSHOPS_API_BASE_URL.to_string(),
      site_base_url: crate::POPSHOPS_SITE_BASE_URL.to_string(),
    }
  }

  /// Add a private API key to an existing config
  pub fn with_private_key(mut self, private_api_key: String) -> Self {
    self.private_api_key = Some(private_api_key);
    self
  }
}
