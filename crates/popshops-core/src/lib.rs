pub mod config;
pub mod document;
pub mod error;

pub use config::Config;
pub use document::Document;
pub use error::{Error, Result};

/// Base URL for the PopShops read API
pub const POPSHOPS_API_BASE_URL: &str = "https://api.popshops.com/v2";

/// Base URL for the PopShops catalog endpoints
pub const POPSHOPS_SITE_BASE_URL: &str = "https://www.popshops.com/v2";
