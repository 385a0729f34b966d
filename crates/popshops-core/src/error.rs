use thiserror::Error;

/// The main error type for popshops-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// A private API key is required but was not configured
  #[error("Missing credential: {0}")]
  MissingCredential(String),

  /// HTTP transport error (connection failure or non-2xx status)
  #[error("HTTP error: {0}")]
  Http(String),

  /// Malformed XML body or absent unwrap key in the response
  #[error("Parse error: {0}")]
  Parse(String),
}

/// Result type alias for popshops-* crates
pub type Result<T> = std::result::Result<T, Error>;
