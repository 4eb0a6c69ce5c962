//! Storefront client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `RIGSTORE_API_URL` - Base URL of the store REST API (e.g., `http://localhost:5000/api`)
//!
//! ## Optional
//! - `RIGSTORE_API_TOKEN` - Bearer token sent with every request
//! - `RIGSTORE_HTTP_TIMEOUT_SECS` - Per-request timeout (default: 15)
//! - `RIGSTORE_CACHE_TTL_SECS` - Product list cache lifetime (default: 300)
//! - `RIGSTORE_CACHE_CAPACITY` - Maximum cached responses (default: 1000)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct StorefrontConfig {
    /// Base URL of the REST API; endpoint paths are appended to it
    pub api_url: Url,
    /// Optional bearer token
    pub api_token: Option<SecretString>,
    /// Per-request timeout
    pub http_timeout: Duration,
    /// Lifetime of cached product lists
    pub cache_ttl: Duration,
    /// Maximum number of cached responses
    pub cache_capacity: u64,
}

impl std::fmt::Debug for StorefrontConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontConfig")
            .field("api_url", &self.api_url.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("http_timeout", &self.http_timeout)
            .field("cache_ttl", &self.cache_ttl)
            .field("cache_capacity", &self.cache_capacity)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API URL is missing or any variable fails
    /// to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = parse_api_url("RIGSTORE_API_URL", &get_required_env("RIGSTORE_API_URL")?)?;
        let api_token = get_optional_env("RIGSTORE_API_TOKEN")
            .filter(|token| !token.is_empty())
            .map(SecretString::from);
        let http_timeout = Duration::from_secs(get_env_parsed("RIGSTORE_HTTP_TIMEOUT_SECS", 15)?);
        let cache_ttl = Duration::from_secs(get_env_parsed("RIGSTORE_CACHE_TTL_SECS", 300)?);
        let cache_capacity = get_env_parsed("RIGSTORE_CACHE_CAPACITY", 1000)?;

        Ok(Self {
            api_url,
            api_token,
            http_timeout,
            cache_ttl,
            cache_capacity,
        })
    }

    /// Configuration for `api_url` with default timeouts and cache settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `api_url` is not an absolute
    /// http(s) URL.
    pub fn with_api_url(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: parse_api_url("RIGSTORE_API_URL", api_url)?,
            api_token: None,
            http_timeout: Duration::from_secs(15),
            cache_ttl: Duration::from_secs(300),
            cache_capacity: 1000,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get a numeric environment variable with a default value.
fn get_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

/// Parse and normalize the API base URL.
///
/// A trailing slash is added so endpoint paths join under the base path
/// instead of replacing its last segment.
fn parse_api_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
