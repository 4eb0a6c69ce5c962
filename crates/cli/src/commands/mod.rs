//! Command implementations.

pub mod admin;
pub mod build;
pub mod products;

use rigstore_core::CoreError;
use rigstore_storefront::StoreError;
use rigstore_storefront::api::{ApiClient, ApiError};
use rigstore_storefront::config::{ConfigError, StorefrontConfig};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The API client could not be created or a request failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A storefront or admin operation failed.
    #[error("{}", .0.user_message())]
    Store(#[from] StoreError),

    /// Invalid command-line input.
    #[error("Invalid input: {0}")]
    Input(#[from] CoreError),

    /// Build file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Build file is not a JSON object of slot names to product ids.
    #[error("Invalid build file: {0}")]
    BuildFile(#[from] serde_json::Error),

    /// A product id in the build file is not in the catalog.
    #[error("Unknown product for {slot}: {id}")]
    UnknownProduct { slot: String, id: String },

    /// Page size is not one of the offered choices.
    #[error("Invalid page size {0}: choose one of 4, 8 or 12")]
    InvalidPerPage(u32),

    /// Order or payment status is not recognised.
    #[error("{0}")]
    InvalidStatus(String),
}

/// Load configuration and build an API client.
fn connect() -> Result<ApiClient, CommandError> {
    let config = StorefrontConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");
    let client = ApiClient::new(&config)?;
    tracing::debug!(base_url = %client.base_url(), "API client ready");
    Ok(client)
}
