//! Error type at the storefront service boundary.
//!
//! Every service entry point returns `Result<T, StoreError>`. Filtering,
//! sorting and pagination never fail; what remains is bad input, a failed
//! fetch, or a cart commit that stopped part way.

use rigstore_core::CoreError;
use thiserror::Error;

use crate::api::{ApiError, ErrorKind};
use crate::services::build::CommitError;

/// Storefront service error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input or precondition rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(#[from] CoreError),

    /// A collaborator failed to return data or accept a write.
    #[error("Fetch error: {0}")]
    Fetch(#[from] ApiError),

    /// A build commit stopped after adding some components.
    #[error(transparent)]
    Commit(#[from] CommitError),

    /// A build commit is already running for this session.
    #[error("A build is already being added to the cart")]
    CommitInProgress,
}

impl StoreError {
    /// Message suitable for showing to the shopper or admin.
    ///
    /// API errors surface the server's own message when it sent one.
    /// Network failures without one ask the user to retry.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch(err) => match (err.api_message(), err.kind()) {
                (Some(message), _) => message.to_string(),
                (None, ErrorKind::Network) => format!("Could not reach the store, please try again ({err})"),
                (None, ErrorKind::Validation) => err.to_string(),
            },
            other => other.to_string(),
        }
    }
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_api_message() {
        let err = StoreError::Fetch(ApiError::Api {
            status: 404,
            message: "Order not found".to_string(),
        });
        assert_eq!(err.user_message(), "Order not found");

        let err = StoreError::Fetch(ApiError::Parse("expected value".to_string()));
        assert_eq!(
            err.user_message(),
            "Could not reach the store, please try again (Parse error: expected value)"
        );

        let err = StoreError::Fetch(ApiError::Api {
            status: 422,
            message: String::new(),
        });
        assert!(!err.user_message().starts_with("Could not reach"));
    }
}
