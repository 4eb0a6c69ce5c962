//! REST API errors.

use thiserror::Error;

/// Errors that can occur when talking to the store REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Endpoint path could not be joined onto the base URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure, server error or unreadable response.
    Network,
    /// The API rejected the request (4xx other than timeout and rate limit).
    Validation,
}

impl ApiError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Api {
                status: 400..=407 | 409..=428 | 430..=499,
                ..
            } => ErrorKind::Validation,
            _ => ErrorKind::Network,
        }
    }

    /// The server-provided message for an API error.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Uses the `message` (or `error`) field of a JSON body when present,
/// otherwise the first 200 characters of the raw text.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .into_iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classifies_status() {
        let api = |status| ApiError::Api {
            status,
            message: String::new(),
        };
        assert_eq!(api(400).kind(), ErrorKind::Validation);
        assert_eq!(api(404).kind(), ErrorKind::Validation);
        assert_eq!(api(429).kind(), ErrorKind::Network);
        assert_eq!(api(503).kind(), ErrorKind::Network);
        assert_eq!(ApiError::Parse("eof".to_string()).kind(), ErrorKind::Network);
    }

    #[test]
    fn test_error_message_prefers_json_field() {
        assert_eq!(error_message(r#"{"message": "Product not found"}"#), "Product not found");
        assert_eq!(error_message(r#"{"error": "Unauthorized"}"#), "Unauthorized");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(&"x".repeat(500)).len(), 200);
    }
}
