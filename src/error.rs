//! Error types for the TierBoard client.

use thiserror::Error;

/// Main error type for the TierBoard client.
#[derive(Error, Debug)]
pub enum Error {
    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// TierBoard API error
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Typed errors for TierBoard API failures.
///
/// Each variant corresponds to an error category from the API, mapped
/// from the HTTP status of the response.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// Raised on validation errors (400).
    #[error("[{code}] {message}")]
    Validation {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// Raised when a resource is not found (404).
    #[error("[{code}] {message}")]
    NotFound {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// Raised on conflicts, e.g. a duplicate tier title (409).
    #[error("[{code}] {message}")]
    Conflict {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// Raised when rate limited (429).
    #[error("[{code}] {message} (retry after {retry_after}s)")]
    RateLimited {
        code: String,
        message: String,
        retry_after: u32,
        request_id: Option<String>,
    },

    /// Raised on server errors (5xx).
    #[error("[{code}] {message}")]
    Server {
        code: String,
        message: String,
        request_id: Option<String>,
    },
}

impl ApiError {
    /// Get the error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Validation { code, .. }
            | Self::NotFound { code, .. }
            | Self::Conflict { code, .. }
            | Self::RateLimited { code, .. }
            | Self::Server { code, .. } => code,
        }
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::RateLimited { message, .. }
            | Self::Server { message, .. } => message,
        }
    }

    /// Get the request ID if the server included one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Validation { request_id, .. }
            | Self::NotFound { request_id, .. }
            | Self::Conflict { request_id, .. }
            | Self::RateLimited { request_id, .. }
            | Self::Server { request_id, .. } => request_id.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_accessors() {
        let error = ApiError::NotFound {
            code: "TIER_NOT_FOUND".to_string(),
            message: "Tier not found".to_string(),
            request_id: Some("req-123".to_string()),
        };

        assert_eq!(error.code(), "TIER_NOT_FOUND");
        assert_eq!(error.message(), "Tier not found");
        assert_eq!(error.request_id(), Some("req-123"));
    }

    #[test]
    fn test_rate_limited_display_includes_retry_after() {
        let error = ApiError::RateLimited {
            code: "RATE_LIMITED".to_string(),
            message: "Too many requests".to_string(),
            retry_after: 30,
            request_id: None,
        };

        assert!(error.to_string().contains("retry after 30s"));
    }

    #[test]
    fn test_api_error_wraps_transparently() {
        let error: Error = ApiError::Validation {
            code: "INVALID_AMOUNT".to_string(),
            message: "minAmount must be positive".to_string(),
            request_id: None,
        }
        .into();

        assert_eq!(error.to_string(), "[INVALID_AMOUNT] minAmount must be positive");
    }
}
