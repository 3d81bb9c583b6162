//! TierBoard main client.
//!
//! Provides the primary interface for interacting with the TierBoard API.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::TiersClient;
use crate::error::Error;
use crate::transport::HttpTransport;

/// Default base URL for the TierBoard API.
pub const DEFAULT_BASE_URL: &str = "https://api.tierboard.dev";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main client for interacting with the TierBoard API.
///
/// # Example
///
/// ```rust,ignore
/// use tierboard::TierBoardClient;
///
/// // Create client with explicit configuration
/// let client = TierBoardClient::new(Some("http://localhost:8080"), None)?;
///
/// // Or create from environment variables
/// let client = TierBoardClient::from_env()?;
///
/// let tiers = client.tiers().list().await?;
/// ```
pub struct TierBoardClient {
    transport: Arc<HttpTransport>,
    tiers: TiersClient,
}

impl TierBoardClient {
    /// Create a new TierBoard client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests (default: <https://api.tierboard.dev>)
    /// * `timeout` - Request timeout (default: 30 seconds)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(base_url: Option<&str>, timeout: Option<Duration>) -> Result<Self, Error> {
        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let transport = Arc::new(HttpTransport::new(base_url, timeout)?);

        Ok(Self {
            tiers: TiersClient::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `TIERBOARD_BASE_URL` - Base URL for the API (optional, default: <https://api.tierboard.dev>)
    /// * `TIERBOARD_TIMEOUT_SECS` - Request timeout in seconds (optional, default: 30)
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an invalid value.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = env::var("TIERBOARD_BASE_URL").ok();

        let timeout = match env::var("TIERBOARD_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    Error::Configuration(format!(
                        "Invalid TIERBOARD_TIMEOUT_SECS: {raw}. Must be a number of seconds"
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Self::new(base_url.as_deref(), timeout)
    }

    /// Get the tiers client.
    #[must_use]
    pub fn tiers(&self) -> &TiersClient {
        &self.tiers
    }

    /// Get the underlying HTTP transport (for advanced use cases).
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_with_defaults() {
        let client = TierBoardClient::new(None, None).expect("Client creation should succeed");

        assert_eq!(client.transport().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_custom_base_url() {
        let client = TierBoardClient::new(Some("http://localhost:8080"), None)
            .expect("Client creation should succeed");

        assert_eq!(client.transport().base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_timeout() {
        let _client = TierBoardClient::new(None, Some(Duration::from_secs(60)))
            .expect("Client creation should succeed");
    }
}
