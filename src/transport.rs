//! HTTP transport for the TierBoard client.
//!
//! Wraps a reqwest client with base-URL handling and parsing of API error
//! responses into the typed taxonomy. Each call issues exactly one request;
//! failed user actions are surfaced to the user rather than retried.

use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Error};

/// HTTP transport layer.
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests (e.g., "<https://api.tierboard.dev>")
    /// * `timeout` - Request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Make a request and parse the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` for non-success statuses, or `Error::Http` for
    /// transport and decoding failures.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, Error> {
        let response = self.execute(method, path, body).await?;

        response
            .json()
            .await
            .map_err(|e| Error::Http(format!("Failed to parse response: {e}")))
    }

    /// Make a request and discard the response body.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` for non-success statuses, or `Error::Http` for
    /// transport failures.
    pub async fn request_empty(&self, method: Method, path: &str) -> Result<(), Error> {
        self.execute(method, path, None::<&()>).await?;
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<Response, Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, path, "sending request");

        let mut request = self.client.request(method, &url);

        if let Some(b) = body {
            request = request.header("Content-Type", "application/json").json(b);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        Err(self.parse_error_response(response).await)
    }

    /// Parse an error response into a typed error.
    ///
    /// The API wraps errors as `{"error": {"code", "message"}, "meta": {"requestId"}}`;
    /// missing fields fall back to the HTTP status.
    async fn parse_error_response(&self, response: Response) -> Error {
        let status = response.status();
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok());

        let data: Value = response.json().await.unwrap_or_else(|_| serde_json::json!({}));

        let empty_obj = serde_json::json!({});
        let error = data.get("error").unwrap_or(&empty_obj);
        let code = error
            .get("code")
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN_ERROR")
            .to_string();
        let message = error
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or(&format!("HTTP {}", status.as_u16()))
            .to_string();
        let request_id = data
            .get("meta")
            .and_then(|m| m.get("requestId"))
            .and_then(|v| v.as_str())
            .map(String::from);

        let api_error = match status {
            StatusCode::NOT_FOUND => ApiError::NotFound {
                code,
                message,
                request_id,
            },
            StatusCode::CONFLICT => ApiError::Conflict {
                code,
                message,
                request_id,
            },
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited {
                code,
                message,
                retry_after: retry_after.unwrap_or(60),
                request_id,
            },
            s if s.is_server_error() => ApiError::Server {
                code,
                message,
                request_id,
            },
            _ => ApiError::Validation {
                code,
                message,
                request_id,
            },
        };

        Error::Api(api_error)
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let transport = HttpTransport::new("https://api.tierboard.dev/", Duration::from_secs(30))
            .expect("transport creation should succeed");

        assert_eq!(transport.base_url(), "https://api.tierboard.dev");
    }

    #[test]
    fn test_base_url_preserved_without_slash() {
        let transport = HttpTransport::new("http://localhost:8080", Duration::from_secs(30))
            .expect("transport creation should succeed");

        assert_eq!(transport.base_url(), "http://localhost:8080");
    }
}
