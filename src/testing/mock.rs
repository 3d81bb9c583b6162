//! Mock tier API for testing.
//!
//! `MockTierApi` implements `TierApi` with configurable responses and call
//! recording, so panel behavior can be verified without network access.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::api::TierApi;
use crate::error::{ApiError, Error};
use crate::notify::{Notice, NotificationSink};
use crate::types::{NewTier, Tier};

/// Record of a method call.
#[derive(Debug, Clone)]
pub struct MockCall {
    /// Method name (e.g., "tiers.list", "tiers.delete")
    pub method: String,
    /// Arguments passed to the method
    pub args: Vec<String>,
    /// Timestamp of the call
    pub timestamp: DateTime<Utc>,
}

impl MockCall {
    /// Create a new mock call record.
    pub fn new(method: &str, args: Vec<String>) -> Self {
        Self {
            method: method.to_string(),
            args,
            timestamp: Utc::now(),
        }
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub struct MockResponse<T: Clone> {
    /// The data to return
    pub data: Option<T>,
    /// Error code to return (produces an `ApiError::Validation`)
    pub error_code: Option<String>,
    /// Error message to return
    pub error_message: Option<String>,
    /// Number of times this response has been used
    pub call_count: u32,
}

impl<T: Clone> Default for MockResponse<T> {
    fn default() -> Self {
        Self {
            data: None,
            error_code: None,
            error_message: None,
            call_count: 0,
        }
    }
}

impl<T: Clone> MockResponse<T> {
    /// Create a new mock response with data.
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            error_code: None,
            error_message: None,
            call_count: 0,
        }
    }

    /// Create a new mock response with an error.
    pub fn with_error(code: &str, message: &str) -> Self {
        Self {
            data: None,
            error_code: Some(code.to_string()),
            error_message: Some(message.to_string()),
            call_count: 0,
        }
    }

    /// Get the result, returning either the configured data or error.
    fn get_result(&mut self, default: T) -> Result<T, Error> {
        self.call_count += 1;
        if let (Some(code), Some(message)) = (&self.error_code, &self.error_message) {
            return Err(Error::Api(ApiError::Validation {
                code: code.clone(),
                message: message.clone(),
                request_id: None,
            }));
        }
        Ok(self.data.clone().unwrap_or(default))
    }
}

/// Internal call log for the mock API.
struct MockState {
    calls: Vec<MockCall>,
}

impl MockState {
    fn record_call(&mut self, method: &str, args: Vec<String>) {
        self.calls.push(MockCall::new(method, args));
    }
}

/// Mock tier API for testing.
///
/// Implements the same `TierApi` surface as `TiersClient` but returns
/// configurable responses instead of making real API calls.
///
/// # Example
///
/// ```rust
/// use tierboard::testing::{MockResponse, MockTierApi};
/// use tierboard::types::Tier;
///
/// let api = MockTierApi::new();
/// api.configure_list(MockResponse::with_data(vec![Tier {
///     id: "tier-1".to_string(),
///     title: "Gold".to_string(),
///     min_amount: 25,
///     description: "All repos".to_string(),
///     repositories: vec![],
/// }]));
///
/// assert!(!api.was_called("tiers.list"));
/// ```
pub struct MockTierApi {
    state: Arc<Mutex<MockState>>,
    list_response: Arc<Mutex<MockResponse<Vec<Tier>>>>,
    create_response: Arc<Mutex<MockResponse<Tier>>>,
    delete_response: Arc<Mutex<MockResponse<()>>>,
}

impl MockTierApi {
    /// Create a new mock API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState { calls: Vec::new() })),
            list_response: Arc::new(Mutex::new(MockResponse::default())),
            create_response: Arc::new(Mutex::new(MockResponse::default())),
            delete_response: Arc::new(Mutex::new(MockResponse::default())),
        }
    }

    /// Configure the response for `list_tiers` calls.
    pub fn configure_list(&self, response: MockResponse<Vec<Tier>>) {
        *self.list_response.lock().unwrap_or_else(|e| e.into_inner()) = response;
    }

    /// Configure the response for `create_tier` calls.
    pub fn configure_create(&self, response: MockResponse<Tier>) {
        *self.create_response.lock().unwrap_or_else(|e| e.into_inner()) = response;
    }

    /// Configure the response for `delete_tier` calls.
    pub fn configure_delete(&self, response: MockResponse<()>) {
        *self.delete_response.lock().unwrap_or_else(|e| e.into_inner()) = response;
    }

    /// Check if a method was called at least once.
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .any(|call| call.method == method)
    }

    /// Get the number of times a method was called.
    #[must_use]
    pub fn call_count(&self, method: &str) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// Get recorded calls, optionally filtered by method.
    #[must_use]
    pub fn get_calls(&self, method: Option<&str>) -> Vec<MockCall> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match method {
            Some(m) => state
                .calls
                .iter()
                .filter(|call| call.method == m)
                .cloned()
                .collect(),
            None => state.calls.clone(),
        }
    }

    /// Reset all recorded calls.
    pub fn reset(&self) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clear();
    }
}

impl Default for MockTierApi {
    fn default() -> Self {
        Self::new()
    }
}

impl TierApi for MockTierApi {
    async fn list_tiers(&self) -> Result<Vec<Tier>, Error> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record_call("tiers.list", vec![]);

        self.list_response
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_result(vec![])
    }

    async fn create_tier(&self, payload: &NewTier) -> Result<Tier, Error> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record_call("tiers.create", vec![
                payload.title.clone(),
                payload.min_amount.to_string(),
            ]);

        let default = Tier {
            id: "mock-tier-id".to_string(),
            title: payload.title.clone(),
            min_amount: payload.min_amount,
            description: payload.description.clone(),
            repositories: vec![],
        };

        self.create_response
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_result(default)
    }

    async fn delete_tier(&self, id: &str) -> Result<(), Error> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record_call("tiers.delete", vec![id.to_string()]);

        self.delete_response
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_result(())
    }
}

/// Notification sink that records every notice it receives.
///
/// Clones share the same log, so a test can keep a handle after moving the
/// sink into a runtime.
#[derive(Clone, Default)]
pub struct RecordingSink {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices received so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of notices received so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.notices.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notice);
    }
}
