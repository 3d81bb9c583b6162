//! Testing utilities for the TierBoard client.
//!
//! Provides a mock tier API and a recording notification sink for testing
//! panels without a live backend.

mod mock;

pub use mock::{MockCall, MockResponse, MockTierApi, RecordingSink};
