//! Resource clients for the TierBoard client.

pub mod tiers;

// Re-exports
pub use tiers::TiersClient;
