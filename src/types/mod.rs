//! Data model types for the TierBoard client.

pub mod tiers;

// Re-exports
pub use tiers::{NewRepository, NewTier, Repository, Tier};
