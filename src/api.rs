//! API seam between the panel runtime and the tier service.
//!
//! The runtime is generic over this trait so it can be driven by the real
//! HTTP client or by `testing::MockTierApi` without a live backend.

use crate::error::Error;
use crate::types::{NewTier, Tier};

/// Operations the tier panel needs from the backing API.
#[allow(async_fn_in_trait)]
pub trait TierApi {
    /// Fetch the full tier collection in server order.
    async fn list_tiers(&self) -> Result<Vec<Tier>, Error>;

    /// Create a tier from the given payload.
    async fn create_tier(&self, payload: &NewTier) -> Result<Tier, Error>;

    /// Delete the tier with the given id.
    async fn delete_tier(&self, id: &str) -> Result<(), Error>;
}
