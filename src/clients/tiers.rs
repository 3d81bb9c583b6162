//! Tiers resource client.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;

use crate::api::TierApi;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{NewTier, Tier};

/// Response envelope for the tier collection.
#[derive(Deserialize)]
struct TiersEnvelope {
    tiers: Vec<Tier>,
}

/// Client for tier-related operations.
pub struct TiersClient {
    transport: Arc<HttpTransport>,
}

impl TiersClient {
    /// Create a new tiers client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch the full tier collection in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<Tier>, Error> {
        let envelope: TiersEnvelope = self
            .transport
            .request_json(Method::GET, "/v1/tiers", None::<&()>)
            .await?;

        Ok(envelope.tiers)
    }

    /// Create a new tier.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid payload or server failure.
    pub async fn create(&self, payload: &NewTier) -> Result<Tier, Error> {
        self.transport
            .request_json(Method::POST, "/v1/tiers", Some(payload))
            .await
    }

    /// Delete a tier by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown or the server fails.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.transport
            .request_empty(Method::DELETE, &format!("/v1/tiers/{id}"))
            .await
    }
}

impl TierApi for TiersClient {
    async fn list_tiers(&self) -> Result<Vec<Tier>, Error> {
        self.list().await
    }

    async fn create_tier(&self, payload: &NewTier) -> Result<Tier, Error> {
        self.create(payload).await
    }

    async fn delete_tier(&self, id: &str) -> Result<(), Error> {
        self.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_envelope_deserialize() {
        let json = r#"{
            "tiers": [
                {
                    "id": "tier-1",
                    "title": "Bronze",
                    "minAmount": 5,
                    "description": "Support the project",
                    "repositories": []
                }
            ]
        }"#;

        let envelope: TiersEnvelope = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(envelope.tiers.len(), 1);
        assert_eq!(envelope.tiers[0].title, "Bronze");
    }
}
