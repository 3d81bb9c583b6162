//! Tier and repository data models.

use serde::{Deserialize, Serialize};

/// A sponsorship tier as returned by the API.
///
/// Tiers are server-owned snapshots; the panel never mutates them locally.
/// Every change round-trips through the API and a subsequent re-fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    /// Unique tier identifier
    pub id: String,
    /// Tier title
    pub title: String,
    /// Monthly amount in whole currency units
    pub min_amount: i64,
    /// Tier description
    pub description: String,
    /// Repositories unlocked by this tier, in server order
    #[serde(default)]
    pub repositories: Vec<Repository>,
}

/// A repository associated with a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Unique repository identifier
    pub id: String,
    /// Owning user or organization
    pub owner_or_org: String,
    /// Repository name
    pub name: String,
    /// Repository description
    pub description: String,
}

impl Repository {
    /// Display title in `owner/name` form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner_or_org, self.name)
    }
}

/// Payload for creating a new tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTier {
    /// Tier title
    pub title: String,
    /// Monthly amount in whole currency units
    pub min_amount: i64,
    /// Tier description
    pub description: String,
    /// Repositories to associate with the tier (may be empty)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<NewRepository>,
}

/// Repository reference inside a create-tier payload. The server assigns ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRepository {
    /// Owning user or organization
    pub owner_or_org: String,
    /// Repository name
    pub name: String,
    /// Repository description
    pub description: String,
}
