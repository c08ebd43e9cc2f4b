//! Port for region persistence.

use async_trait::async_trait;

use crate::domain::{Region, RegionDraft, RegionId};

use super::RepositoryError;

/// Driven port for storing and reading regions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// Every stored region.
    async fn list(&self) -> Result<Vec<Region>, RepositoryError>;

    /// Look up one region; `Ok(None)` when no row matches.
    async fn find_by_id(&self, id: &RegionId) -> Result<Option<Region>, RepositoryError>;

    /// Persist a new region under a freshly minted identifier.
    async fn add(&self, draft: RegionDraft) -> Result<Region, RepositoryError>;

    /// Replace every mutable field of an existing region.
    async fn update(
        &self,
        id: &RegionId,
        draft: RegionDraft,
    ) -> Result<Option<Region>, RepositoryError>;

    /// Remove a region, returning its prior state.
    async fn delete(&self, id: &RegionId) -> Result<Option<Region>, RepositoryError>;
}
