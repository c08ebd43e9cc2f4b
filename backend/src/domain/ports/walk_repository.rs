//! Port for walk persistence.

use async_trait::async_trait;

use crate::domain::{Walk, WalkDraft, WalkId};

use super::RepositoryError;

/// Driven port for storing and reading walks.
///
/// Reads (`list`, `find_by_id`) return walks with their region and
/// difficulty populated so callers never issue follow-up lookups. Writes
/// return the bare walk row.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalkRepository: Send + Sync {
    /// Every stored walk with related rows joined.
    async fn list(&self) -> Result<Vec<Walk>, RepositoryError>;

    /// Look up one walk with related rows joined.
    async fn find_by_id(&self, id: &WalkId) -> Result<Option<Walk>, RepositoryError>;

    /// Persist a new walk under a freshly minted identifier.
    ///
    /// Adapters report a vanished region or difficulty as
    /// [`RepositoryError::MissingReference`].
    async fn add(&self, draft: WalkDraft) -> Result<Walk, RepositoryError>;

    /// Replace every mutable field of an existing walk.
    async fn update(&self, id: &WalkId, draft: WalkDraft)
    -> Result<Option<Walk>, RepositoryError>;

    /// Remove a walk, returning its prior state.
    async fn delete(&self, id: &WalkId) -> Result<Option<Walk>, RepositoryError>;
}
