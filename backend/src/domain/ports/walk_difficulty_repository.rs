//! Port for walk difficulty persistence.

use async_trait::async_trait;

use crate::domain::{WalkDifficulty, WalkDifficultyDraft, WalkDifficultyId};

use super::RepositoryError;

/// Driven port for storing and reading walk difficulty grades.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalkDifficultyRepository: Send + Sync {
    /// Every stored walk difficulty.
    async fn list(&self) -> Result<Vec<WalkDifficulty>, RepositoryError>;

    /// Look up one walk difficulty; `Ok(None)` when no row matches.
    async fn find_by_id(
        &self,
        id: &WalkDifficultyId,
    ) -> Result<Option<WalkDifficulty>, RepositoryError>;

    /// Persist a new walk difficulty under a freshly minted identifier.
    async fn add(&self, draft: WalkDifficultyDraft) -> Result<WalkDifficulty, RepositoryError>;

    /// Replace the code of an existing walk difficulty.
    async fn update(
        &self,
        id: &WalkDifficultyId,
        draft: WalkDifficultyDraft,
    ) -> Result<Option<WalkDifficulty>, RepositoryError>;

    /// Remove a walk difficulty and its walks, returning its prior state.
    async fn delete(
        &self,
        id: &WalkDifficultyId,
    ) -> Result<Option<WalkDifficulty>, RepositoryError>;
}
