//! Process-local catalogue store.
//!
//! [`InMemoryCatalogue`] implements every catalogue repository port over a
//! single table set guarded by one [`RwLock`]. It backs the service when no
//! database URL is configured and gives tests a real adapter without
//! PostgreSQL. The lock is never held across an `.await`.
//!
//! Foreign keys behave as in the PostgreSQL schema: walk writes re-check
//! their references under the write lock, and deleting a region or
//! difficulty removes the walks that point at it.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    RegionRepository, RepositoryError, WalkDifficultyRepository, WalkRepository,
};
use crate::domain::{
    Region, RegionDraft, RegionId, Walk, WalkDifficulty, WalkDifficultyDraft, WalkDifficultyId,
    WalkDraft, WalkId,
};

#[derive(Debug, Default)]
struct Tables {
    regions: Vec<Region>,
    walk_difficulties: Vec<WalkDifficulty>,
    walks: Vec<Walk>,
}

impl Tables {
    fn region(&self, id: &RegionId) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == *id)
    }

    fn walk_difficulty(&self, id: &WalkDifficultyId) -> Option<&WalkDifficulty> {
        self.walk_difficulties
            .iter()
            .find(|difficulty| difficulty.id == *id)
    }

    fn check_references(&self, draft: &WalkDraft) -> Result<(), RepositoryError> {
        if self.region(&draft.region_id).is_none() {
            return Err(RepositoryError::missing_reference("RegionId"));
        }
        if self.walk_difficulty(&draft.walk_difficulty_id).is_none() {
            return Err(RepositoryError::missing_reference("WalkDifficultyId"));
        }
        Ok(())
    }

    /// Inner-join a stored walk with its region and difficulty.
    fn joined(&self, walk: &Walk) -> Option<Walk> {
        let region = self.region(&walk.region_id)?.clone();
        let difficulty = self.walk_difficulty(&walk.walk_difficulty_id)?.clone();
        Some(walk.clone().with_relations(region, difficulty))
    }
}

/// In-memory implementation of the catalogue repository ports.
///
/// Clones share the same tables.
///
/// # Examples
/// ```
/// use nzwalks_backend::domain::ports::RegionRepository;
/// use nzwalks_backend::outbound::in_memory::InMemoryCatalogue;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let catalogue = InMemoryCatalogue::new();
/// assert!(RegionRepository::list(&catalogue).await.unwrap().is_empty());
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogue {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables
            .read()
            .map_err(|_| RepositoryError::query("in-memory catalogue lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.tables
            .write()
            .map_err(|_| RepositoryError::query("in-memory catalogue lock poisoned"))
    }
}

#[async_trait]
impl RegionRepository for InMemoryCatalogue {
    async fn list(&self) -> Result<Vec<Region>, RepositoryError> {
        Ok(self.read()?.regions.clone())
    }

    async fn find_by_id(&self, id: &RegionId) -> Result<Option<Region>, RepositoryError> {
        Ok(self.read()?.region(id).cloned())
    }

    async fn add(&self, draft: RegionDraft) -> Result<Region, RepositoryError> {
        let region = Region::from_draft(RegionId::random(), draft);
        self.write()?.regions.push(region.clone());
        Ok(region)
    }

    async fn update(
        &self,
        id: &RegionId,
        draft: RegionDraft,
    ) -> Result<Option<Region>, RepositoryError> {
        let mut tables = self.write()?;
        Ok(tables
            .regions
            .iter_mut()
            .find(|region| region.id == *id)
            .map(|region| {
                region.apply(draft);
                region.clone()
            }))
    }

    async fn delete(&self, id: &RegionId) -> Result<Option<Region>, RepositoryError> {
        let mut tables = self.write()?;
        let Some(index) = tables.regions.iter().position(|region| region.id == *id) else {
            return Ok(None);
        };
        let removed = tables.regions.remove(index);
        tables.walks.retain(|walk| walk.region_id != *id);
        Ok(Some(removed))
    }
}

#[async_trait]
impl WalkDifficultyRepository for InMemoryCatalogue {
    async fn list(&self) -> Result<Vec<WalkDifficulty>, RepositoryError> {
        Ok(self.read()?.walk_difficulties.clone())
    }

    async fn find_by_id(
        &self,
        id: &WalkDifficultyId,
    ) -> Result<Option<WalkDifficulty>, RepositoryError> {
        Ok(self.read()?.walk_difficulty(id).cloned())
    }

    async fn add(&self, draft: WalkDifficultyDraft) -> Result<WalkDifficulty, RepositoryError> {
        let difficulty = WalkDifficulty::from_draft(WalkDifficultyId::random(), draft);
        self.write()?.walk_difficulties.push(difficulty.clone());
        Ok(difficulty)
    }

    async fn update(
        &self,
        id: &WalkDifficultyId,
        draft: WalkDifficultyDraft,
    ) -> Result<Option<WalkDifficulty>, RepositoryError> {
        let mut tables = self.write()?;
        Ok(tables
            .walk_difficulties
            .iter_mut()
            .find(|difficulty| difficulty.id == *id)
            .map(|difficulty| {
                difficulty.apply(draft);
                difficulty.clone()
            }))
    }

    async fn delete(
        &self,
        id: &WalkDifficultyId,
    ) -> Result<Option<WalkDifficulty>, RepositoryError> {
        let mut tables = self.write()?;
        let Some(index) = tables
            .walk_difficulties
            .iter()
            .position(|difficulty| difficulty.id == *id)
        else {
            return Ok(None);
        };
        let removed = tables.walk_difficulties.remove(index);
        tables.walks.retain(|walk| walk.walk_difficulty_id != *id);
        Ok(Some(removed))
    }
}

#[async_trait]
impl WalkRepository for InMemoryCatalogue {
    async fn list(&self) -> Result<Vec<Walk>, RepositoryError> {
        let tables = self.read()?;
        Ok(tables
            .walks
            .iter()
            .filter_map(|walk| tables.joined(walk))
            .collect())
    }

    async fn find_by_id(&self, id: &WalkId) -> Result<Option<Walk>, RepositoryError> {
        let tables = self.read()?;
        Ok(tables
            .walks
            .iter()
            .find(|walk| walk.id == *id)
            .and_then(|walk| tables.joined(walk)))
    }

    async fn add(&self, draft: WalkDraft) -> Result<Walk, RepositoryError> {
        let mut tables = self.write()?;
        tables.check_references(&draft)?;
        let walk = Walk::from_draft(WalkId::random(), draft);
        tables.walks.push(walk.clone());
        Ok(walk)
    }

    async fn update(
        &self,
        id: &WalkId,
        draft: WalkDraft,
    ) -> Result<Option<Walk>, RepositoryError> {
        let mut tables = self.write()?;
        if !tables.walks.iter().any(|walk| walk.id == *id) {
            return Ok(None);
        }
        tables.check_references(&draft)?;
        Ok(tables
            .walks
            .iter_mut()
            .find(|walk| walk.id == *id)
            .map(|walk| {
                walk.apply(draft);
                walk.clone()
            }))
    }

    async fn delete(&self, id: &WalkId) -> Result<Option<Walk>, RepositoryError> {
        let mut tables = self.write()?;
        let Some(index) = tables.walks.iter().position(|walk| walk.id == *id) else {
            return Ok(None);
        };
        Ok(Some(tables.walks.remove(index)))
    }
}

#[cfg(test)]
mod tests;
