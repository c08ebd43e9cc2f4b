//! PostgreSQL-backed `WalkDifficultyRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, WalkDifficultyRepository};
use crate::domain::{WalkDifficulty, WalkDifficultyDraft, WalkDifficultyId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{WalkDifficultyChangeset, WalkDifficultyRow};
use super::pool::DbPool;
use super::schema::walk_difficulties;

/// Diesel-backed implementation of the [`WalkDifficultyRepository`] port.
#[derive(Clone)]
pub struct DieselWalkDifficultyRepository {
    pool: DbPool,
}

impl DieselWalkDifficultyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalkDifficultyRepository for DieselWalkDifficultyRepository {
    async fn list(&self) -> Result<Vec<WalkDifficulty>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<WalkDifficultyRow> = walk_difficulties::table
            .order(walk_difficulties::code.asc())
            .select(WalkDifficultyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(WalkDifficulty::from).collect())
    }

    async fn find_by_id(
        &self,
        id: &WalkDifficultyId,
    ) -> Result<Option<WalkDifficulty>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<WalkDifficultyRow> = walk_difficulties::table
            .find(*id.as_uuid())
            .select(WalkDifficultyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(WalkDifficulty::from))
    }

    async fn add(&self, draft: WalkDifficultyDraft) -> Result<WalkDifficulty, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = WalkDifficultyRow::from_draft(WalkDifficultyId::random(), draft);
        let row: WalkDifficultyRow = diesel::insert_into(walk_difficulties::table)
            .values(&new_row)
            .returning(WalkDifficultyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: &WalkDifficultyId,
        draft: WalkDifficultyDraft,
    ) -> Result<Option<WalkDifficulty>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<WalkDifficultyRow> =
            diesel::update(walk_difficulties::table.find(*id.as_uuid()))
                .set(WalkDifficultyChangeset::from(&draft))
                .returning(WalkDifficultyRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?;

        Ok(row.map(WalkDifficulty::from))
    }

    async fn delete(
        &self,
        id: &WalkDifficultyId,
    ) -> Result<Option<WalkDifficulty>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<WalkDifficultyRow> =
            diesel::delete(walk_difficulties::table.find(*id.as_uuid()))
                .returning(WalkDifficultyRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?;

        Ok(row.map(WalkDifficulty::from))
    }
}
