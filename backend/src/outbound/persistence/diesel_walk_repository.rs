//! PostgreSQL-backed `WalkRepository` implementation using Diesel ORM.
//!
//! Reads join `regions` and `walk_difficulties` in one statement. Writes
//! rely on the `walks` foreign keys to reject references that disappeared
//! after validation; those surface as
//! [`RepositoryError::MissingReference`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, WalkRepository};
use crate::domain::{Walk, WalkDraft, WalkId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{
    JoinedWalkRow, RegionRow, WalkChangeset, WalkDifficultyRow, WalkRow, joined_walk,
};
use super::pool::DbPool;
use super::schema::{regions, walk_difficulties, walks};

/// Diesel-backed implementation of the [`WalkRepository`] port.
#[derive(Clone)]
pub struct DieselWalkRepository {
    pool: DbPool,
}

impl DieselWalkRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalkRepository for DieselWalkRepository {
    async fn list(&self) -> Result<Vec<Walk>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<JoinedWalkRow> = walks::table
            .inner_join(regions::table)
            .inner_join(walk_difficulties::table)
            .order(walks::name.asc())
            .select((
                WalkRow::as_select(),
                RegionRow::as_select(),
                WalkDifficultyRow::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(joined_walk).collect())
    }

    async fn find_by_id(&self, id: &WalkId) -> Result<Option<Walk>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<JoinedWalkRow> = walks::table
            .inner_join(regions::table)
            .inner_join(walk_difficulties::table)
            .filter(walks::id.eq(id.as_uuid()))
            .select((
                WalkRow::as_select(),
                RegionRow::as_select(),
                WalkDifficultyRow::as_select(),
            ))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(joined_walk))
    }

    async fn add(&self, draft: WalkDraft) -> Result<Walk, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = WalkRow::from_draft(WalkId::random(), draft);
        let row: WalkRow = diesel::insert_into(walks::table)
            .values(&new_row)
            .returning(WalkRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: &WalkId,
        draft: WalkDraft,
    ) -> Result<Option<Walk>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<WalkRow> = diesel::update(walks::table.find(*id.as_uuid()))
            .set(WalkChangeset::from(&draft))
            .returning(WalkRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Walk::from))
    }

    async fn delete(&self, id: &WalkId) -> Result<Option<Walk>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<WalkRow> = diesel::delete(walks::table.find(*id.as_uuid()))
            .returning(WalkRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Walk::from))
    }
}
