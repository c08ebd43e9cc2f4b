//! PostgreSQL-backed `RegionRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RegionRepository, RepositoryError};
use crate::domain::{Region, RegionDraft, RegionId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{RegionChangeset, RegionRow};
use super::pool::DbPool;
use super::schema::regions;

/// Diesel-backed implementation of the [`RegionRepository`] port.
#[derive(Clone)]
pub struct DieselRegionRepository {
    pool: DbPool,
}

impl DieselRegionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for DieselRegionRepository {
    async fn list(&self) -> Result<Vec<Region>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RegionRow> = regions::table
            .order(regions::name.asc())
            .select(RegionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Region::from).collect())
    }

    async fn find_by_id(&self, id: &RegionId) -> Result<Option<Region>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RegionRow> = regions::table
            .find(*id.as_uuid())
            .select(RegionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Region::from))
    }

    async fn add(&self, draft: RegionDraft) -> Result<Region, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = RegionRow::from_draft(RegionId::random(), draft);
        let row: RegionRow = diesel::insert_into(regions::table)
            .values(&new_row)
            .returning(RegionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: &RegionId,
        draft: RegionDraft,
    ) -> Result<Option<Region>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RegionRow> = diesel::update(regions::table.find(*id.as_uuid()))
            .set(RegionChangeset::from(&draft))
            .returning(RegionRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Region::from))
    }

    async fn delete(&self, id: &RegionId) -> Result<Option<Region>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RegionRow> = diesel::delete(regions::table.find(*id.as_uuid()))
            .returning(RegionRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Region::from))
    }
}
