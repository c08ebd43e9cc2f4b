//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer. Conversions to and from
//! domain types live here so the repositories stay thin.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Region, RegionDraft, RegionId, Walk, WalkDifficulty, WalkDifficultyDraft, WalkDifficultyId,
    WalkDraft, WalkId,
};

use super::schema::{regions, walk_difficulties, walks};

/// Row struct for the regions table; also used for inserts.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = regions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RegionRow {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Changeset replacing every mutable region column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = regions)]
pub(crate) struct RegionChangeset<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl RegionRow {
    pub fn from_draft(id: RegionId, draft: RegionDraft) -> Self {
        let region = Region::from_draft(id, draft);
        Self {
            id: *region.id.as_uuid(),
            code: region.code,
            name: region.name,
            area: region.area,
            lat: region.lat,
            long: region.long,
            population: region.population,
        }
    }
}

impl<'a> From<&'a RegionDraft> for RegionChangeset<'a> {
    fn from(draft: &'a RegionDraft) -> Self {
        Self {
            code: &draft.code,
            name: &draft.name,
            area: draft.area,
            lat: draft.lat,
            long: draft.long,
            population: draft.population,
        }
    }
}

impl From<RegionRow> for Region {
    fn from(row: RegionRow) -> Self {
        Self {
            id: RegionId::from_uuid(row.id),
            code: row.code,
            name: row.name,
            area: row.area,
            lat: row.lat,
            long: row.long,
            population: row.population,
        }
    }
}

/// Row struct for the walk_difficulties table; also used for inserts.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = walk_difficulties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WalkDifficultyRow {
    pub id: Uuid,
    pub code: String,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = walk_difficulties)]
pub(crate) struct WalkDifficultyChangeset<'a> {
    pub code: &'a str,
}

impl WalkDifficultyRow {
    pub fn from_draft(id: WalkDifficultyId, draft: WalkDifficultyDraft) -> Self {
        Self {
            id: *id.as_uuid(),
            code: draft.code,
        }
    }
}

impl<'a> From<&'a WalkDifficultyDraft> for WalkDifficultyChangeset<'a> {
    fn from(draft: &'a WalkDifficultyDraft) -> Self {
        Self { code: &draft.code }
    }
}

impl From<WalkDifficultyRow> for WalkDifficulty {
    fn from(row: WalkDifficultyRow) -> Self {
        Self {
            id: WalkDifficultyId::from_uuid(row.id),
            code: row.code,
        }
    }
}

/// Row struct for the walks table; also used for inserts.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = walks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WalkRow {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = walks)]
pub(crate) struct WalkChangeset<'a> {
    pub name: &'a str,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

impl WalkRow {
    pub fn from_draft(id: WalkId, draft: WalkDraft) -> Self {
        Self {
            id: *id.as_uuid(),
            name: draft.name,
            length: draft.length,
            region_id: *draft.region_id.as_uuid(),
            walk_difficulty_id: *draft.walk_difficulty_id.as_uuid(),
        }
    }
}

impl<'a> From<&'a WalkDraft> for WalkChangeset<'a> {
    fn from(draft: &'a WalkDraft) -> Self {
        Self {
            name: &draft.name,
            length: draft.length,
            region_id: *draft.region_id.as_uuid(),
            walk_difficulty_id: *draft.walk_difficulty_id.as_uuid(),
        }
    }
}

impl From<WalkRow> for Walk {
    fn from(row: WalkRow) -> Self {
        Self {
            id: WalkId::from_uuid(row.id),
            name: row.name,
            length: row.length,
            region_id: RegionId::from_uuid(row.region_id),
            walk_difficulty_id: WalkDifficultyId::from_uuid(row.walk_difficulty_id),
            region: None,
            walk_difficulty: None,
        }
    }
}

/// Result shape of the walk eager-load join.
pub(crate) type JoinedWalkRow = (WalkRow, RegionRow, WalkDifficultyRow);

/// Build a walk with its joined relations populated.
pub(crate) fn joined_walk((walk, region, difficulty): JoinedWalkRow) -> Walk {
    Walk::from(walk).with_relations(region.into(), difficulty.into())
}
