//! Transfer objects for the catalogue endpoints and their domain mappings.
//!
//! Bodies use PascalCase keys. Requests never carry an `Id`; identifiers
//! are minted server-side and taken from the path on update.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    Region, RegionDraft, RegionId, Walk, WalkDifficulty, WalkDifficultyDraft, WalkDifficultyId,
    WalkDraft,
};

/// Body of `POST /Regions` and `PUT /Regions/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RegionRequest {
    #[schema(example = "WGN")]
    pub code: String,
    #[schema(example = "Wellington")]
    pub name: String,
    #[schema(example = 100.0)]
    pub area: f64,
    #[schema(example = json!(-41.3))]
    pub lat: f64,
    #[schema(example = 174.8)]
    pub long: f64,
    #[schema(example = 200000)]
    pub population: i64,
}

impl From<RegionRequest> for RegionDraft {
    fn from(value: RegionRequest) -> Self {
        Self {
            code: value.code,
            name: value.name,
            area: value.area,
            lat: value.lat,
            long: value.long,
            population: value.population,
        }
    }
}

/// Region as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RegionDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl From<Region> for RegionDto {
    fn from(value: Region) -> Self {
        Self {
            id: *value.id.as_uuid(),
            code: value.code,
            name: value.name,
            area: value.area,
            lat: value.lat,
            long: value.long,
            population: value.population,
        }
    }
}

/// Body of `POST /WalkDifficulty` and `PUT /WalkDifficulty/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct WalkDifficultyRequest {
    #[schema(example = "Easy")]
    pub code: String,
}

impl From<WalkDifficultyRequest> for WalkDifficultyDraft {
    fn from(value: WalkDifficultyRequest) -> Self {
        Self { code: value.code }
    }
}

/// Walk difficulty as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct WalkDifficultyDto {
    pub id: Uuid,
    pub code: String,
}

impl From<WalkDifficulty> for WalkDifficultyDto {
    fn from(value: WalkDifficulty) -> Self {
        Self {
            id: *value.id.as_uuid(),
            code: value.code,
        }
    }
}

/// Body of `POST /Walks` and `PUT /Walks/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct WalkRequest {
    #[schema(example = "Red Rocks Coastal Walk")]
    pub name: String,
    #[schema(example = 8.0)]
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

impl From<WalkRequest> for WalkDraft {
    fn from(value: WalkRequest) -> Self {
        Self {
            name: value.name,
            length: value.length,
            region_id: RegionId::from_uuid(value.region_id),
            walk_difficulty_id: WalkDifficultyId::from_uuid(value.walk_difficulty_id),
        }
    }
}

/// Walk as returned to clients.
///
/// `Region` and `WalkDifficulty` are present on reads and omitted on write
/// responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct WalkDto {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk_difficulty: Option<WalkDifficultyDto>,
}

impl From<Walk> for WalkDto {
    fn from(value: Walk) -> Self {
        Self {
            id: *value.id.as_uuid(),
            name: value.name,
            length: value.length,
            region_id: *value.region_id.as_uuid(),
            walk_difficulty_id: *value.walk_difficulty_id.as_uuid(),
            region: value.region.map(RegionDto::from),
            walk_difficulty: value.walk_difficulty.map(WalkDifficultyDto::from),
        }
    }
}
