//! Walk difficulty endpoints.
//!
//! The collection keeps its singular route, `/WalkDifficulty`.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::domain::{Error, WalkDifficultyDraft, WalkDifficultyId, validate_walk_difficulty};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{WalkDifficultyDto, WalkDifficultyRequest};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{ID_FIELD, ensure_valid, parse_id};

fn walk_difficulty_not_found(id: &WalkDifficultyId) -> Error {
    Error::not_found(format!("walk difficulty {id} not found"))
}

/// List every walk difficulty.
#[utoipa::path(
    get,
    path = "/WalkDifficulty",
    responses(
        (status = 200, description = "All walk difficulties", body = [WalkDifficultyDto]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["walk-difficulties"],
    operation_id = "listWalkDifficulties"
)]
#[get("/WalkDifficulty")]
pub async fn list_walk_difficulties(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<WalkDifficultyDto>>> {
    let difficulties = state.walk_difficulties.list().await?;
    Ok(web::Json(
        difficulties
            .into_iter()
            .map(WalkDifficultyDto::from)
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/WalkDifficulty/{id}",
    params(("id" = String, Path, description = "Walk difficulty identifier")),
    responses(
        (status = 200, description = "Walk difficulty found", body = WalkDifficultyDto),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No walk difficulty with this identifier")
    ),
    tags = ["walk-difficulties"],
    operation_id = "getWalkDifficulty"
)]
#[get("/WalkDifficulty/{id}")]
pub async fn get_walk_difficulty(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<WalkDifficultyDto>> {
    let id: WalkDifficultyId = parse_id(&path.into_inner(), ID_FIELD)?;
    let difficulty = state
        .walk_difficulties
        .find_by_id(&id)
        .await?
        .ok_or_else(|| walk_difficulty_not_found(&id))?;
    Ok(web::Json(difficulty.into()))
}

#[utoipa::path(
    post,
    path = "/WalkDifficulty",
    request_body = WalkDifficultyRequest,
    responses(
        (status = 201, description = "Walk difficulty created", body = WalkDifficultyDto),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["walk-difficulties"],
    operation_id = "addWalkDifficulty"
)]
#[post("/WalkDifficulty")]
pub async fn add_walk_difficulty(
    state: web::Data<HttpState>,
    payload: web::Json<WalkDifficultyRequest>,
) -> ApiResult<HttpResponse> {
    let draft = WalkDifficultyDraft::from(payload.into_inner());
    ensure_valid(validate_walk_difficulty(&draft))?;

    let difficulty = state.walk_difficulties.add(draft).await?;
    info!(walk_difficulty_id = %difficulty.id, "walk difficulty created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/WalkDifficulty/{}", difficulty.id)))
        .json(WalkDifficultyDto::from(difficulty)))
}

#[utoipa::path(
    put,
    path = "/WalkDifficulty/{id}",
    params(("id" = String, Path, description = "Walk difficulty identifier")),
    request_body = WalkDifficultyRequest,
    responses(
        (status = 200, description = "Walk difficulty updated", body = WalkDifficultyDto),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No walk difficulty with this identifier")
    ),
    tags = ["walk-difficulties"],
    operation_id = "updateWalkDifficulty"
)]
#[put("/WalkDifficulty/{id}")]
pub async fn update_walk_difficulty(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<WalkDifficultyRequest>,
) -> ApiResult<web::Json<WalkDifficultyDto>> {
    let id: WalkDifficultyId = parse_id(&path.into_inner(), ID_FIELD)?;
    let draft = WalkDifficultyDraft::from(payload.into_inner());
    ensure_valid(validate_walk_difficulty(&draft))?;

    let difficulty = state
        .walk_difficulties
        .update(&id, draft)
        .await?
        .ok_or_else(|| walk_difficulty_not_found(&id))?;
    info!(walk_difficulty_id = %id, "walk difficulty updated");
    Ok(web::Json(difficulty.into()))
}

#[utoipa::path(
    delete,
    path = "/WalkDifficulty/{id}",
    params(("id" = String, Path, description = "Walk difficulty identifier")),
    responses(
        (status = 200, description = "Walk difficulty deleted", body = WalkDifficultyDto),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No walk difficulty with this identifier")
    ),
    tags = ["walk-difficulties"],
    operation_id = "deleteWalkDifficulty"
)]
#[delete("/WalkDifficulty/{id}")]
pub async fn delete_walk_difficulty(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<WalkDifficultyDto>> {
    let id: WalkDifficultyId = parse_id(&path.into_inner(), ID_FIELD)?;
    let difficulty = state
        .walk_difficulties
        .delete(&id)
        .await?
        .ok_or_else(|| walk_difficulty_not_found(&id))?;
    info!(walk_difficulty_id = %id, "walk difficulty deleted");
    Ok(web::Json(difficulty.into()))
}

#[cfg(test)]
#[path = "walk_difficulties_tests.rs"]
mod tests;
