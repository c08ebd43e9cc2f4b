//! Walk endpoints.
//!
//! Reads return each walk with its region and difficulty embedded. Writes
//! validate both references before touching the store; a reference removed
//! between validation and write is still rejected by the store as a 400.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::domain::{Error, WalkDraft, WalkId, validate_walk};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{WalkDto, WalkRequest};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{ID_FIELD, ensure_valid, parse_id};

fn walk_not_found(id: &WalkId) -> Error {
    Error::not_found(format!("walk {id} not found"))
}

async fn validated_draft(state: &HttpState, payload: WalkRequest) -> ApiResult<WalkDraft> {
    let draft = WalkDraft::from(payload);
    let errors = validate_walk(
        &draft,
        state.regions.as_ref(),
        state.walk_difficulties.as_ref(),
    )
    .await?;
    ensure_valid(errors)?;
    Ok(draft)
}

/// List every walk with its region and difficulty.
#[utoipa::path(
    get,
    path = "/Walks",
    responses(
        (status = 200, description = "All walks", body = [WalkDto]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["walks"],
    operation_id = "listWalks"
)]
#[get("/Walks")]
pub async fn list_walks(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<WalkDto>>> {
    let walks = state.walks.list().await?;
    Ok(web::Json(walks.into_iter().map(WalkDto::from).collect()))
}

/// Fetch one walk with its region and difficulty.
#[utoipa::path(
    get,
    path = "/Walks/{id}",
    params(("id" = String, Path, description = "Walk identifier")),
    responses(
        (status = 200, description = "Walk found", body = WalkDto),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No walk with this identifier")
    ),
    tags = ["walks"],
    operation_id = "getWalk"
)]
#[get("/Walks/{id}")]
pub async fn get_walk(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<WalkDto>> {
    let id: WalkId = parse_id(&path.into_inner(), ID_FIELD)?;
    let walk = state
        .walks
        .find_by_id(&id)
        .await?
        .ok_or_else(|| walk_not_found(&id))?;
    Ok(web::Json(walk.into()))
}

/// Create a walk.
#[utoipa::path(
    post,
    path = "/Walks",
    request_body = WalkRequest,
    responses(
        (status = 201, description = "Walk created", body = WalkDto),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["walks"],
    operation_id = "addWalk"
)]
#[post("/Walks")]
pub async fn add_walk(
    state: web::Data<HttpState>,
    payload: web::Json<WalkRequest>,
) -> ApiResult<HttpResponse> {
    let draft = validated_draft(&state, payload.into_inner()).await?;

    let walk = state.walks.add(draft).await?;
    info!(walk_id = %walk.id, "walk created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/Walks/{}", walk.id)))
        .json(WalkDto::from(walk)))
}

/// Replace every field of a walk.
#[utoipa::path(
    put,
    path = "/Walks/{id}",
    params(("id" = String, Path, description = "Walk identifier")),
    request_body = WalkRequest,
    responses(
        (status = 200, description = "Walk updated", body = WalkDto),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No walk with this identifier")
    ),
    tags = ["walks"],
    operation_id = "updateWalk"
)]
#[put("/Walks/{id}")]
pub async fn update_walk(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<WalkRequest>,
) -> ApiResult<web::Json<WalkDto>> {
    let id: WalkId = parse_id(&path.into_inner(), ID_FIELD)?;
    let draft = validated_draft(&state, payload.into_inner()).await?;

    let walk = state
        .walks
        .update(&id, draft)
        .await?
        .ok_or_else(|| walk_not_found(&id))?;
    info!(walk_id = %id, "walk updated");
    Ok(web::Json(walk.into()))
}

/// Delete a walk, returning its last state.
#[utoipa::path(
    delete,
    path = "/Walks/{id}",
    params(("id" = String, Path, description = "Walk identifier")),
    responses(
        (status = 200, description = "Walk deleted", body = WalkDto),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No walk with this identifier")
    ),
    tags = ["walks"],
    operation_id = "deleteWalk"
)]
#[delete("/Walks/{id}")]
pub async fn delete_walk(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<WalkDto>> {
    let id: WalkId = parse_id(&path.into_inner(), ID_FIELD)?;
    let walk = state
        .walks
        .delete(&id)
        .await?
        .ok_or_else(|| walk_not_found(&id))?;
    info!(walk_id = %id, "walk deleted");
    Ok(web::Json(walk.into()))
}

#[cfg(test)]
#[path = "walks_tests.rs"]
mod tests;
