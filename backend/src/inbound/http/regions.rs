//! Region endpoints.
//!
//! ```text
//! GET /Regions
//! GET /Regions/{id}
//! POST /Regions
//! PUT /Regions/{id}
//! DELETE /Regions/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::domain::{Error, RegionDraft, RegionId, validate_region};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{RegionDto, RegionRequest};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{ID_FIELD, ensure_valid, parse_id};

fn region_not_found(id: &RegionId) -> Error {
    Error::not_found(format!("region {id} not found"))
}

/// List every region.
#[utoipa::path(
    get,
    path = "/Regions",
    responses(
        (status = 200, description = "All regions", body = [RegionDto]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["regions"],
    operation_id = "listRegions"
)]
#[get("/Regions")]
pub async fn list_regions(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<RegionDto>>> {
    let regions = state.regions.list().await?;
    Ok(web::Json(regions.into_iter().map(RegionDto::from).collect()))
}

/// Fetch one region.
#[utoipa::path(
    get,
    path = "/Regions/{id}",
    params(("id" = String, Path, description = "Region identifier")),
    responses(
        (status = 200, description = "Region found", body = RegionDto),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No region with this identifier")
    ),
    tags = ["regions"],
    operation_id = "getRegion"
)]
#[get("/Regions/{id}")]
pub async fn get_region(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<RegionDto>> {
    let id: RegionId = parse_id(&path.into_inner(), ID_FIELD)?;
    let region = state
        .regions
        .find_by_id(&id)
        .await?
        .ok_or_else(|| region_not_found(&id))?;
    Ok(web::Json(region.into()))
}

/// Create a region.
#[utoipa::path(
    post,
    path = "/Regions",
    request_body = RegionRequest,
    responses(
        (status = 201, description = "Region created", body = RegionDto),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["regions"],
    operation_id = "addRegion"
)]
#[post("/Regions")]
pub async fn add_region(
    state: web::Data<HttpState>,
    payload: web::Json<RegionRequest>,
) -> ApiResult<HttpResponse> {
    let draft = RegionDraft::from(payload.into_inner());
    ensure_valid(validate_region(&draft))?;

    let region = state.regions.add(draft).await?;
    info!(region_id = %region.id, "region created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/Regions/{}", region.id)))
        .json(RegionDto::from(region)))
}

/// Replace every field of a region.
#[utoipa::path(
    put,
    path = "/Regions/{id}",
    params(("id" = String, Path, description = "Region identifier")),
    request_body = RegionRequest,
    responses(
        (status = 200, description = "Region updated", body = RegionDto),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No region with this identifier")
    ),
    tags = ["regions"],
    operation_id = "updateRegion"
)]
#[put("/Regions/{id}")]
pub async fn update_region(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RegionRequest>,
) -> ApiResult<web::Json<RegionDto>> {
    let id: RegionId = parse_id(&path.into_inner(), ID_FIELD)?;
    let draft = RegionDraft::from(payload.into_inner());
    ensure_valid(validate_region(&draft))?;

    let region = state
        .regions
        .update(&id, draft)
        .await?
        .ok_or_else(|| region_not_found(&id))?;
    info!(region_id = %id, "region updated");
    Ok(web::Json(region.into()))
}

/// Delete a region, returning its last state.
#[utoipa::path(
    delete,
    path = "/Regions/{id}",
    params(("id" = String, Path, description = "Region identifier")),
    responses(
        (status = 200, description = "Region deleted", body = RegionDto),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No region with this identifier")
    ),
    tags = ["regions"],
    operation_id = "deleteRegion"
)]
#[delete("/Regions/{id}")]
pub async fn delete_region(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<RegionDto>> {
    let id: RegionId = parse_id(&path.into_inner(), ID_FIELD)?;
    let region = state
        .regions
        .delete(&id)
        .await?
        .ok_or_else(|| region_not_found(&id))?;
    info!(region_id = %id, "region deleted");
    Ok(web::Json(region.into()))
}

#[cfg(test)]
#[path = "regions_tests.rs"]
mod tests;
