//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every catalogue endpoint, the health probes, the
//! transfer-object schemas, and the domain error wrappers from
//! [`crate::inbound::http::schemas`]. Swagger UI serves it in debug builds.

use crate::inbound::http::dto::{
    RegionDto, RegionRequest, WalkDifficultyDto, WalkDifficultyRequest, WalkDto, WalkRequest,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "NZ Walks API",
        description = "Catalogue of New Zealand regions, walks and walk difficulty grades."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::regions::list_regions,
        crate::inbound::http::regions::get_region,
        crate::inbound::http::regions::add_region,
        crate::inbound::http::regions::update_region,
        crate::inbound::http::regions::delete_region,
        crate::inbound::http::walk_difficulties::list_walk_difficulties,
        crate::inbound::http::walk_difficulties::get_walk_difficulty,
        crate::inbound::http::walk_difficulties::add_walk_difficulty,
        crate::inbound::http::walk_difficulties::update_walk_difficulty,
        crate::inbound::http::walk_difficulties::delete_walk_difficulty,
        crate::inbound::http::walks::list_walks,
        crate::inbound::http::walks::get_walk,
        crate::inbound::http::walks::add_walk,
        crate::inbound::http::walks::update_walk,
        crate::inbound::http::walks::delete_walk,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegionDto,
        RegionRequest,
        WalkDifficultyDto,
        WalkDifficultyRequest,
        WalkDto,
        WalkRequest,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "regions", description = "Geographic regions"),
        (name = "walk-difficulties", description = "Walk difficulty grades"),
        (name = "walks", description = "Walks with their region and difficulty"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn documents_pascal_case_walk_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let walk = schemas.get("WalkDto").expect("WalkDto schema");

        assert_object_schema_has_field(walk, "RegionId");
        assert_object_schema_has_field(walk, "WalkDifficulty");
    }

    #[test]
    fn error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = schemas.get("crate.domain.Error").expect("Error schema");

        assert_object_schema_has_field(error, "code");
        assert_object_schema_has_field(error, "traceId");
    }

    #[test]
    fn documents_every_collection_route() {
        let doc = ApiDoc::openapi();
        for path in ["/Regions", "/Regions/{id}", "/WalkDifficulty", "/Walks/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
