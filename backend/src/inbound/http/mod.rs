//! HTTP inbound adapter exposing the catalogue REST endpoints.

pub mod dto;
pub mod error;
pub mod health;
pub mod regions;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;
pub mod walk_difficulties;
pub mod walks;

use actix_web::web;

pub use error::ApiResult;

/// JSON extractor configuration reporting malformed bodies as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| validation::invalid_json_error(&err).into())
}

/// Register every catalogue route and the JSON extractor configuration.
///
/// Callers provide `web::Data<state::HttpState>` on the enclosing app.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use actix_web::{App, web};
/// use nzwalks_backend::inbound::http::{configure, state::HttpState};
/// use nzwalks_backend::outbound::in_memory::InMemoryCatalogue;
///
/// let catalogue = InMemoryCatalogue::new();
/// let state = HttpState::new(
///     Arc::new(catalogue.clone()),
///     Arc::new(catalogue.clone()),
///     Arc::new(catalogue),
/// );
/// let _app = App::new().app_data(web::Data::new(state)).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(regions::list_regions)
        .service(regions::get_region)
        .service(regions::add_region)
        .service(regions::update_region)
        .service(regions::delete_region)
        .service(walk_difficulties::list_walk_difficulties)
        .service(walk_difficulties::get_walk_difficulty)
        .service(walk_difficulties::add_walk_difficulty)
        .service(walk_difficulties::update_walk_difficulty)
        .service(walk_difficulties::delete_walk_difficulty)
        .service(walks::list_walks)
        .service(walks::get_walk)
        .service(walks::add_walk)
        .service(walks::update_walk)
        .service(walks::delete_walk);
}
