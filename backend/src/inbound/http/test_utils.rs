//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use crate::domain::ports::{
    MockRegionRepository, MockWalkDifficultyRepository, MockWalkRepository,
};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::in_memory::InMemoryCatalogue;

/// State backed by a fresh in-memory catalogue.
pub fn in_memory_state() -> HttpState {
    let catalogue = InMemoryCatalogue::new();
    HttpState::new(
        Arc::new(catalogue.clone()),
        Arc::new(catalogue.clone()),
        Arc::new(catalogue),
    )
}

/// State whose ports are mocks; unexpected calls panic.
pub fn mock_state(
    regions: MockRegionRepository,
    walk_difficulties: MockWalkDifficultyRepository,
    walks: MockWalkRepository,
) -> HttpState {
    HttpState::new(Arc::new(regions), Arc::new(walk_difficulties), Arc::new(walks))
}

/// Catalogue app wrapped in the trace middleware, as the server builds it.
pub fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}
