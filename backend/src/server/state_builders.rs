//! Explicit wiring of repository adapters into the HTTP state.

use std::sync::Arc;

use tracing::warn;

use nzwalks_backend::inbound::http::state::HttpState;
use nzwalks_backend::outbound::in_memory::InMemoryCatalogue;
use nzwalks_backend::outbound::persistence::{
    DbPool, DieselRegionRepository, DieselWalkDifficultyRepository, DieselWalkRepository,
};

/// Diesel repositories when a pool is configured, otherwise one shared
/// in-memory catalogue.
pub(crate) fn build_http_state(db_pool: Option<&DbPool>) -> HttpState {
    match db_pool {
        Some(pool) => HttpState::new(
            Arc::new(DieselRegionRepository::new(pool.clone())),
            Arc::new(DieselWalkDifficultyRepository::new(pool.clone())),
            Arc::new(DieselWalkRepository::new(pool.clone())),
        ),
        None => {
            warn!("no database configured; catalogue data will not survive a restart");
            let catalogue = InMemoryCatalogue::new();
            HttpState::new(
                Arc::new(catalogue.clone()),
                Arc::new(catalogue.clone()),
                Arc::new(catalogue),
            )
        }
    }
}
