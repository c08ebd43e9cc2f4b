//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{RegionRepository, WalkDifficultyRepository, WalkRepository};

/// Dependency bundle for the catalogue handlers.
#[derive(Clone)]
pub struct HttpState {
    pub regions: Arc<dyn RegionRepository>,
    pub walk_difficulties: Arc<dyn WalkDifficultyRepository>,
    pub walks: Arc<dyn WalkRepository>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        regions: Arc<dyn RegionRepository>,
        walk_difficulties: Arc<dyn WalkDifficultyRepository>,
        walks: Arc<dyn WalkRepository>,
    ) -> Self {
        Self {
            regions,
            walk_difficulties,
            walks,
        }
    }
}
