//! Domain ports defining the edges of the hexagon.
//!
//! Each catalogue entity has one driven port. Adapters map their failures
//! into [`RepositoryError`] instead of returning framework errors.

mod macros;
pub(crate) use macros::define_port_error;

mod region_repository;
mod repository_error;
mod walk_difficulty_repository;
mod walk_repository;

#[cfg(test)]
pub use region_repository::MockRegionRepository;
pub use region_repository::RegionRepository;
pub use repository_error::RepositoryError;
#[cfg(test)]
pub use walk_difficulty_repository::MockWalkDifficultyRepository;
pub use walk_difficulty_repository::WalkDifficultyRepository;
#[cfg(test)]
pub use walk_repository::MockWalkRepository;
pub use walk_repository::WalkRepository;
