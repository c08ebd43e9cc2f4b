//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows and domain types and map every
//! store failure into [`crate::domain::ports::RepositoryError`]. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) stay private to this
//! module.
//!
//! # Example
//!
//! ```no_run
//! use nzwalks_backend::outbound::persistence::{DbPool, DieselRegionRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/nzwalks")).await?;
//! let regions = DieselRegionRepository::new(pool);
//! # let _ = regions;
//! # Ok(())
//! # }
//! ```

mod diesel_region_repository;
mod diesel_walk_difficulty_repository;
mod diesel_walk_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_region_repository::DieselRegionRepository;
pub use diesel_walk_difficulty_repository::DieselWalkDifficultyRepository;
pub use diesel_walk_repository::DieselWalkRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
