//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **in_memory**: process-local repositories for development and tests
//!
//! Adapters only translate between domain types and storage representations.

pub mod in_memory;
pub mod persistence;
