//! # Commune Infrastructure
//!
//! Concrete implementations of the repository ports defined in `commune-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//!
//! Without `postgres` only the in-memory repository is built.

pub mod database;

pub use database::{DatabaseConfig, InMemoryCommunityRepository};

#[cfg(feature = "postgres")]
pub use database::PostgresCommunityRepository;
