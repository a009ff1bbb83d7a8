//! # Commune Core
//!
//! The domain layer of the Commune API.
//! This crate contains the community model and the repository ports, with
//! zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
