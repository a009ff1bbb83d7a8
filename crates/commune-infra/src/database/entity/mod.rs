//! SeaORM entities.

pub mod community;
