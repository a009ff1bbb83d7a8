//! # Commune Shared
//!
//! Wire types shared by the server and any Rust client: request bodies and
//! the response envelope.

pub mod dto;
pub mod response;

pub use response::{Envelope, EnvelopeStatus, UnsupportedStatus, filter_fields};
