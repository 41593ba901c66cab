//! Domain types shared by every bauhub crate.
//!
//! Holds the application-facing models (camelCase on the wire), their
//! validated input shapes, the status vocabularies persisted by the store,
//! and the explicit [`session::Session`] threaded through service calls.

pub mod error;
pub mod models;
pub mod session;
pub mod status;
pub mod types;
