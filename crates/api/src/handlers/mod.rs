//! Request handlers for the bauhub entities.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers delegate to the matching service in `bauhub_services`
//! and map errors via [`AppError`](crate::error::AppError).

pub mod material;
pub mod position;
pub mod profile;
pub mod project;
pub mod reservation;
pub mod session;
pub mod subsystem;
pub mod supplier;
pub mod vehicle;
