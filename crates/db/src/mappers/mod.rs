//! Row↔model mappers, one module per entity.
//!
//! `to_app` turns a stored row into the application model (renaming
//! columns, `NULL` → `None`). `to_db` turns a partial model into the
//! row-shaped changes (absent stays absent, nothing is defaulted). Both
//! directions are pure field-by-field transforms.

pub mod activity;
pub mod material;
pub mod position;
pub mod profile;
pub mod project;
pub mod reservation;
pub mod subsystem;
pub mod supplier;
pub mod vehicle;
