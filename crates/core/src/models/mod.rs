//! Application-facing models and their input shapes.
//!
//! Models are what services hand to callers: English field names,
//! camelCase on the wire, `None` wherever the stored column is `NULL`.
//! `New*` types carry the fields an insert needs; `*Patch` types are partial
//! updates where an absent field leaves the stored value untouched.

pub mod activity;
pub mod material;
pub mod position;
pub mod project;
pub mod reservation;
pub mod subsystem;
pub mod supplier;
pub mod user;
pub mod vehicle;
