//! Row types mirroring the persisted tables, and their row-shaped partials.
//!
//! Each `*Row` is exactly one table row (column names as stored, `NULL` as
//! `None`). Each `*Changes` is the Insert/Update shape for that table: every
//! column optional, `None` meaning "not provided". The SQL repositories bind
//! `*Changes` with `COALESCE`; the in-memory store uses
//! [`from_insert`](project::ProjectRow::from_insert)/`apply_to` to get the
//! same defaults and coalescing.

pub mod activity;
pub mod material;
pub mod position;
pub mod profile;
pub mod project;
pub mod reservation;
pub mod subsystem;
pub mod supplier;
pub mod vehicle;

use crate::error::StoreError;

/// Overwrite a NOT NULL column if a value was provided.
pub(crate) fn set<T: Clone>(column: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *column = value.clone();
    }
}

/// Overwrite a nullable column if a value was provided.
pub(crate) fn set_nullable<T: Clone>(column: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        column.clone_from(value);
    }
}

/// Take a NOT NULL column value for an insert.
pub(crate) fn required<T: Clone>(
    value: &Option<T>,
    table: &'static str,
    column: &'static str,
) -> Result<T, StoreError> {
    value.clone().ok_or(StoreError::NotNull { table, column })
}
