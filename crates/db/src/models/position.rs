//! Rows of the `positionen` table.

use bauhub_core::status::ItemStatus;
use bauhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use super::{required, set};
use crate::error::StoreError;

pub const TABLE: &str = "positionen";

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PositionRow {
    pub id: DbId,
    pub teilsystem_id: DbId,
    pub name: String,
    pub menge: f64,
    pub einheit: String,
    #[sqlx(try_from = "String")]
    pub status: ItemStatus,
    pub created_at: Timestamp,
}

/// Insert/Update shape of `positionen`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionChanges {
    pub teilsystem_id: Option<DbId>,
    pub name: Option<String>,
    pub menge: Option<f64>,
    pub einheit: Option<String>,
    pub status: Option<ItemStatus>,
}

impl PositionRow {
    pub fn from_insert(
        id: DbId,
        now: Timestamp,
        changes: &PositionChanges,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            id,
            teilsystem_id: required(&changes.teilsystem_id, TABLE, "teilsystem_id")?,
            name: required(&changes.name, TABLE, "name")?,
            menge: required(&changes.menge, TABLE, "menge")?,
            einheit: required(&changes.einheit, TABLE, "einheit")?,
            status: changes.status.unwrap_or_default(),
            created_at: now,
        })
    }
}

impl PositionChanges {
    pub fn apply_to(&self, row: &mut PositionRow) {
        set(&mut row.teilsystem_id, &self.teilsystem_id);
        set(&mut row.name, &self.name);
        set(&mut row.menge, &self.menge);
        set(&mut row.einheit, &self.einheit);
        set(&mut row.status, &self.status);
    }
}
