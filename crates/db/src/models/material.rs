//! Rows of the `material` table.

use bauhub_core::status::ItemStatus;
use bauhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use super::{required, set, set_nullable};
use crate::error::StoreError;

pub const TABLE: &str = "material";

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MaterialRow {
    pub id: DbId,
    pub position_id: Option<DbId>,
    pub lieferant_id: Option<DbId>,
    pub name: String,
    pub hersteller: Option<String>,
    pub artikelnummer: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ItemStatus,
    pub created_at: Timestamp,
}

/// Insert/Update shape of `material`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialChanges {
    pub position_id: Option<DbId>,
    pub lieferant_id: Option<DbId>,
    pub name: Option<String>,
    pub hersteller: Option<String>,
    pub artikelnummer: Option<String>,
    pub status: Option<ItemStatus>,
}

impl MaterialRow {
    pub fn from_insert(
        id: DbId,
        now: Timestamp,
        changes: &MaterialChanges,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            id,
            position_id: changes.position_id,
            lieferant_id: changes.lieferant_id,
            name: required(&changes.name, TABLE, "name")?,
            hersteller: changes.hersteller.clone(),
            artikelnummer: changes.artikelnummer.clone(),
            status: changes.status.unwrap_or_default(),
            created_at: now,
        })
    }
}

impl MaterialChanges {
    pub fn apply_to(&self, row: &mut MaterialRow) {
        set_nullable(&mut row.position_id, &self.position_id);
        set_nullable(&mut row.lieferant_id, &self.lieferant_id);
        set(&mut row.name, &self.name);
        set_nullable(&mut row.hersteller, &self.hersteller);
        set_nullable(&mut row.artikelnummer, &self.artikelnummer);
        set(&mut row.status, &self.status);
    }
}
