//! Rows of the `lieferanten` table.

use bauhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use super::{required, set, set_nullable};
use crate::error::StoreError;

pub const TABLE: &str = "lieferanten";

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SupplierRow {
    pub id: DbId,
    pub name: String,
    pub kontakt: Option<String>,
    pub email: Option<String>,
    pub telefon: Option<String>,
    pub adresse: Option<String>,
    pub notizen: Option<String>,
    pub created_at: Timestamp,
}

/// Insert/Update shape of `lieferanten`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierChanges {
    pub name: Option<String>,
    pub kontakt: Option<String>,
    pub email: Option<String>,
    pub telefon: Option<String>,
    pub adresse: Option<String>,
    pub notizen: Option<String>,
}

impl SupplierRow {
    pub fn from_insert(
        id: DbId,
        now: Timestamp,
        changes: &SupplierChanges,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            id,
            name: required(&changes.name, TABLE, "name")?,
            kontakt: changes.kontakt.clone(),
            email: changes.email.clone(),
            telefon: changes.telefon.clone(),
            adresse: changes.adresse.clone(),
            notizen: changes.notizen.clone(),
            created_at: now,
        })
    }
}

impl SupplierChanges {
    pub fn apply_to(&self, row: &mut SupplierRow) {
        set(&mut row.name, &self.name);
        set_nullable(&mut row.kontakt, &self.kontakt);
        set_nullable(&mut row.email, &self.email);
        set_nullable(&mut row.telefon, &self.telefon);
        set_nullable(&mut row.adresse, &self.adresse);
        set_nullable(&mut row.notizen, &self.notizen);
    }
}
