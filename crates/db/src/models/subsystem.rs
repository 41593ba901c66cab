//! Rows of the `teilsysteme` table.

use bauhub_core::status::ItemStatus;
use bauhub_core::types::{Date, DbId, Timestamp};
use sqlx::FromRow;

use super::{required, set, set_nullable};
use crate::error::StoreError;

pub const TABLE: &str = "teilsysteme";

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SubsystemRow {
    pub id: DbId,
    pub projekt_id: DbId,
    pub ks: Option<String>,
    pub teilsystem_nummer: Option<String>,
    pub name: String,
    pub beschreibung: Option<String>,
    pub bemerkung: Option<String>,
    pub eroeffnet_am: Option<Date>,
    pub eroeffnet_durch: Option<String>,
    pub montagetermin: Option<Date>,
    pub lieferfrist: Option<Date>,
    pub abgabe_planer: Option<Date>,
    pub plan_status: Option<String>,
    pub wema_link: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ItemStatus,
    pub created_at: Timestamp,
}

/// Insert/Update shape of `teilsysteme`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubsystemChanges {
    pub projekt_id: Option<DbId>,
    pub ks: Option<String>,
    pub teilsystem_nummer: Option<String>,
    pub name: Option<String>,
    pub beschreibung: Option<String>,
    pub bemerkung: Option<String>,
    pub eroeffnet_am: Option<Date>,
    pub eroeffnet_durch: Option<String>,
    pub montagetermin: Option<Date>,
    pub lieferfrist: Option<Date>,
    pub abgabe_planer: Option<Date>,
    pub plan_status: Option<String>,
    pub wema_link: Option<String>,
    pub status: Option<ItemStatus>,
}

impl SubsystemRow {
    pub fn from_insert(
        id: DbId,
        now: Timestamp,
        changes: &SubsystemChanges,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            id,
            projekt_id: required(&changes.projekt_id, TABLE, "projekt_id")?,
            ks: changes.ks.clone(),
            teilsystem_nummer: changes.teilsystem_nummer.clone(),
            name: required(&changes.name, TABLE, "name")?,
            beschreibung: changes.beschreibung.clone(),
            bemerkung: changes.bemerkung.clone(),
            eroeffnet_am: changes.eroeffnet_am,
            eroeffnet_durch: changes.eroeffnet_durch.clone(),
            montagetermin: changes.montagetermin,
            lieferfrist: changes.lieferfrist,
            abgabe_planer: changes.abgabe_planer,
            plan_status: changes.plan_status.clone(),
            wema_link: changes.wema_link.clone(),
            status: changes.status.unwrap_or_default(),
            created_at: now,
        })
    }
}

impl SubsystemChanges {
    pub fn apply_to(&self, row: &mut SubsystemRow) {
        set(&mut row.projekt_id, &self.projekt_id);
        set_nullable(&mut row.ks, &self.ks);
        set_nullable(&mut row.teilsystem_nummer, &self.teilsystem_nummer);
        set(&mut row.name, &self.name);
        set_nullable(&mut row.beschreibung, &self.beschreibung);
        set_nullable(&mut row.bemerkung, &self.bemerkung);
        set_nullable(&mut row.eroeffnet_am, &self.eroeffnet_am);
        set_nullable(&mut row.eroeffnet_durch, &self.eroeffnet_durch);
        set_nullable(&mut row.montagetermin, &self.montagetermin);
        set_nullable(&mut row.lieferfrist, &self.lieferfrist);
        set_nullable(&mut row.abgabe_planer, &self.abgabe_planer);
        set_nullable(&mut row.plan_status, &self.plan_status);
        set_nullable(&mut row.wema_link, &self.wema_link);
        set(&mut row.status, &self.status);
    }
}
