//! Rows of the `fahrzeug_reservierungen` table.

use bauhub_core::types::{Date, DbId, Timestamp};
use sqlx::FromRow;

use super::{required, set, set_nullable};
use crate::error::StoreError;

pub const TABLE: &str = "fahrzeug_reservierungen";

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ReservationRow {
    pub id: DbId,
    pub fahrzeug_id: DbId,
    pub projekt_id: Option<DbId>,
    pub baustelle: Option<String>,
    pub reserviert_ab: Date,
    pub reserviert_bis: Option<Date>,
    pub reserviert_durch: Option<String>,
    pub bemerkung: Option<String>,
    pub created_at: Timestamp,
}

/// Insert/Update shape of `fahrzeug_reservierungen`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationChanges {
    pub fahrzeug_id: Option<DbId>,
    pub projekt_id: Option<DbId>,
    pub baustelle: Option<String>,
    pub reserviert_ab: Option<Date>,
    pub reserviert_bis: Option<Date>,
    pub reserviert_durch: Option<String>,
    pub bemerkung: Option<String>,
}

impl ReservationRow {
    pub fn from_insert(
        id: DbId,
        now: Timestamp,
        changes: &ReservationChanges,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            id,
            fahrzeug_id: required(&changes.fahrzeug_id, TABLE, "fahrzeug_id")?,
            projekt_id: changes.projekt_id,
            baustelle: changes.baustelle.clone(),
            reserviert_ab: required(&changes.reserviert_ab, TABLE, "reserviert_ab")?,
            reserviert_bis: changes.reserviert_bis,
            reserviert_durch: changes.reserviert_durch.clone(),
            bemerkung: changes.bemerkung.clone(),
            created_at: now,
        })
    }
}

impl ReservationChanges {
    pub fn apply_to(&self, row: &mut ReservationRow) {
        set(&mut row.fahrzeug_id, &self.fahrzeug_id);
        set_nullable(&mut row.projekt_id, &self.projekt_id);
        set_nullable(&mut row.baustelle, &self.baustelle);
        set(&mut row.reserviert_ab, &self.reserviert_ab);
        set_nullable(&mut row.reserviert_bis, &self.reserviert_bis);
        set_nullable(&mut row.reserviert_durch, &self.reserviert_durch);
        set_nullable(&mut row.bemerkung, &self.bemerkung);
    }
}
