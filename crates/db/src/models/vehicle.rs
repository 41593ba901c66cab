//! Rows of the `fahrzeuge` table.

use bauhub_core::status::{VehicleCategory, VehicleStatus};
use bauhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use super::{required, set, set_nullable};
use crate::error::StoreError;

pub const TABLE: &str = "fahrzeuge";

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct VehicleRow {
    pub id: DbId,
    pub bezeichnung: String,
    #[sqlx(try_from = "String")]
    pub kategorie: VehicleCategory,
    pub inventarnummer: String,
    pub fabrikat: Option<String>,
    pub typ: Option<String>,
    pub seriennummer: Option<String>,
    pub farbe: Option<String>,
    pub kennzeichen: Option<String>,
    pub plattformhoehe: Option<String>,
    pub masse: Option<String>,
    pub leistung: Option<String>,
    pub gewicht: Option<String>,
    pub reichweite: Option<String>,
    pub nutzlast: Option<String>,
    pub antrieb: Option<String>,
    pub baujahr: Option<i32>,
    pub spez_hinweis: Option<String>,
    pub kaufjahr: Option<String>,
    pub geprueft_bis: Option<String>,
    pub abgaswartung: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: VehicleStatus,
    pub bemerkung: Option<String>,
    pub created_at: Timestamp,
}

/// Insert/Update shape of `fahrzeuge`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleChanges {
    pub bezeichnung: Option<String>,
    pub kategorie: Option<VehicleCategory>,
    pub inventarnummer: Option<String>,
    pub fabrikat: Option<String>,
    pub typ: Option<String>,
    pub seriennummer: Option<String>,
    pub farbe: Option<String>,
    pub kennzeichen: Option<String>,
    pub plattformhoehe: Option<String>,
    pub masse: Option<String>,
    pub leistung: Option<String>,
    pub gewicht: Option<String>,
    pub reichweite: Option<String>,
    pub nutzlast: Option<String>,
    pub antrieb: Option<String>,
    pub baujahr: Option<i32>,
    pub spez_hinweis: Option<String>,
    pub kaufjahr: Option<String>,
    pub geprueft_bis: Option<String>,
    pub abgaswartung: Option<String>,
    pub status: Option<VehicleStatus>,
    pub bemerkung: Option<String>,
}

impl VehicleRow {
    pub fn from_insert(
        id: DbId,
        now: Timestamp,
        changes: &VehicleChanges,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            id,
            bezeichnung: required(&changes.bezeichnung, TABLE, "bezeichnung")?,
            kategorie: required(&changes.kategorie, TABLE, "kategorie")?,
            inventarnummer: required(&changes.inventarnummer, TABLE, "inventarnummer")?,
            fabrikat: changes.fabrikat.clone(),
            typ: changes.typ.clone(),
            seriennummer: changes.seriennummer.clone(),
            farbe: changes.farbe.clone(),
            kennzeichen: changes.kennzeichen.clone(),
            plattformhoehe: changes.plattformhoehe.clone(),
            masse: changes.masse.clone(),
            leistung: changes.leistung.clone(),
            gewicht: changes.gewicht.clone(),
            reichweite: changes.reichweite.clone(),
            nutzlast: changes.nutzlast.clone(),
            antrieb: changes.antrieb.clone(),
            baujahr: changes.baujahr,
            spez_hinweis: changes.spez_hinweis.clone(),
            kaufjahr: changes.kaufjahr.clone(),
            geprueft_bis: changes.geprueft_bis.clone(),
            abgaswartung: changes.abgaswartung.clone(),
            status: changes.status.unwrap_or_default(),
            bemerkung: changes.bemerkung.clone(),
            created_at: now,
        })
    }
}

impl VehicleChanges {
    pub fn apply_to(&self, row: &mut VehicleRow) {
        set(&mut row.bezeichnung, &self.bezeichnung);
        set(&mut row.kategorie, &self.kategorie);
        set(&mut row.inventarnummer, &self.inventarnummer);
        set_nullable(&mut row.fabrikat, &self.fabrikat);
        set_nullable(&mut row.typ, &self.typ);
        set_nullable(&mut row.seriennummer, &self.seriennummer);
        set_nullable(&mut row.farbe, &self.farbe);
        set_nullable(&mut row.kennzeichen, &self.kennzeichen);
        set_nullable(&mut row.plattformhoehe, &self.plattformhoehe);
        set_nullable(&mut row.masse, &self.masse);
        set_nullable(&mut row.leistung, &self.leistung);
        set_nullable(&mut row.gewicht, &self.gewicht);
        set_nullable(&mut row.reichweite, &self.reichweite);
        set_nullable(&mut row.nutzlast, &self.nutzlast);
        set_nullable(&mut row.antrieb, &self.antrieb);
        set_nullable(&mut row.baujahr, &self.baujahr);
        set_nullable(&mut row.spez_hinweis, &self.spez_hinweis);
        set_nullable(&mut row.kaufjahr, &self.kaufjahr);
        set_nullable(&mut row.geprueft_bis, &self.geprueft_bis);
        set_nullable(&mut row.abgaswartung, &self.abgaswartung);
        set(&mut row.status, &self.status);
        set_nullable(&mut row.bemerkung, &self.bemerkung);
    }
}
