//! Rows of the `projekte` table.

use bauhub_core::status::ProjectStatus;
use bauhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use super::{required, set, set_nullable};
use crate::error::StoreError;

pub const TABLE: &str = "projekte";

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub projektnummer: String,
    pub projektname: String,
    pub strasse: Option<String>,
    pub plz: Option<String>,
    pub ort: String,
    pub kanton: String,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub image_url: Option<String>,
    pub created_by: Option<DbId>,
    pub projektleiter: Option<String>,
    pub deviseur: Option<String>,
    pub bim_konstrukteur: Option<String>,
    pub bauleiter: Option<String>,
    pub polier: Option<String>,
    pub einkauf: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert/Update shape of `projekte`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    pub projektnummer: Option<String>,
    pub projektname: Option<String>,
    pub strasse: Option<String>,
    pub plz: Option<String>,
    pub ort: Option<String>,
    pub kanton: Option<String>,
    pub status: Option<ProjectStatus>,
    pub image_url: Option<String>,
    pub created_by: Option<DbId>,
    pub projektleiter: Option<String>,
    pub deviseur: Option<String>,
    pub bim_konstrukteur: Option<String>,
    pub bauleiter: Option<String>,
    pub polier: Option<String>,
    pub einkauf: Option<String>,
}

impl ProjectRow {
    /// Build the row an insert of `changes` produces, applying column defaults.
    pub fn from_insert(
        id: DbId,
        now: Timestamp,
        changes: &ProjectChanges,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            id,
            projektnummer: required(&changes.projektnummer, TABLE, "projektnummer")?,
            projektname: required(&changes.projektname, TABLE, "projektname")?,
            strasse: changes.strasse.clone(),
            plz: changes.plz.clone(),
            ort: required(&changes.ort, TABLE, "ort")?,
            kanton: required(&changes.kanton, TABLE, "kanton")?,
            status: changes.status.unwrap_or_default(),
            image_url: changes.image_url.clone(),
            created_by: changes.created_by,
            projektleiter: changes.projektleiter.clone(),
            deviseur: changes.deviseur.clone(),
            bim_konstrukteur: changes.bim_konstrukteur.clone(),
            bauleiter: changes.bauleiter.clone(),
            polier: changes.polier.clone(),
            einkauf: changes.einkauf.clone(),
            created_at: now,
            updated_at: now,
        })
    }
}

impl ProjectChanges {
    /// Apply the provided columns to `row`, leaving the rest untouched.
    pub fn apply_to(&self, row: &mut ProjectRow, now: Timestamp) {
        set(&mut row.projektnummer, &self.projektnummer);
        set(&mut row.projektname, &self.projektname);
        set_nullable(&mut row.strasse, &self.strasse);
        set_nullable(&mut row.plz, &self.plz);
        set(&mut row.ort, &self.ort);
        set(&mut row.kanton, &self.kanton);
        set(&mut row.status, &self.status);
        set_nullable(&mut row.image_url, &self.image_url);
        set_nullable(&mut row.created_by, &self.created_by);
        set_nullable(&mut row.projektleiter, &self.projektleiter);
        set_nullable(&mut row.deviseur, &self.deviseur);
        set_nullable(&mut row.bim_konstrukteur, &self.bim_konstrukteur);
        set_nullable(&mut row.bauleiter, &self.bauleiter);
        set_nullable(&mut row.polier, &self.polier);
        set_nullable(&mut row.einkauf, &self.einkauf);
        row.updated_at = now;
    }
}
