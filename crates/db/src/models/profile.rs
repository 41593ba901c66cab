//! Rows of the `profiles` table.

use bauhub_core::status::UserRole;
use bauhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use super::{required, set, set_nullable};
use crate::error::StoreError;

pub const TABLE: &str = "profiles";

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProfileRow {
    pub id: DbId,
    pub vorname: Option<String>,
    pub nachname: Option<String>,
    pub email: Option<String>,
    pub abteilung: Option<String>,
    #[sqlx(try_from = "String")]
    pub rolle: UserRole,
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert/Update shape of `profiles`. The id is supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub id: Option<DbId>,
    pub vorname: Option<String>,
    pub nachname: Option<String>,
    pub email: Option<String>,
    pub abteilung: Option<String>,
    pub rolle: Option<UserRole>,
    pub avatar_url: Option<String>,
}

impl ProfileRow {
    pub fn from_insert(now: Timestamp, changes: &ProfileChanges) -> Result<Self, StoreError> {
        Ok(Self {
            id: required(&changes.id, TABLE, "id")?,
            vorname: changes.vorname.clone(),
            nachname: changes.nachname.clone(),
            email: changes.email.clone(),
            abteilung: changes.abteilung.clone(),
            rolle: changes.rolle.unwrap_or_default(),
            avatar_url: changes.avatar_url.clone(),
            created_at: now,
            updated_at: now,
        })
    }
}

impl ProfileChanges {
    /// Apply the provided columns to `row`. The id is never rewritten.
    pub fn apply_to(&self, row: &mut ProfileRow, now: Timestamp) {
        set_nullable(&mut row.vorname, &self.vorname);
        set_nullable(&mut row.nachname, &self.nachname);
        set_nullable(&mut row.email, &self.email);
        set_nullable(&mut row.abteilung, &self.abteilung);
        set(&mut row.rolle, &self.rolle);
        set_nullable(&mut row.avatar_url, &self.avatar_url);
        row.updated_at = now;
    }
}
