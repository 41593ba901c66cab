//! Rows of the recent-activity union over `teilsysteme`, `positionen` and
//! `material`.

use bauhub_core::error::CoreError;
use bauhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Which table an activity row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivitySource {
    Subsystem,
    Position,
    Material,
}

impl ActivitySource {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivitySource::Subsystem => "teilsystem",
            ActivitySource::Position => "position",
            ActivitySource::Material => "material",
        }
    }
}

impl TryFrom<String> for ActivitySource {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "teilsystem" => Ok(ActivitySource::Subsystem),
            "position" => Ok(ActivitySource::Position),
            "material" => Ok(ActivitySource::Material),
            other => Err(CoreError::Internal(format!(
                "Unknown activity source '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ActivityRow {
    #[sqlx(try_from = "String")]
    pub source: ActivitySource,
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
