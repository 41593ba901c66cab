use bauhub_core::models::position::{Position, PositionPatch};

use crate::models::position::{PositionChanges, PositionRow};

pub fn to_app(row: PositionRow) -> Position {
    Position {
        id: row.id,
        subsystem_id: row.teilsystem_id,
        name: row.name,
        quantity: row.menge,
        unit: row.einheit,
        status: row.status,
        created_at: row.created_at,
    }
}

/// The owning subsystem is not part of the patch; callers set `teilsystem_id`.
pub fn to_db(patch: &PositionPatch) -> PositionChanges {
    PositionChanges {
        teilsystem_id: None,
        name: patch.name.clone(),
        menge: patch.quantity,
        einheit: patch.unit.clone(),
        status: patch.status,
    }
}
