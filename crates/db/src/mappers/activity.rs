use bauhub_core::models::activity::{Activity, ActivityKind};

use crate::models::activity::{ActivityRow, ActivitySource};

pub fn to_app(row: ActivityRow) -> Activity {
    let kind = match row.source {
        ActivitySource::Subsystem => ActivityKind::SubsystemCreated,
        ActivitySource::Position => ActivityKind::PositionCreated,
        ActivitySource::Material => ActivityKind::MaterialRecorded,
    };
    Activity {
        kind,
        target_id: row.id,
        target_name: row.name,
        at: row.created_at,
    }
}
