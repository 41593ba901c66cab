use bauhub_core::models::subsystem::{Subsystem, SubsystemPatch};

use crate::models::subsystem::{SubsystemChanges, SubsystemRow};

pub fn to_app(row: SubsystemRow) -> Subsystem {
    Subsystem {
        id: row.id,
        project_id: row.projekt_id,
        cost_center: row.ks,
        system_number: row.teilsystem_nummer,
        name: row.name,
        description: row.beschreibung,
        remark: row.bemerkung,
        opened_on: row.eroeffnet_am,
        opened_by: row.eroeffnet_durch,
        assembly_date: row.montagetermin,
        delivery_deadline: row.lieferfrist,
        plan_submission: row.abgabe_planer,
        plan_status: row.plan_status,
        external_link: row.wema_link,
        status: row.status,
        created_at: row.created_at,
    }
}

/// The owning project is not part of the patch; callers set `projekt_id`.
pub fn to_db(patch: &SubsystemPatch) -> SubsystemChanges {
    SubsystemChanges {
        projekt_id: None,
        ks: patch.cost_center.clone(),
        teilsystem_nummer: patch.system_number.clone(),
        name: patch.name.clone(),
        beschreibung: patch.description.clone(),
        bemerkung: patch.remark.clone(),
        eroeffnet_am: patch.opened_on,
        eroeffnet_durch: patch.opened_by.clone(),
        montagetermin: patch.assembly_date,
        lieferfrist: patch.delivery_deadline,
        abgabe_planer: patch.plan_submission,
        plan_status: patch.plan_status.clone(),
        wema_link: patch.external_link.clone(),
        status: patch.status,
    }
}
