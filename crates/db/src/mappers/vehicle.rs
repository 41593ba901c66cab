use bauhub_core::models::vehicle::{Vehicle, VehiclePatch};

use crate::models::vehicle::{VehicleChanges, VehicleRow};

pub fn to_app(row: VehicleRow) -> Vehicle {
    Vehicle {
        id: row.id,
        designation: row.bezeichnung,
        category: row.kategorie,
        inventory_number: row.inventarnummer,
        make: row.fabrikat,
        model_type: row.typ,
        serial_number: row.seriennummer,
        color: row.farbe,
        license_plate: row.kennzeichen,
        platform_height: row.plattformhoehe,
        dimensions: row.masse,
        power: row.leistung,
        weight: row.gewicht,
        reach: row.reichweite,
        payload: row.nutzlast,
        drive: row.antrieb,
        year_built: row.baujahr,
        special_notes: row.spez_hinweis,
        purchase_year: row.kaufjahr,
        inspected_until: row.geprueft_bis,
        emissions_service: row.abgaswartung,
        status: row.status,
        remark: row.bemerkung,
        created_at: row.created_at,
    }
}

pub fn to_db(patch: &VehiclePatch) -> VehicleChanges {
    VehicleChanges {
        bezeichnung: patch.designation.clone(),
        kategorie: patch.category,
        inventarnummer: patch.inventory_number.clone(),
        fabrikat: patch.make.clone(),
        typ: patch.model_type.clone(),
        seriennummer: patch.serial_number.clone(),
        farbe: patch.color.clone(),
        kennzeichen: patch.license_plate.clone(),
        plattformhoehe: patch.platform_height.clone(),
        masse: patch.dimensions.clone(),
        leistung: patch.power.clone(),
        gewicht: patch.weight.clone(),
        reichweite: patch.reach.clone(),
        nutzlast: patch.payload.clone(),
        antrieb: patch.drive.clone(),
        baujahr: patch.year_built,
        spez_hinweis: patch.special_notes.clone(),
        kaufjahr: patch.purchase_year.clone(),
        geprueft_bis: patch.inspected_until.clone(),
        abgaswartung: patch.emissions_service.clone(),
        status: patch.status,
        bemerkung: patch.remark.clone(),
    }
}
