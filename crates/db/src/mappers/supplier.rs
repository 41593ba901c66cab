use bauhub_core::models::supplier::{Supplier, SupplierPatch};

use crate::models::supplier::{SupplierChanges, SupplierRow};

pub fn to_app(row: SupplierRow) -> Supplier {
    Supplier {
        id: row.id,
        name: row.name,
        contact: row.kontakt,
        email: row.email,
        phone: row.telefon,
        address: row.adresse,
        notes: row.notizen,
        created_at: row.created_at,
    }
}

pub fn to_db(patch: &SupplierPatch) -> SupplierChanges {
    SupplierChanges {
        name: patch.name.clone(),
        kontakt: patch.contact.clone(),
        email: patch.email.clone(),
        telefon: patch.phone.clone(),
        adresse: patch.address.clone(),
        notizen: patch.notes.clone(),
    }
}
