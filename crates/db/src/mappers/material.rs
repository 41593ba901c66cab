use bauhub_core::models::material::{Material, MaterialPatch};

use crate::models::material::{MaterialChanges, MaterialRow};

pub fn to_app(row: MaterialRow) -> Material {
    Material {
        id: row.id,
        position_id: row.position_id,
        supplier_id: row.lieferant_id,
        name: row.name,
        manufacturer: row.hersteller,
        article_number: row.artikelnummer,
        status: row.status,
        created_at: row.created_at,
    }
}

pub fn to_db(patch: &MaterialPatch) -> MaterialChanges {
    MaterialChanges {
        position_id: patch.position_id,
        lieferant_id: patch.supplier_id,
        name: patch.name.clone(),
        hersteller: patch.manufacturer.clone(),
        artikelnummer: patch.article_number.clone(),
        status: patch.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bauhub_core::status::ItemStatus;
    use bauhub_core::types::DbId;
    use chrono::Utc;

    #[test]
    fn round_trip_restores_every_field() {
        let patch = MaterialPatch {
            position_id: Some(DbId::new_v4()),
            supplier_id: Some(DbId::new_v4()),
            name: Some("Silikon transparent".to_string()),
            manufacturer: Some("Sika".to_string()),
            article_number: Some("SK-25-310".to_string()),
            status: Some(ItemStatus::Installed),
        };
        let material =
            to_app(MaterialRow::from_insert(DbId::new_v4(), Utc::now(), &to_db(&patch)).unwrap());

        assert_eq!(material.position_id, patch.position_id);
        assert_eq!(material.supplier_id, patch.supplier_id);
        assert_eq!(Some(material.name), patch.name);
        assert_eq!(material.manufacturer, patch.manufacturer);
        assert_eq!(material.article_number, patch.article_number);
        assert_eq!(Some(material.status), patch.status);
    }

    #[test]
    fn null_columns_become_none() {
        let changes = MaterialChanges {
            name: Some("Schrauben".to_string()),
            ..Default::default()
        };
        let material =
            to_app(MaterialRow::from_insert(DbId::new_v4(), Utc::now(), &changes).unwrap());
        assert_eq!(material.position_id, None);
        assert_eq!(material.supplier_id, None);
        assert_eq!(material.manufacturer, None);
        assert_eq!(material.article_number, None);
    }
}
