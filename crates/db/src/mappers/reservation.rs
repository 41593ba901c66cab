use bauhub_core::models::reservation::{Reservation, ReservationPatch};

use crate::models::reservation::{ReservationChanges, ReservationRow};

pub fn to_app(row: ReservationRow) -> Reservation {
    Reservation {
        id: row.id,
        vehicle_id: row.fahrzeug_id,
        project_id: row.projekt_id,
        site: row.baustelle,
        starts_on: row.reserviert_ab,
        ends_on: row.reserviert_bis,
        reserved_by: row.reserviert_durch,
        remark: row.bemerkung,
        created_at: row.created_at,
    }
}

pub fn to_db(patch: &ReservationPatch) -> ReservationChanges {
    ReservationChanges {
        fahrzeug_id: patch.vehicle_id,
        projekt_id: patch.project_id,
        baustelle: patch.site.clone(),
        reserviert_ab: patch.starts_on,
        reserviert_bis: patch.ends_on,
        reserviert_durch: patch.reserved_by.clone(),
        bemerkung: patch.remark.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bauhub_core::types::DbId;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn round_trip_restores_every_field() {
        let patch = ReservationPatch {
            vehicle_id: Some(DbId::new_v4()),
            project_id: Some(DbId::new_v4()),
            site: Some("Landi Frauenfeld".to_string()),
            starts_on: NaiveDate::from_ymd_opt(2025, 5, 5),
            ends_on: NaiveDate::from_ymd_opt(2025, 5, 9),
            reserved_by: Some("M. Keller".to_string()),
            remark: Some("Mit Anhänger".to_string()),
        };
        let reservation = to_app(
            ReservationRow::from_insert(DbId::new_v4(), Utc::now(), &to_db(&patch)).unwrap(),
        );

        assert_eq!(Some(reservation.vehicle_id), patch.vehicle_id);
        assert_eq!(reservation.project_id, patch.project_id);
        assert_eq!(reservation.site, patch.site);
        assert_eq!(Some(reservation.starts_on), patch.starts_on);
        assert_eq!(reservation.ends_on, patch.ends_on);
        assert_eq!(reservation.reserved_by, patch.reserved_by);
        assert_eq!(reservation.remark, patch.remark);
    }

    #[test]
    fn null_columns_become_none() {
        let changes = ReservationChanges {
            fahrzeug_id: Some(DbId::new_v4()),
            reserviert_ab: NaiveDate::from_ymd_opt(2025, 5, 5),
            ..Default::default()
        };
        let reservation =
            to_app(ReservationRow::from_insert(DbId::new_v4(), Utc::now(), &changes).unwrap());

        assert_eq!(reservation.project_id, None);
        assert_eq!(reservation.site, None);
        assert_eq!(reservation.ends_on, None);
        assert_eq!(reservation.reserved_by, None);
        assert_eq!(reservation.remark, None);
    }
}
