//! PostgreSQL-backed store tests. Run with `--features pg-tests` and a
//! `DATABASE_URL` pointing at a server the test harness may create
//! databases on.
#![cfg(feature = "pg-tests")]

use bauhub_core::status::{ItemStatus, VehicleCategory, VehicleStatus};
use bauhub_db::models::material::MaterialChanges;
use bauhub_db::models::position::PositionChanges;
use bauhub_db::models::project::ProjectChanges;
use bauhub_db::models::reservation::ReservationChanges;
use bauhub_db::models::subsystem::SubsystemChanges;
use bauhub_db::models::vehicle::VehicleChanges;
use bauhub_db::store::{ProjectStore, ReservationStore, SubsystemStore, VehicleStore};
use bauhub_db::PgStore;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

fn project(number: &str) -> ProjectChanges {
    ProjectChanges {
        projektnummer: Some(number.to_string()),
        projektname: Some("Werkhof Nord".to_string()),
        ort: Some("Frauenfeld".to_string()),
        kanton: Some("TG".to_string()),
        ..Default::default()
    }
}

#[sqlx::test]
async fn project_insert_applies_defaults(pool: PgPool) {
    let store = PgStore::new(pool);
    let row = store.insert_project(&project("2025-100")).await.unwrap();
    assert_eq!(row.projektnummer, "2025-100");
    assert_eq!(row.strasse, None);

    let found = store.find_project(row.id).await.unwrap();
    assert_eq!(found, Some(row));
    assert_eq!(store.find_project(Uuid::new_v4()).await.unwrap(), None);
}

#[sqlx::test]
async fn duplicate_project_number_reports_constraint(pool: PgPool) {
    let store = PgStore::new(pool);
    store.insert_project(&project("2025-100")).await.unwrap();
    let err = store.insert_project(&project("2025-100")).await.unwrap_err();
    assert_eq!(err.unique_constraint(), Some("uq_projekte_projektnummer"));
}

#[sqlx::test]
async fn material_count_follows_joins(pool: PgPool) {
    let store = PgStore::new(pool);
    let project = store.insert_project(&project("2025-100")).await.unwrap();
    for s in 0..2 {
        let subsystem = store
            .insert_subsystem(&SubsystemChanges {
                projekt_id: Some(project.id),
                name: Some(format!("Teilsystem {s}")),
                ..Default::default()
            })
            .await
            .unwrap();
        for p in 0..3 {
            let position = store
                .insert_position(&PositionChanges {
                    teilsystem_id: Some(subsystem.id),
                    name: Some(format!("Position {p}")),
                    menge: Some(1.0),
                    einheit: Some("Stk".to_string()),
                    status: Some(ItemStatus::Ordered),
                })
                .await
                .unwrap();
            store
                .insert_material(&MaterialChanges {
                    position_id: Some(position.id),
                    name: Some("Rohr".to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
    }

    assert_eq!(store.count_subsystems(project.id).await.unwrap(), 2);
    assert_eq!(store.count_positions(project.id).await.unwrap(), 6);
    assert_eq!(store.count_material(project.id).await.unwrap(), 6);
    assert_eq!(store.recent_activity(project.id, 5).await.unwrap().len(), 5);
}

#[sqlx::test]
async fn reserve_vehicle_is_transactional(pool: PgPool) {
    let store = PgStore::new(pool);
    let vehicle = store
        .insert_vehicle(&VehicleChanges {
            bezeichnung: Some("JLG 1930ES".to_string()),
            kategorie: Some(VehicleCategory::ScissorLift),
            inventarnummer: Some("F-300".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let changes = ReservationChanges {
        fahrzeug_id: Some(vehicle.id),
        reserviert_ab: NaiveDate::from_ymd_opt(2025, 4, 7),
        ..Default::default()
    };

    let first = store.reserve_vehicle(&changes).await.unwrap();
    assert!(first.vehicle_status_changed);
    let second = store.reserve_vehicle(&changes).await.unwrap();
    assert!(!second.vehicle_status_changed);
    let vehicle = store.find_vehicle(vehicle.id).await.unwrap().unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Reserved);

    let missing = ReservationChanges {
        fahrzeug_id: Some(Uuid::new_v4()),
        ..changes
    };
    let err = store.reserve_vehicle(&missing).await.unwrap_err();
    assert!(err.is_foreign_key_violation());
    assert_eq!(store.list_reservations().await.unwrap().len(), 2);
}

#[sqlx::test]
async fn failed_status_update_rolls_back_reservation(pool: PgPool) {
    sqlx::query(
        "CREATE FUNCTION block_vehicle_update() RETURNS trigger AS $$ \
         BEGIN RAISE EXCEPTION 'vehicle status is locked'; END; \
         $$ LANGUAGE plpgsql",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TRIGGER trg_block_vehicle_update BEFORE UPDATE ON fahrzeuge \
         FOR EACH ROW EXECUTE FUNCTION block_vehicle_update()",
    )
    .execute(&pool)
    .await
    .unwrap();

    let store = PgStore::new(pool);
    let vehicle = store
        .insert_vehicle(&VehicleChanges {
            bezeichnung: Some("Haulotte Compact 10".to_string()),
            kategorie: Some(VehicleCategory::ScissorLift),
            inventarnummer: Some("F-301".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let result = store
        .reserve_vehicle(&ReservationChanges {
            fahrzeug_id: Some(vehicle.id),
            reserviert_ab: NaiveDate::from_ymd_opt(2025, 4, 14),
            ..Default::default()
        })
        .await;
    assert!(result.is_err());

    assert!(store.list_reservations().await.unwrap().is_empty());
    let vehicle = store.find_vehicle(vehicle.id).await.unwrap().unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Available);
}
