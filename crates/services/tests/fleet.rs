mod common;

use assert_matches::assert_matches;
use bauhub_core::error::CoreError;
use bauhub_core::models::reservation::{NewReservation, ReservationPatch};
use bauhub_core::models::vehicle::{NewVehicle, VehiclePatch};
use bauhub_core::session::Session;
use bauhub_core::status::{VehicleCategory, VehicleStatus};
use bauhub_core::types::DbId;
use bauhub_services::ServiceError;

use common::{create_project, create_user, create_vehicle, date, services};

#[tokio::test]
async fn vehicles_are_listed_by_designation() {
    let services = services();
    for (designation, inventory) in [("Teleskoplader", "F-2"), ("Minibagger", "F-1")] {
        services
            .fleet
            .create_vehicle(NewVehicle::new(
                designation,
                VehicleCategory::Other,
                inventory,
            ))
            .await
            .unwrap();
    }
    let designations: Vec<String> = services
        .fleet
        .list_vehicles()
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.designation)
        .collect();
    assert_eq!(designations, vec!["Minibagger", "Teleskoplader"]);
}

#[tokio::test]
async fn vehicle_create_then_get_and_partial_update() {
    let services = services();
    let vehicle = create_vehicle(&services, "F-10").await;
    assert_eq!(vehicle.status, VehicleStatus::Available);
    assert_eq!(
        services.fleet.get_vehicle(vehicle.id).await.unwrap(),
        Some(vehicle.clone())
    );

    let updated = services
        .fleet
        .update_vehicle(
            vehicle.id,
            VehiclePatch {
                status: Some(VehicleStatus::InMaintenance),
                inspected_until: Some("09/2026".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, VehicleStatus::InMaintenance);
    assert_eq!(updated.designation, vehicle.designation);
    assert_eq!(updated.inspected_until.as_deref(), Some("09/2026"));
}

#[tokio::test]
async fn first_reservation_reserves_vehicle_second_leaves_it() {
    let services = services();
    let vehicle = create_vehicle(&services, "F-10").await;
    let session = Session::anonymous();

    services
        .fleet
        .create_reservation(&session, NewReservation::new(vehicle.id, date(2025, 5, 5)))
        .await
        .unwrap();
    let after_first = services.fleet.get_vehicle(vehicle.id).await.unwrap().unwrap();
    assert_eq!(after_first.status, VehicleStatus::Reserved);

    // Overlapping on purpose: double bookings are accepted.
    services
        .fleet
        .create_reservation(&session, NewReservation::new(vehicle.id, date(2025, 5, 6)))
        .await
        .unwrap();
    let after_second = services.fleet.get_vehicle(vehicle.id).await.unwrap().unwrap();
    assert_eq!(after_second, after_first);
    assert_eq!(
        services
            .fleet
            .reservations_for_vehicle(vehicle.id)
            .await
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn reservation_for_unknown_vehicle_writes_nothing() {
    let services = services();
    let err = services
        .fleet
        .create_reservation(
            &Session::anonymous(),
            NewReservation::new(DbId::new_v4(), date(2025, 5, 5)),
        )
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::Store(ref e) if e.is_foreign_key_violation());
    assert!(services.fleet.list_reservations().await.unwrap().is_empty());
}

#[tokio::test]
async fn inverted_date_range_is_rejected() {
    let services = services();
    let vehicle = create_vehicle(&services, "F-10").await;
    let mut input = NewReservation::new(vehicle.id, date(2025, 5, 9));
    input.ends_on = Some(date(2025, 5, 5));

    let err = services
        .fleet
        .create_reservation(&Session::anonymous(), input)
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::Core(CoreError::Validation(_)));
    let vehicle = services.fleet.get_vehicle(vehicle.id).await.unwrap().unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Available);
}

#[tokio::test]
async fn same_day_reservation_is_valid() {
    let services = services();
    let vehicle = create_vehicle(&services, "F-10").await;
    let mut input = NewReservation::new(vehicle.id, date(2025, 5, 9));
    input.ends_on = Some(date(2025, 5, 9));
    let reservation = services
        .fleet
        .create_reservation(&Session::anonymous(), input)
        .await
        .unwrap();
    assert_eq!(reservation.ends_on, Some(date(2025, 5, 9)));
}

#[tokio::test]
async fn session_supplies_project_and_actor() {
    let services = services();
    let project = create_project(&services, "2025-040").await;
    let user = create_user(&services, "Nina", "Frei").await;
    let vehicle = create_vehicle(&services, "F-10").await;
    let session = Session::anonymous()
        .with_user(user)
        .with_project(project.clone());

    let reservation = services
        .fleet
        .create_reservation(&session, NewReservation::new(vehicle.id, date(2025, 5, 5)))
        .await
        .unwrap();
    assert_eq!(reservation.project_id, Some(project.id));
    assert_eq!(reservation.reserved_by.as_deref(), Some("Nina Frei"));

    let mut explicit = NewReservation::new(vehicle.id, date(2025, 6, 2));
    explicit.reserved_by = Some("Disposition".to_string());
    let reservation = services
        .fleet
        .create_reservation(&session, explicit)
        .await
        .unwrap();
    assert_eq!(reservation.reserved_by.as_deref(), Some("Disposition"));

    let for_project = services
        .fleet
        .reservations_for_project(project.id)
        .await
        .unwrap();
    assert_eq!(for_project.len(), 2);
}

#[tokio::test]
async fn update_checks_range_against_stored_dates() {
    let services = services();
    let vehicle = create_vehicle(&services, "F-10").await;
    let mut input = NewReservation::new(vehicle.id, date(2025, 5, 5));
    input.ends_on = Some(date(2025, 5, 9));
    let reservation = services
        .fleet
        .create_reservation(&Session::anonymous(), input)
        .await
        .unwrap();

    let err = services
        .fleet
        .update_reservation(
            reservation.id,
            ReservationPatch {
                starts_on: Some(date(2025, 5, 12)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::Core(CoreError::Validation(_)));

    let moved = services
        .fleet
        .update_reservation(
            reservation.id,
            ReservationPatch {
                ends_on: Some(date(2025, 5, 16)),
                site: Some("Schulhaus Gossau".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.starts_on, date(2025, 5, 5));
    assert_eq!(moved.ends_on, Some(date(2025, 5, 16)));
    assert_eq!(moved.site.as_deref(), Some("Schulhaus Gossau"));

    let err = services
        .fleet
        .update_reservation(DbId::new_v4(), ReservationPatch::default())
        .await
        .unwrap_err();
    assert_matches!(
        err,
        ServiceError::Core(CoreError::NotFound { entity: "Reservation", .. })
    );
}

#[tokio::test]
async fn deleting_missing_reservation_does_not_fail() {
    let services = services();
    services
        .fleet
        .delete_reservation(DbId::new_v4())
        .await
        .unwrap();
}

#[tokio::test]
async fn deleting_reservation_keeps_vehicle_status() {
    let services = services();
    let vehicle = create_vehicle(&services, "F-10").await;
    let reservation = services
        .fleet
        .create_reservation(
            &Session::anonymous(),
            NewReservation::new(vehicle.id, date(2025, 5, 5)),
        )
        .await
        .unwrap();

    services.fleet.delete_reservation(reservation.id).await.unwrap();
    assert_eq!(services.fleet.get_reservation(reservation.id).await.unwrap(), None);
    let vehicle = services.fleet.get_vehicle(vehicle.id).await.unwrap().unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Reserved);
}

#[tokio::test]
async fn deleting_vehicle_removes_its_reservations() {
    let services = services();
    let vehicle = create_vehicle(&services, "F-10").await;
    services
        .fleet
        .create_reservation(
            &Session::anonymous(),
            NewReservation::new(vehicle.id, date(2025, 5, 5)),
        )
        .await
        .unwrap();

    services.fleet.delete_vehicle(vehicle.id).await.unwrap();
    assert!(services.fleet.list_reservations().await.unwrap().is_empty());
}
