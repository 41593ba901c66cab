#![allow(dead_code)]

use std::sync::Arc;

use bauhub_core::models::position::NewPosition;
use bauhub_core::models::project::{NewProject, Project};
use bauhub_core::models::subsystem::NewSubsystem;
use bauhub_core::models::user::{NewUser, User};
use bauhub_core::models::vehicle::{NewVehicle, Vehicle};
use bauhub_core::status::VehicleCategory;
use bauhub_core::types::{Date, DbId};
use bauhub_db::MemoryStore;
use bauhub_services::Services;
use chrono::NaiveDate;

/// Services over a fresh, empty in-memory store.
pub fn services() -> Services {
    Services::new(Arc::new(MemoryStore::new()))
}

pub fn date(y: i32, m: u32, d: u32) -> Date {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn new_project(number: &str) -> NewProject {
    NewProject {
        number: number.to_string(),
        name: format!("Überbauung {number}"),
        city: "St. Gallen".to_string(),
        canton: "SG".to_string(),
        ..Default::default()
    }
}

pub async fn create_project(services: &Services, number: &str) -> Project {
    services.projects.create(new_project(number)).await.unwrap()
}

pub fn new_subsystem(name: &str) -> NewSubsystem {
    NewSubsystem {
        name: name.to_string(),
        ..Default::default()
    }
}

pub fn new_position(name: &str) -> NewPosition {
    NewPosition {
        name: name.to_string(),
        quantity: 4.0,
        unit: "Stk".to_string(),
        ..Default::default()
    }
}

pub async fn create_vehicle(services: &Services, inventory_number: &str) -> Vehicle {
    services
        .fleet
        .create_vehicle(NewVehicle::new(
            format!("Scherenbühne {inventory_number}"),
            VehicleCategory::ScissorLift,
            inventory_number.to_string(),
        ))
        .await
        .unwrap()
}

pub async fn create_user(services: &Services, first: &str, last: &str) -> User {
    services
        .profiles
        .create(NewUser {
            id: DbId::new_v4(),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            email: None,
            department: None,
            role: None,
            avatar_url: None,
        })
        .await
        .unwrap()
}
