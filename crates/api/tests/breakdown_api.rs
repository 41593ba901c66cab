//! HTTP-level tests for subsystems, positions, material and the project
//! summary.

mod common;

use axum::http::StatusCode;
use common::{
    create_position, create_project, create_subsystem, data, delete, get, post_json, put_json,
};
use serde_json::json;

#[tokio::test]
async fn subsystems_are_listed_under_their_project() {
    let app = common::build_test_app();
    let project = create_project(&app, "2025-100").await;
    let other = create_project(&app, "2025-101").await;
    create_subsystem(&app, &project, "Fassade").await;
    create_subsystem(&app, &project, "Dach").await;
    create_subsystem(&app, &other, "Keller").await;

    let subsystems = data(get(&app, &format!("/api/v1/projects/{project}/subsystems")).await).await;
    let names: Vec<&str> = subsystems
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Dach", "Fassade"]);
    assert_eq!(subsystems[0]["projectId"], project.as_str());
    assert_eq!(subsystems[0]["status"], "offen");
}

#[tokio::test]
async fn subsystem_for_unknown_project_returns_409() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/projects/00000000-0000-0000-0000-000000000000/subsystems",
        json!({ "name": "Waise" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn subsystem_get_update_delete() {
    let app = common::build_test_app();
    let project = create_project(&app, "2025-102").await;
    let id = create_subsystem(&app, &project, "Treppenhaus").await;

    let response = put_json(
        &app,
        &format!("/api/v1/subsystems/{id}"),
        json!({ "status": "bestellt", "systemNumber": "TS-04" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let subsystem = data(get(&app, &format!("/api/v1/subsystems/{id}")).await).await;
    assert_eq!(subsystem["status"], "bestellt");
    assert_eq!(subsystem["systemNumber"], "TS-04");
    assert_eq!(subsystem["name"], "Treppenhaus");

    let response = delete(&app, &format!("/api/v1/subsystems/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(&app, &format!("/api/v1/subsystems/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn positions_and_material_round_trip() {
    let app = common::build_test_app();
    let project = create_project(&app, "2025-103").await;
    let subsystem = create_subsystem(&app, &project, "Geländer").await;
    let position = create_position(&app, &subsystem, "Handlauf").await;

    let positions = data(get(&app, &format!("/api/v1/subsystems/{subsystem}/positions")).await).await;
    assert_eq!(positions.as_array().unwrap().len(), 1);
    assert_eq!(positions[0]["quantity"], 2.5);
    assert_eq!(positions[0]["unit"], "m");

    let response = post_json(
        &app,
        &format!("/api/v1/positions/{position}/material"),
        json!({ "name": "Flachstahl 40x8", "articleNumber": "FS-408" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let material = data(response).await;
    assert_eq!(material["positionId"], position.as_str());
    let material_id = material["id"].as_str().unwrap().to_string();

    let response = put_json(
        &app,
        &format!("/api/v1/material/{material_id}"),
        json!({ "status": "geliefert" }),
    )
    .await;
    assert_eq!(data(response).await["status"], "geliefert");

    let response = put_json(
        &app,
        &format!("/api/v1/positions/{position}"),
        json!({ "quantity": 4.0 }),
    )
    .await;
    assert_eq!(data(response).await["quantity"], 4.0);

    let response = delete(&app, &format!("/api/v1/material/{material_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let material = data(get(&app, &format!("/api/v1/positions/{position}/material")).await).await;
    assert!(material.as_array().unwrap().is_empty());

    let response = delete(&app, &format!("/api/v1/positions/{position}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn summary_counts_the_whole_breakdown() {
    let app = common::build_test_app();
    let project = create_project(&app, "2025-104").await;

    for subsystem_name in ["Nord", "Süd"] {
        let subsystem = create_subsystem(&app, &project, subsystem_name).await;
        for position_name in ["A", "B", "C"] {
            let position = create_position(&app, &subsystem, position_name).await;
            let response = post_json(
                &app,
                &format!("/api/v1/positions/{position}/material"),
                json!({ "name": format!("Material {subsystem_name}{position_name}") }),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }
    }

    let response = get(&app, &format!("/api/v1/projects/{project}/summary")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let summary = data(response).await;
    assert_eq!(summary["projectId"], project.as_str());
    assert_eq!(summary["subsystemCount"], 2);
    assert_eq!(summary["positionCount"], 6);
    assert_eq!(summary["materialCount"], 6);

    let activity = summary["recentActivity"].as_array().unwrap();
    assert_eq!(activity.len(), 10);
    assert_eq!(activity[0]["kind"], "material_recorded");
    assert_eq!(activity[0]["targetName"], "Material SüdC");
}

#[tokio::test]
async fn summary_of_unknown_project_returns_404() {
    let app = common::build_test_app();
    let response = get(
        &app,
        "/api/v1/projects/00000000-0000-0000-0000-000000000000/summary",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_project_removes_its_breakdown() {
    let app = common::build_test_app();
    let project = create_project(&app, "2025-105").await;
    let subsystem = create_subsystem(&app, &project, "Balkone").await;
    let position = create_position(&app, &subsystem, "Platte").await;

    delete(&app, &format!("/api/v1/projects/{project}")).await;

    let response = get(&app, &format!("/api/v1/subsystems/{subsystem}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let positions = data(get(&app, &format!("/api/v1/subsystems/{subsystem}/positions")).await).await;
    assert!(positions.as_array().unwrap().is_empty());
    let material = data(get(&app, &format!("/api/v1/positions/{position}/material")).await).await;
    assert!(material.as_array().unwrap().is_empty());
}
