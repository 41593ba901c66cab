//! HTTP-level tests for suppliers and user profiles.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_position, create_project, create_subsystem, data, delete, get, post_json,
    put_json,
};
use serde_json::json;

#[tokio::test]
async fn supplier_crud() {
    let app = common::build_test_app();

    let response = post_json(
        &app,
        "/api/v1/suppliers",
        json!({ "name": "Jansen AG", "email": "info@jansen.test" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = data(response).await["id"].as_str().unwrap().to_string();

    let response = put_json(
        &app,
        &format!("/api/v1/suppliers/{id}"),
        json!({ "phone": "+41 81 000 00 00" }),
    )
    .await;
    let supplier = data(response).await;
    assert_eq!(supplier["name"], "Jansen AG");
    assert_eq!(supplier["phone"], "+41 81 000 00 00");

    let suppliers = data(get(&app, "/api/v1/suppliers").await).await;
    assert_eq!(suppliers.as_array().unwrap().len(), 1);

    let response = delete(&app, &format!("/api/v1/suppliers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(&app, &format!("/api/v1/suppliers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_supplier_email_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/suppliers",
        json!({ "name": "Jansen AG", "email": "keine-adresse" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn deleting_supplier_keeps_its_material() {
    let app = common::build_test_app();
    let project = create_project(&app, "2025-300").await;
    let subsystem = create_subsystem(&app, &project, "Fenster").await;
    let position = create_position(&app, &subsystem, "Beschläge").await;

    let response = post_json(&app, "/api/v1/suppliers", json!({ "name": "Schüco" })).await;
    let supplier = data(response).await["id"].as_str().unwrap().to_string();

    let response = post_json(
        &app,
        &format!("/api/v1/positions/{position}/material"),
        json!({ "name": "Dreh-Kipp-Beschlag", "supplierId": supplier }),
    )
    .await;
    assert_eq!(data(response).await["supplierId"], supplier.as_str());

    delete(&app, &format!("/api/v1/suppliers/{supplier}")).await;

    let material = data(get(&app, &format!("/api/v1/positions/{position}/material")).await).await;
    assert_eq!(material.as_array().unwrap().len(), 1);
    assert!(material[0].get("supplierId").is_none());
}

#[tokio::test]
async fn profile_crud() {
    let app = common::build_test_app();
    let id = "0d6b1f8a-3c2e-4b7d-8f90-1a2b3c4d5e6f";

    let response = post_json(
        &app,
        "/api/v1/profiles",
        json!({ "id": id, "firstName": "Reto", "email": "reto@bau.test" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let profile = data(response).await;
    assert_eq!(profile["id"], id);
    assert_eq!(profile["role"], "mitarbeiter");

    let response = put_json(
        &app,
        &format!("/api/v1/profiles/{id}"),
        json!({ "role": "projektleiter", "department": "Metallbau" }),
    )
    .await;
    let profile = data(response).await;
    assert_eq!(profile["role"], "projektleiter");
    assert_eq!(profile["firstName"], "Reto");

    let response = delete(&app, &format!("/api/v1/profiles/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let profiles = data(get(&app, "/api/v1/profiles").await).await;
    assert!(profiles.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_role_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/profiles",
        json!({ "id": "0d6b1f8a-3c2e-4b7d-8f90-1a2b3c4d5e6f", "role": "chef" }),
    )
    .await;
    assert!(response.status().is_client_error());
}
