#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use bauhub_api::config::{ServerConfig, StoreBackend};
use bauhub_api::router::build_app_router;
use bauhub_api::state::AppState;
use bauhub_db::MemoryStore;
use bauhub_services::Services;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// The router is cheap to clone and every clone shares the same store, so
/// a test can issue several requests against one dataset.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        services: Services::new(Arc::new(MemoryStore::new())),
        config: Arc::new(config.clone()),
        pool: None,
    };
    build_app_router(state, &config)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    headers: &[(&str, String)],
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, value.as_str());
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, &[]).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), &[]).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), &[]).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, &[]).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `data` member of a successful response.
pub async fn data(response: Response<Body>) -> Value {
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn project_body(number: &str) -> Value {
    json!({
        "number": number,
        "name": format!("Projekt {number}"),
        "city": "Chur",
        "canton": "GR",
    })
}

pub async fn create_project(app: &Router, number: &str) -> String {
    let response = post_json(app, "/api/v1/projects", project_body(number)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    id_of(data(response).await)
}

pub async fn create_subsystem(app: &Router, project_id: &str, name: &str) -> String {
    let response = post_json(
        app,
        &format!("/api/v1/projects/{project_id}/subsystems"),
        json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    id_of(data(response).await)
}

pub async fn create_position(app: &Router, subsystem_id: &str, name: &str) -> String {
    let response = post_json(
        app,
        &format!("/api/v1/subsystems/{subsystem_id}/positions"),
        json!({ "name": name, "quantity": 2.5, "unit": "m" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    id_of(data(response).await)
}

pub async fn create_vehicle(app: &Router, inventory_number: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/vehicles",
        json!({
            "designation": "Genie GS-1932",
            "category": "scherenbuehne",
            "inventoryNumber": inventory_number,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    id_of(data(response).await)
}

pub fn id_of(value: Value) -> String {
    value["id"].as_str().unwrap().to_string()
}
