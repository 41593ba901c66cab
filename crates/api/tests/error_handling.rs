//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use bauhub_api::error::AppError;
use bauhub_core::error::CoreError;
use bauhub_db::StoreError;
use bauhub_services::ServiceError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: uuid_nil(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(
        json["error"],
        "Project with id 00000000-0000-0000-0000-000000000000 not found"
    );
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("name too short".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name too short");
}

#[tokio::test]
async fn internal_core_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal(
        "Unknown activity source 'lager'".into(),
    ));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn unique_violation_returns_409() {
    let err = AppError::from(ServiceError::Store(StoreError::UniqueViolation {
        constraint: "uq_fahrzeuge_inventarnummer",
    }));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(
        json["error"],
        "Duplicate value violates unique constraint: uq_fahrzeuge_inventarnummer"
    );
}

#[tokio::test]
async fn duplicate_primary_key_returns_409() {
    let err = AppError::Store(StoreError::UniqueViolation {
        constraint: "profiles_pkey",
    });
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        json["error"],
        "Duplicate value violates unique constraint: profiles_pkey"
    );
}

#[tokio::test]
async fn foreign_key_violation_returns_409() {
    let err = AppError::Store(StoreError::ForeignKey {
        table: "fahrzeug_reservierungen",
        column: "fahrzeug_id",
    });
    let (status, _) = error_to_response(err).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn not_null_violation_returns_400() {
    let err = AppError::Store(StoreError::NotNull {
        table: "fahrzeuge",
        column: "kategorie",
    });
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn sqlx_errors_are_sanitized() {
    let err = AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn bad_request_returns_400() {
    let err = AppError::BadRequest("x-user-id must be a UUID".into());
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

fn uuid_nil() -> bauhub_core::types::DbId {
    bauhub_core::types::DbId::nil()
}
