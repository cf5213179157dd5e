//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use campus_api::error::AppError;
use campus_core::error::CoreError;
use http_body_util::BodyExt;
use serde_json::json;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_maps_to_404_with_entity_message() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Questão",
        id: 999_999,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"mensagem": "Questão não encontrada"}));
}

#[tokio::test]
async fn missing_fields_map_to_400_listing_required_fields() {
    let err = AppError::Core(CoreError::MissingFields {
        required: vec!["titulo", "categoria"],
        missing: vec!["categoria"],
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["erro"], "Dados inválidos");
    assert_eq!(json["mensagem"], "Todos os campos (titulo, categoria) são obrigatórios.");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let err = AppError::Core(CoreError::Validation("dataExpiracao inválida".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["mensagem"], "dataExpiracao inválida");
}

#[tokio::test]
async fn bad_request_maps_to_400_with_invalid_data_envelope() {
    let err = AppError::BadRequest("Failed to parse the request body as JSON".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({
            "erro": "Dados inválidos",
            "mensagem": "Failed to parse the request body as JSON"
        })
    );
}

#[tokio::test]
async fn database_error_is_sanitized() {
    let err = AppError::Database(sqlx::Error::Protocol("password authentication failed".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"erro": "Erro interno do servidor"}));
}

#[tokio::test]
async fn internal_core_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("secret detail".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json.to_string().contains("secret"));
}

#[tokio::test]
async fn database_error_with_message_keeps_only_the_message() {
    let err = AppError::with_message("Não foi possível buscar as questões")(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        json!({
            "erro": "Erro interno do servidor",
            "mensagem": "Não foi possível buscar as questões"
        })
    );
}
