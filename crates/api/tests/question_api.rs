//! HTTP-level integration tests for the `/questoes` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete, get, post_json, put_json, send_raw};
use serde_json::json;
use sqlx::PgPool;

fn arithmetic() -> serde_json::Value {
    json!({
        "enunciado": "2+2?",
        "disciplina": "Math",
        "tema": "Arithmetic",
        "nivel": "easy"
    })
}

async fn create_question(pool: &PgPool) -> i64 {
    let response = post_json(common::build_test_app(pool.clone()), "/questoes", arithmetic()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn row_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM questoes")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/schema")]
async fn create_returns_201_with_message(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/questoes", arithmetic()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["mensagem"], "Questão criada com sucesso!");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/schema")]
async fn create_then_get_round_trips(pool: PgPool) {
    let id = create_question(&pool).await;

    let response = get(common::build_test_app(pool), &format!("/questoes/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], id);
    assert_eq!(rows[0]["enunciado"], "2+2?");
    assert_eq!(rows[0]["disciplina"], "Math");
    assert_eq!(rows[0]["tema"], "Arithmetic");
    assert_eq!(rows[0]["nivel"], "easy");
}

#[sqlx::test(migrations = "../../db/schema")]
async fn create_with_missing_or_empty_field_returns_400(pool: PgPool) {
    let mut body = arithmetic();
    body["tema"] = json!("");
    body.as_object_mut().unwrap().remove("nivel");

    let response = post_json(common::build_test_app(pool.clone()), "/questoes", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["erro"], "Dados inválidos");
    assert_eq!(
        json["mensagem"],
        "Todos os campos (enunciado, disciplina, tema, nivel) são obrigatórios."
    );
    assert_eq!(row_count(&pool).await, 0);
}

#[tokio::test]
async fn create_with_missing_field_never_touches_the_database() {
    // The provider cannot even build a pool, so a database access would be a 500.
    let app = common::build_broken_app("not a connection string");
    let response = post_json(app, "/questoes", json!({"enunciado": "2+2?"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// List / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/schema")]
async fn list_returns_all_rows(pool: PgPool) {
    create_question(&pool).await;
    create_question(&pool).await;

    let response = get(common::build_test_app(pool), "/questoes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/schema")]
async fn get_nonexistent_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/questoes/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["mensagem"], "Questão não encontrada");
}

#[sqlx::test(migrations = "../../db/schema")]
async fn non_numeric_id_is_rejected(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/questoes/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["erro"], "Dados inválidos");
}

#[sqlx::test(migrations = "../../db/schema")]
async fn serial_int4_table_serves_create_and_get(pool: PgPool) {
    sqlx::query("ALTER TABLE questoes ALTER COLUMN id TYPE INT4")
        .execute(&pool)
        .await
        .unwrap();

    let id = create_question(&pool).await;
    let response = get(common::build_test_app(pool), &format!("/questoes/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await[0]["id"], id);
}

// ---------------------------------------------------------------------------
// Malformed requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_without_body_or_content_type_returns_400() {
    let app = common::build_broken_app("not a connection string");
    let response = send_raw(app, Method::POST, "/questoes", None, "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["erro"], "Dados inválidos");
    assert!(json["mensagem"].as_str().unwrap().contains("Content-Type"));
}

#[tokio::test]
async fn create_with_malformed_json_returns_400() {
    let app = common::build_broken_app("not a connection string");
    let response = send_raw(
        app,
        Method::POST,
        "/questoes",
        Some("application/json"),
        "{\"enunciado\": ",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["erro"], "Dados inválidos");
}

#[tokio::test]
async fn create_with_wrongly_typed_field_returns_400() {
    let mut body = arithmetic();
    body["nivel"] = json!(1);

    let app = common::build_broken_app("not a connection string");
    let response = post_json(app, "/questoes", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["erro"], "Dados inválidos");
    assert!(json["mensagem"].as_str().unwrap().contains("nivel"));
}

#[tokio::test]
async fn update_with_wrongly_typed_field_returns_400() {
    let app = common::build_broken_app("not a connection string");
    let response = put_json(app, "/questoes/1", json!({"tema": ["a", "b"]})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["erro"], "Dados inválidos");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/schema")]
async fn partial_update_keeps_omitted_fields(pool: PgPool) {
    let id = create_question(&pool).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/questoes/{id}"),
        json!({"nivel": "hard", "tema": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["mensagem"], "Questão atualizada com sucesso!");

    let json = body_json(get(common::build_test_app(pool), &format!("/questoes/{id}")).await).await;
    assert_eq!(json[0]["nivel"], "hard");
    assert_eq!(json[0]["tema"], "Arithmetic");
    assert_eq!(json[0]["enunciado"], "2+2?");
}

#[sqlx::test(migrations = "../../db/schema")]
async fn resubmitting_stored_values_is_a_no_op(pool: PgPool) {
    let id = create_question(&pool).await;
    let uri = format!("/questoes/{id}");
    let before = body_json(get(common::build_test_app(pool.clone()), &uri).await).await;

    let response = put_json(common::build_test_app(pool.clone()), &uri, arithmetic()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let after = body_json(get(common::build_test_app(pool), &uri).await).await;
    assert_eq!(before, after);
}

#[sqlx::test(migrations = "../../db/schema")]
async fn update_nonexistent_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool.clone()),
        "/questoes/999999",
        json!({"nivel": "hard"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(row_count(&pool).await, 0);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/schema")]
async fn delete_then_get_returns_404(pool: PgPool) {
    let id = create_question(&pool).await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/questoes/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["mensagem"], "Questão excluida com sucesso!!");

    let response = get(common::build_test_app(pool), &format!("/questoes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/schema")]
async fn concurrent_deletes_yield_one_success(pool: PgPool) {
    let id = create_question(&pool).await;
    let uri = format!("/questoes/{id}");

    let (a, b) = tokio::join!(
        delete(common::build_test_app(pool.clone()), &uri),
        delete(common::build_test_app(pool.clone()), &uri)
    );
    let mut statuses = vec![a.status().as_u16(), b.status().as_u16()];
    statuses.sort_unstable();

    assert_eq!(statuses, vec![200, 404]);
}
