//! HTTP-level integration tests for theme and theme file record endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json, TestEnv};
use sqlx::SqlitePool;

fn dracula() -> serde_json::Value {
    serde_json::json!({
        "name": "Dracula",
        "description": "Dark purple theme",
        "author": "spooky",
        "version": "1.0.0"
    })
}

// ---------------------------------------------------------------------------
// Theme record CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_theme_returns_201(pool: SqlitePool) {
    let env = TestEnv::new();
    let app = common::build_test_app(pool, &env);
    let response = post_json(app, "/api/v1/themes", dracula()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Dracula");
    assert_eq!(json["data"]["is_active"], false);
    assert!(json["data"]["id"].is_number());
    assert!(json["data"]["created_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_duplicate_name_returns_400(pool: SqlitePool) {
    let env = TestEnv::new();
    let app = common::build_test_app(pool.clone(), &env);
    let response = post_json(app, "/api/v1/themes", dracula()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool, &env);
    let response = post_json(app, "/api/v1/themes", dracula()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("already exists"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_empty_name_returns_400(pool: SqlitePool) {
    let env = TestEnv::new();
    let app = common::build_test_app(pool, &env);
    let response = post_json(
        app,
        "/api/v1/themes",
        serde_json::json!({"name": "", "author": "x", "version": "1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_theme_by_id(pool: SqlitePool) {
    let env = TestEnv::new();
    let app = common::build_test_app(pool.clone(), &env);
    let created = body_json(post_json(app, "/api/v1/themes", dracula()).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool, &env);
    let response = get(app, &format!("/api/v1/themes/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Dracula");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_theme_returns_404(pool: SqlitePool) {
    let env = TestEnv::new();
    let app = common::build_test_app(pool, &env);
    let response = get(app, "/api/v1/themes/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_theme_is_partial(pool: SqlitePool) {
    let env = TestEnv::new();
    let app = common::build_test_app(pool.clone(), &env);
    let created = body_json(post_json(app, "/api/v1/themes", dracula()).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool, &env);
    let response = put_json(
        app,
        &format!("/api/v1/themes/{id}"),
        serde_json::json!({"version": "2.0.0", "is_active": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    // Untouched fields survive the patch.
    assert_eq!(json["data"]["name"], "Dracula");
    assert_eq!(json["data"]["author"], "spooky");
    assert_eq!(json["data"]["version"], "2.0.0");
    assert_eq!(json["data"]["is_active"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_to_taken_name_returns_400(pool: SqlitePool) {
    let env = TestEnv::new();
    let app = common::build_test_app(pool.clone(), &env);
    body_json(post_json(app, "/api/v1/themes", dracula()).await).await;

    let app = common::build_test_app(pool.clone(), &env);
    let other = body_json(
        post_json(
            app,
            "/api/v1/themes",
            serde_json::json!({"name": "Nord", "author": "arctic", "version": "1.0.0"}),
        )
        .await,
    )
    .await;
    let other_id = other["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool, &env);
    let response = put_json(
        app,
        &format!("/api/v1/themes/{other_id}"),
        serde_json::json!({"name": "Dracula"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_theme_returns_204(pool: SqlitePool) {
    let env = TestEnv::new();
    let app = common::build_test_app(pool.clone(), &env);
    let created = body_json(post_json(app, "/api/v1/themes", dracula()).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone(), &env);
    let response = delete(app, &format!("/api/v1/themes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(pool, &env);
    let response = get(app, &format!("/api/v1/themes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_themes_with_pagination(pool: SqlitePool) {
    for i in 0..3 {
        let app = common::build_test_app(pool.clone(), &TestEnv::new());
        post_json(
            app,
            "/api/v1/themes",
            serde_json::json!({"name": format!("T{i}"), "author": "a", "version": "1"}),
        )
        .await;
    }

    let env = TestEnv::new();
    let app = common::build_test_app(pool.clone(), &env);
    let response = get(app, "/api/v1/themes").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);

    let app = common::build_test_app(pool, &env);
    let response = get(app, "/api/v1/themes?skip=1&limit=1").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Theme file CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_file_crud_under_theme(pool: SqlitePool) {
    let env = TestEnv::new();
    let app = common::build_test_app(pool.clone(), &env);
    let theme = body_json(post_json(app, "/api/v1/themes", dracula()).await).await;
    let theme_id = theme["data"]["id"].as_i64().unwrap();

    // POST /api/v1/files
    let app = common::build_test_app(pool.clone(), &env);
    let response = post_json(
        app,
        "/api/v1/files",
        serde_json::json!({
            "theme_id": theme_id,
            "file_path": "webkit.css",
            "file_type": "css",
            "content": "body { background: #282a36; }"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let file = body_json(response).await;
    let file_id = file["data"]["id"].as_i64().unwrap();
    assert_eq!(file["data"]["theme_id"], theme_id);

    // GET /api/v1/files/{id}
    let app = common::build_test_app(pool.clone(), &env);
    let response = get(app, &format!("/api/v1/files/{file_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // PUT /api/v1/files/{id} updates content only.
    let app = common::build_test_app(pool.clone(), &env);
    let response = put_json(
        app,
        &format!("/api/v1/files/{file_id}"),
        serde_json::json!({"content": "body { background: #000; }"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["file_path"], "webkit.css");
    assert_eq!(json["data"]["content"], "body { background: #000; }");

    // GET /api/v1/files?theme_id= (list)
    let app = common::build_test_app(pool.clone(), &env);
    let response = get(app, &format!("/api/v1/files?theme_id={theme_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    // DELETE
    let app = common::build_test_app(pool.clone(), &env);
    let response = delete(app, &format!("/api/v1/files/{file_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // After delete, GET should 404.
    let app = common::build_test_app(pool, &env);
    let response = get(app, &format!("/api/v1/files/{file_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_file_for_missing_theme_returns_404(pool: SqlitePool) {
    let env = TestEnv::new();
    let app = common::build_test_app(pool, &env);
    let response = post_json(
        app,
        "/api/v1/files",
        serde_json::json!({
            "theme_id": 999999,
            "file_path": "webkit.css",
            "file_type": "css",
            "content": ""
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
