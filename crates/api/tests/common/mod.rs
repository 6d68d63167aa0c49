//! Shared harness for the HTTP integration tests.
//!
//! Builds the full application router against a temporary theme store
//! and a fake Steam installation, mirroring the construction in
//! `main.rs` so tests exercise the same middleware stack (CORS, request
//! ID, timeout, tracing, panic recovery) that production uses.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use skinsmith_api::config::ServerConfig;
use skinsmith_api::routes;
use skinsmith_api::state::{AppState, MillenniumState};
use skinsmith_api::ws::WsManager;
use skinsmith_core::steam::SteamEnv;
use skinsmith_core::store::ThemeStore;

/// Temporary directories backing a test application.
///
/// Keep this alive for the duration of the test; dropping it removes the
/// theme store, the fake Steam root, and the export directory.
pub struct TestEnv {
    pub themes: TempDir,
    pub steam: TempDir,
    pub exports: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            themes: tempfile::tempdir().unwrap(),
            steam: tempfile::tempdir().unwrap(),
            exports: tempfile::tempdir().unwrap(),
        };
        // Give the fake Steam root a real layout so apply/preview work.
        SteamEnv::at(env.steam.path()).initialize().unwrap();
        env
    }

    /// The environment as the engine sees it.
    pub fn steam_env(&self) -> SteamEnv {
        SteamEnv::at(self.steam.path())
    }
}

/// Build a test `ServerConfig` pointing at the temporary directories.
pub fn test_config(env: &TestEnv) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        themes_dir: env.themes.path().to_path_buf(),
        exports_dir: env.exports.path().to_path_buf(),
        steam_path: Some(env.steam.path().to_path_buf()),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and temporary directories.
pub fn build_test_app(pool: SqlitePool, env: &TestEnv) -> Router {
    let config = test_config(env);
    let store = Arc::new(ThemeStore::new(config.themes_dir.clone()).unwrap());
    let millennium = Some(MillenniumState::new(env.steam_env()));
    let ws_manager = Arc::new(WsManager::new());

    let state = AppState {
        pool,
        config: Arc::new(config),
        store,
        millennium,
        ws_manager,
    };

    build_router(state)
}

/// Same as [`build_test_app`] but without a Steam installation, for
/// exercising the `ENVIRONMENT_NOT_FOUND` paths.
pub fn build_test_app_without_steam(pool: SqlitePool, env: &TestEnv) -> Router {
    let config = test_config(env);
    let store = Arc::new(ThemeStore::new(config.themes_dir.clone()).unwrap());
    let ws_manager = Arc::new(WsManager::new());

    let state = AppState {
        pool,
        config: Arc::new(config),
        store,
        millennium: None,
        ws_manager,
    };

    build_router(state)
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
