use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Whether a Steam installation was discovered at startup.
    pub steam_found: bool,
}

/// GET /health -- returns service, database, and Steam discovery health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = skinsmith_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        steam_found: state.millennium.is_some(),
    })
}

/// GET /health/ping -- trivial liveness probe.
async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ping": "pong" }))
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ping", get(ping))
}
