//! Handlers for the on-disk theme store and the Steam lifecycle:
//! initialize, disk theme CRUD, apply, export/import, and preview
//! start/stop.
//!
//! Archive and recursive-copy operations run under `spawn_blocking`;
//! single-file reads and writes are cheap enough to stay inline.

use std::path::PathBuf;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use skinsmith_core::error::CoreError;
use skinsmith_core::manifest::Manifest;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, StatusResponse};
use crate::state::AppState;

/// Run a blocking filesystem operation off the async runtime.
async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> Result<T, CoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::InternalError(format!("blocking task failed: {e}")))?
        .map_err(AppError::from)
}

/// POST /api/v1/millennium/initialize
///
/// Prepare the Steam installation for theming. Answers 500 with
/// `ENVIRONMENT_NOT_FOUND` when no installation was discovered.
pub async fn initialize(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let millennium = state.millennium()?;
    let env = (*millennium.env).clone();
    run_blocking(move || env.initialize()).await?;
    Ok(Json(StatusResponse::success("Millennium initialized")))
}

/// GET /api/v1/millennium/active-theme
pub async fn active_theme(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let millennium = state.millennium()?;
    let name = millennium.engine.active_theme();
    Ok(Json(DataResponse { data: name }))
}

/// Request body for creating a disk theme.
#[derive(Debug, Deserialize)]
pub struct CreateDiskTheme {
    pub name: String,
    pub config: Manifest,
}

/// GET /api/v1/millennium/themes
pub async fn list_themes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let themes = state.store.list()?;
    Ok(Json(DataResponse { data: themes }))
}

/// POST /api/v1/millennium/themes
pub async fn create_theme(
    State(state): State<AppState>,
    Json(input): Json<CreateDiskTheme>,
) -> AppResult<impl IntoResponse> {
    state.store.create(&input.name, &input.config)?;
    let entry = state.store.read(&input.name)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// GET /api/v1/millennium/themes/{name}
pub async fn get_theme(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entry = state.store.read(&name)?;
    Ok(Json(DataResponse { data: entry }))
}

/// PUT /api/v1/millennium/themes/{name}
pub async fn update_theme(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(patch): Json<Manifest>,
) -> AppResult<impl IntoResponse> {
    let entry = state.store.update(&name, &patch)?;
    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/millennium/themes/{name}
///
/// Removes any active-skin copy first, best-effort: a failure there is
/// logged but never blocks the deletion of the theme itself.
pub async fn delete_theme(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    if let Some(millennium) = &state.millennium {
        if let Err(e) = millennium.engine.remove_by_name(&name) {
            tracing::warn!(theme = %name, error = %e, "Failed to remove active skin entry");
        }
    }
    state.store.delete(&name)?;
    Ok(Json(StatusResponse::success("Theme deleted")))
}

/// POST /api/v1/millennium/themes/{name}/apply
pub async fn apply_theme(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let millennium = state.millennium()?;
    let entry = state.store.read(&name)?;

    let engine = millennium.engine;
    run_blocking(move || engine.apply(&entry.path, false)).await?;

    tracing::info!(theme = %name, "Theme applied");
    Ok(Json(StatusResponse::success("Theme applied")))
}

/// POST /api/v1/millennium/themes/{name}/export
pub async fn export_theme(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.clone();
    let exports_dir = state.config.exports_dir.clone();
    let archive = run_blocking(move || store.export(&name, &exports_dir)).await?;
    Ok(Json(DataResponse { data: archive }))
}

/// Request body for importing a theme archive.
#[derive(Debug, Deserialize)]
pub struct ImportTheme {
    pub archive_path: PathBuf,
}

/// POST /api/v1/millennium/themes/import
pub async fn import_theme(
    State(state): State<AppState>,
    Json(input): Json<ImportTheme>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.clone();
    let name = run_blocking(move || store.import(&input.archive_path)).await?;
    Ok(Json(DataResponse { data: name }))
}

/// POST /api/v1/millennium/themes/{name}/preview
pub async fn start_preview(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let millennium = state.millennium()?;
    let entry = state.store.read(&name)?;

    millennium.preview.lock().await.start(&entry.path)?;

    tracing::info!(theme = %name, "Preview started");
    Ok(Json(StatusResponse::success("Preview started")))
}

/// DELETE /api/v1/millennium/themes/{name}/preview
///
/// Idempotent: stopping an inactive preview (or answering when no Steam
/// installation exists) is still a success.
pub async fn stop_preview(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    if let Some(millennium) = &state.millennium {
        millennium.preview.lock().await.stop();
    }
    tracing::info!(theme = %name, "Preview stopped");
    Ok(Json(StatusResponse::success("Preview stopped")))
}
