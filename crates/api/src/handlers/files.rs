//! Handlers for theme asset file records.
//!
//! Referential existence of the owning theme is checked here at read and
//! create time (the schema carries no cascading constraints).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use skinsmith_db::models::theme_file::{CreateThemeFile, UpdateThemeFile};
use skinsmith_db::repositories::{ThemeFileRepo, ThemeRepo};
use skinsmith_db::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub theme_id: DbId,
}

async fn ensure_theme_exists(state: &AppState, theme_id: DbId) -> AppResult<()> {
    ThemeRepo::find_by_id(&state.pool, theme_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Theme {theme_id} not found")))?;
    Ok(())
}

/// GET /api/v1/files?theme_id=
pub async fn list_files(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    ensure_theme_exists(&state, params.theme_id).await?;
    let files = ThemeFileRepo::list_by_theme(&state.pool, params.theme_id).await?;
    Ok(Json(DataResponse { data: files }))
}

/// POST /api/v1/files
pub async fn create_file(
    State(state): State<AppState>,
    Json(input): Json<CreateThemeFile>,
) -> AppResult<impl IntoResponse> {
    if input.file_path.is_empty() {
        return Err(AppError::BadRequest("file_path must not be empty".into()));
    }
    ensure_theme_exists(&state, input.theme_id).await?;

    let file = ThemeFileRepo::create(&state.pool, &input).await?;

    tracing::info!(file_id = file.id, theme_id = file.theme_id, "Theme file created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: file })))
}

/// GET /api/v1/files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    Path(file_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let file = ThemeFileRepo::find_by_id(&state.pool, file_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("File {file_id} not found")))?;

    Ok(Json(DataResponse { data: file }))
}

/// PUT /api/v1/files/{id}
pub async fn update_file(
    State(state): State<AppState>,
    Path(file_id): Path<DbId>,
    Json(input): Json<UpdateThemeFile>,
) -> AppResult<impl IntoResponse> {
    let file = ThemeFileRepo::update(&state.pool, file_id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("File {file_id} not found")))?;

    tracing::info!(file_id, "Theme file updated");

    Ok(Json(DataResponse { data: file }))
}

/// DELETE /api/v1/files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    Path(file_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ThemeFileRepo::delete(&state.pool, file_id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!("File {file_id} not found")));
    }

    tracing::info!(file_id, "Theme file deleted");

    Ok(StatusCode::NO_CONTENT)
}
