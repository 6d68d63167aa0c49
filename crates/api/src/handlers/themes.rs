//! Handlers for theme records (the relational side of the studio).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use skinsmith_db::models::theme::{CreateTheme, UpdateTheme};
use skinsmith_db::repositories::ThemeRepo;
use skinsmith_db::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Pagination query for theme listings.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// GET /api/v1/themes
pub async fn list_themes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let themes = ThemeRepo::list(&state.pool, params.limit, params.skip).await?;
    Ok(Json(DataResponse { data: themes }))
}

/// POST /api/v1/themes
///
/// Duplicate names are a business error (400), checked by lookup before
/// the insert; the unique index is the backstop.
pub async fn create_theme(
    State(state): State<AppState>,
    Json(input): Json<CreateTheme>,
) -> AppResult<impl IntoResponse> {
    if input.name.is_empty() {
        return Err(AppError::BadRequest("Theme name must not be empty".into()));
    }
    if ThemeRepo::find_by_name(&state.pool, &input.name)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest(format!(
            "Theme name '{}' already exists",
            input.name
        )));
    }

    let theme = ThemeRepo::create(&state.pool, &input).await?;

    tracing::info!(theme_id = theme.id, name = %theme.name, "Theme record created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: theme })))
}

/// GET /api/v1/themes/{id}
pub async fn get_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let theme = ThemeRepo::find_by_id(&state.pool, theme_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Theme {theme_id} not found")))?;

    Ok(Json(DataResponse { data: theme }))
}

/// PUT /api/v1/themes/{id}
pub async fn update_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
    Json(input): Json<UpdateTheme>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        if let Some(existing) = ThemeRepo::find_by_name(&state.pool, name).await? {
            if existing.id != theme_id {
                return Err(AppError::BadRequest(format!(
                    "Theme name '{name}' already exists"
                )));
            }
        }
    }

    let theme = ThemeRepo::update(&state.pool, theme_id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Theme {theme_id} not found")))?;

    tracing::info!(theme_id, "Theme record updated");

    Ok(Json(DataResponse { data: theme }))
}

/// DELETE /api/v1/themes/{id}
pub async fn delete_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ThemeRepo::delete(&state.pool, theme_id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!("Theme {theme_id} not found")));
    }

    tracing::info!(theme_id, "Theme record deleted");

    Ok(StatusCode::NO_CONTENT)
}
