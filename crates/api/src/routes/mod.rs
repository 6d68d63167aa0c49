pub mod files;
pub mod health;
pub mod millennium;
pub mod themes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /themes                                   theme records (DB)
/// /themes/{id}                              get, update, delete
///
/// /files                                    theme asset files (DB)
/// /files/{id}                               get, update, delete
///
/// /millennium/initialize                    prepare Steam dirs (POST)
/// /millennium/active-theme                  current SteamTheme leaf (GET)
/// /millennium/themes                        disk themes: list, create
/// /millennium/themes/import                 import archive (POST)
/// /millennium/themes/{name}                 get, update, delete
/// /millennium/themes/{name}/apply           apply (POST)
/// /millennium/themes/{name}/export          export archive (POST)
/// /millennium/themes/{name}/preview         start (POST), stop (DELETE)
/// /millennium/themes/{name}/preview/ws      live-update WebSocket
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/themes", themes::router())
        .nest("/files", files::router())
        .nest("/millennium", millennium::router())
}
