//! Route definitions for the disk theme store and the Steam lifecycle.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::millennium;
use crate::state::AppState;
use crate::ws;

/// Millennium routes mounted at `/millennium`.
///
/// ```text
/// POST   /initialize                   -> initialize
/// GET    /active-theme                 -> active_theme
/// GET    /themes                       -> list_themes
/// POST   /themes                       -> create_theme
/// POST   /themes/import                -> import_theme
/// GET    /themes/{name}                -> get_theme
/// PUT    /themes/{name}                -> update_theme
/// DELETE /themes/{name}                -> delete_theme
/// POST   /themes/{name}/apply          -> apply_theme
/// POST   /themes/{name}/export         -> export_theme
/// POST   /themes/{name}/preview        -> start_preview
/// DELETE /themes/{name}/preview        -> stop_preview
/// GET    /themes/{name}/preview/ws     -> live-update WebSocket
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/initialize", post(millennium::initialize))
        .route("/active-theme", get(millennium::active_theme))
        .route(
            "/themes",
            get(millennium::list_themes).post(millennium::create_theme),
        )
        .route("/themes/import", post(millennium::import_theme))
        .route(
            "/themes/{name}",
            get(millennium::get_theme)
                .put(millennium::update_theme)
                .delete(millennium::delete_theme),
        )
        .route("/themes/{name}/apply", post(millennium::apply_theme))
        .route("/themes/{name}/export", post(millennium::export_theme))
        .route(
            "/themes/{name}/preview",
            post(millennium::start_preview).delete(millennium::stop_preview),
        )
        .route("/themes/{name}/preview/ws", get(ws::preview_ws_handler))
}
