//! Route definitions for theme asset file records.

use axum::routing::get;
use axum::Router;

use crate::handlers::files;
use crate::state::AppState;

/// Theme asset file routes mounted at `/files`.
///
/// ```text
/// GET    /?theme_id=   -> list_files
/// POST   /             -> create_file
/// GET    /{id}         -> get_file
/// PUT    /{id}         -> update_file
/// DELETE /{id}         -> delete_file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(files::list_files).post(files::create_file))
        .route(
            "/{id}",
            get(files::get_file)
                .put(files::update_file)
                .delete(files::delete_file),
        )
}
