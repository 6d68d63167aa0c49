//! Theme asset file models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{DbId, Timestamp};

/// A row from the `theme_files` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ThemeFile {
    pub id: DbId,
    pub theme_id: DbId,
    /// Path relative to the theme directory.
    pub file_path: String,
    /// Free-form tag ("css", "js", ...).
    pub file_type: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a theme asset file.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateThemeFile {
    pub theme_id: DbId,
    pub file_path: String,
    pub file_type: String,
    pub content: String,
}

/// DTO for partially updating a theme asset file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateThemeFile {
    pub file_path: Option<String>,
    pub file_type: Option<String>,
    pub content: Option<String>,
}
