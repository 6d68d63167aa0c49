//! Repository for the `theme_files` table.

use sqlx::SqlitePool;

use crate::models::theme_file::{CreateThemeFile, ThemeFile, UpdateThemeFile};
use crate::DbId;

/// Column list for `theme_files` queries.
const FILE_COLUMNS: &str = "\
    id, theme_id, file_path, file_type, content, \
    created_at, updated_at";

/// Provides data access for theme asset files.
pub struct ThemeFileRepo;

impl ThemeFileRepo {
    /// Find a file by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<ThemeFile>, sqlx::Error> {
        let query = format!("SELECT {FILE_COLUMNS} FROM theme_files WHERE id = ?");
        sqlx::query_as::<_, ThemeFile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all files belonging to a theme.
    pub async fn list_by_theme(
        pool: &SqlitePool,
        theme_id: DbId,
    ) -> Result<Vec<ThemeFile>, sqlx::Error> {
        let query = format!("SELECT {FILE_COLUMNS} FROM theme_files WHERE theme_id = ? ORDER BY id");
        sqlx::query_as::<_, ThemeFile>(&query)
            .bind(theme_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new file record. Timestamps are assigned here.
    pub async fn create(pool: &SqlitePool, dto: &CreateThemeFile) -> Result<ThemeFile, sqlx::Error> {
        let now = chrono::Utc::now();
        let query = format!(
            "INSERT INTO theme_files (theme_id, file_path, file_type, content, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {FILE_COLUMNS}"
        );
        sqlx::query_as::<_, ThemeFile>(&query)
            .bind(dto.theme_id)
            .bind(&dto.file_path)
            .bind(&dto.file_type)
            .bind(&dto.content)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Apply a patch to a file record; absent fields keep their stored
    /// value. Returns `None` when the record does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        dto: &UpdateThemeFile,
    ) -> Result<Option<ThemeFile>, sqlx::Error> {
        let now = chrono::Utc::now();
        let query = format!(
            "UPDATE theme_files SET \
                 file_path = COALESCE(?, file_path), \
                 file_type = COALESCE(?, file_type), \
                 content = COALESCE(?, content), \
                 updated_at = ? \
             WHERE id = ? \
             RETURNING {FILE_COLUMNS}"
        );
        sqlx::query_as::<_, ThemeFile>(&query)
            .bind(&dto.file_path)
            .bind(&dto.file_type)
            .bind(&dto.content)
            .bind(now)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a file record. Returns whether a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM theme_files WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
