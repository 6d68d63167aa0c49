//! Repository for the `themes` table.

use sqlx::SqlitePool;

use crate::models::theme::{CreateTheme, Theme, UpdateTheme};
use crate::DbId;

/// Column list for `themes` queries.
const THEME_COLUMNS: &str = "\
    id, name, description, author, version, is_active, \
    created_at, updated_at";

/// Provides data access for theme records.
pub struct ThemeRepo;

impl ThemeRepo {
    /// Find a theme by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!("SELECT {THEME_COLUMNS} FROM themes WHERE id = ?");
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a theme by its unique name.
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!("SELECT {THEME_COLUMNS} FROM themes WHERE name = ?");
        sqlx::query_as::<_, Theme>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List themes with pagination.
    pub async fn list(
        pool: &SqlitePool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!("SELECT {THEME_COLUMNS} FROM themes ORDER BY id LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Theme>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Insert a new theme record. Timestamps are assigned here.
    pub async fn create(pool: &SqlitePool, dto: &CreateTheme) -> Result<Theme, sqlx::Error> {
        let now = chrono::Utc::now();
        let query = format!(
            "INSERT INTO themes (name, description, author, version, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, 0, ?, ?) \
             RETURNING {THEME_COLUMNS}"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(&dto.author)
            .bind(&dto.version)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Apply a patch to a theme record; absent fields keep their stored
    /// value. `updated_at` is bumped on every call. Returns `None` when
    /// the record does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        dto: &UpdateTheme,
    ) -> Result<Option<Theme>, sqlx::Error> {
        let now = chrono::Utc::now();
        let query = format!(
            "UPDATE themes SET \
                 name = COALESCE(?, name), \
                 description = COALESCE(?, description), \
                 author = COALESCE(?, author), \
                 version = COALESCE(?, version), \
                 is_active = COALESCE(?, is_active), \
                 updated_at = ? \
             WHERE id = ? \
             RETURNING {THEME_COLUMNS}"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(&dto.author)
            .bind(&dto.version)
            .bind(dto.is_active)
            .bind(now)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a theme record. Returns whether a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM themes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
