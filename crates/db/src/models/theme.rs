//! Theme record models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{DbId, Timestamp};

/// A row from the `themes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Theme {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub author: String,
    pub version: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a theme record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTheme {
    pub name: String,
    pub description: Option<String>,
    pub author: String,
    pub version: String,
}

/// DTO for partially updating a theme record. Absent fields keep their
/// stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTheme {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub is_active: Option<bool>,
}
