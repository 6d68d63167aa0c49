//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` patch DTO (all `Option` fields) applied per-field

pub mod theme;
pub mod theme_file;
