//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod theme_file_repo;
pub mod theme_repo;

pub use theme_file_repo::ThemeFileRepo;
pub use theme_repo::ThemeRepo;
