//! HTTP handler functions, grouped by resource.

pub mod files;
pub mod millennium;
pub mod themes;
