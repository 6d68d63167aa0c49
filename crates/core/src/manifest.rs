//! Helpers for the per-theme `skin.json` manifest.
//!
//! A manifest is a JSON object with required string fields `name`,
//! `author`, and `version`; any additional keys are preserved verbatim
//! through updates and export/import.

use std::fs;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Manifest file name inside a theme directory.
pub const MANIFEST_FILE: &str = "skin.json";

/// Primary stylesheet required by every theme.
pub const PRIMARY_STYLESHEET: &str = "webkit.css";

/// Fields a valid manifest must carry as non-empty strings.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "author", "version"];

/// A theme manifest, stored as an ordered JSON object.
pub type Manifest = serde_json::Map<String, serde_json::Value>;

/// Read and parse the manifest inside a theme directory.
pub fn read(theme_dir: &Path) -> CoreResult<Manifest> {
    let path = theme_dir.join(MANIFEST_FILE);
    let text = fs::read_to_string(&path)?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| CoreError::InvalidTheme(format!("manifest is not valid JSON: {e}")))?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(CoreError::InvalidTheme(
            "manifest must be a JSON object".into(),
        )),
    }
}

/// Write a manifest to a theme directory as pretty-printed UTF-8 JSON.
pub fn write(theme_dir: &Path, manifest: &Manifest) -> CoreResult<()> {
    let text = serde_json::to_string_pretty(manifest)
        .map_err(|e| CoreError::InvalidTheme(format!("manifest not serializable: {e}")))?;
    fs::write(theme_dir.join(MANIFEST_FILE), text)?;
    Ok(())
}

/// The theme name recorded in a manifest, if present and non-empty.
pub fn name(manifest: &Manifest) -> Option<&str> {
    match manifest.get("name") {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Whether all required fields are present as non-empty strings.
pub fn has_required_fields(manifest: &Manifest) -> bool {
    REQUIRED_FIELDS.iter().all(|field| {
        matches!(
            manifest.get(*field),
            Some(serde_json::Value::String(s)) if !s.is_empty()
        )
    })
}
