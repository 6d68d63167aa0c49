//! Small filesystem helpers shared by the store, engine, and preview.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::CoreResult;

/// Recursively copy a directory tree.
///
/// The destination must not already exist as a file; existing directories
/// are merged into (callers delete the target first when they need a clean
/// overwrite).
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> CoreResult<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(std::io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .unwrap_or_else(|_| Path::new(""));
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
