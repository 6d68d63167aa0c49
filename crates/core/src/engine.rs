//! Skin application engine: copies validated themes into Steam's
//! active-skin location and flips the active-theme pointer in the host
//! config file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fsops::copy_dir_recursive;
use crate::manifest::{self, PRIMARY_STYLESHEET};
use crate::steam::SteamEnv;
use crate::vdf;

/// Suffix appended to the config file name for the pre-write backup.
const BACKUP_EXTENSION: &str = "vdf.bak";

/// Applies themes against one Steam installation.
///
/// Holds no mutable state; every operation works off the paths passed in
/// and the two locations fixed at construction.
pub struct SkinEngine {
    skins_path: PathBuf,
    config_path: PathBuf,
}

impl SkinEngine {
    pub fn new(skins_path: impl Into<PathBuf>, config_path: impl Into<PathBuf>) -> Self {
        Self {
            skins_path: skins_path.into(),
            config_path: config_path.into(),
        }
    }

    pub fn for_env(env: &SteamEnv) -> Self {
        Self::new(&env.skins_path, &env.config_path)
    }

    /// Whether a directory is a structurally valid theme.
    ///
    /// True iff the directory exists, contains both the manifest and the
    /// primary stylesheet, the manifest parses as JSON, and `name`,
    /// `author`, and `version` are present and non-empty. Never errors.
    pub fn validate(theme_path: &Path) -> bool {
        if !theme_path.is_dir() || !theme_path.join(PRIMARY_STYLESHEET).is_file() {
            return false;
        }
        match manifest::read(theme_path) {
            Ok(m) => manifest::has_required_fields(&m),
            Err(_) => false,
        }
    }

    /// Copy a theme into the active-skin location and, unless this is a
    /// preview, point the host config at it.
    ///
    /// An existing active-skin entry of the same name is deleted first; a
    /// re-apply is always a clean overwrite, never a merge. The config
    /// update writes a `.bak` copy of the original before the new content
    /// so a crash mid-write leaves a recoverable prior version.
    pub fn apply(&self, theme_path: &Path, preview: bool) -> CoreResult<()> {
        if !Self::validate(theme_path) {
            return Err(CoreError::InvalidTheme(format!(
                "theme failed validation: {}",
                theme_path.display()
            )));
        }

        let theme_manifest = manifest::read(theme_path)?;
        let name = manifest::name(&theme_manifest)
            .ok_or_else(|| CoreError::InvalidTheme("manifest has no name".into()))?
            .to_string();

        let target = self.skins_path.join(&name);
        if target.exists() {
            fs::remove_dir_all(&target)?;
        }
        fs::create_dir_all(&self.skins_path)?;
        copy_dir_recursive(theme_path, &target)?;

        if !preview {
            self.update_steam_config(&name)?;
        }

        tracing::info!(theme = %name, preview, "Theme applied");
        Ok(())
    }

    /// Remove the active-skin entry for the theme at `theme_path`.
    ///
    /// A missing theme path is a no-op.
    pub fn remove(&self, theme_path: &Path) -> CoreResult<()> {
        if !theme_path.exists() {
            return Ok(());
        }
        let theme_manifest = manifest::read(theme_path)?;
        let Some(name) = manifest::name(&theme_manifest) else {
            return Ok(());
        };
        self.remove_by_name(name)
    }

    /// Remove the active-skin entry with the given theme name, if present.
    pub fn remove_by_name(&self, name: &str) -> CoreResult<()> {
        let target = self.skins_path.join(name);
        if target.exists() {
            fs::remove_dir_all(&target)?;
            tracing::info!(theme = name, "Active skin entry removed");
        }
        Ok(())
    }

    /// Current value of the active-theme leaf in the host config, or an
    /// empty string when unset or the config is missing.
    pub fn active_theme(&self) -> String {
        match fs::read_to_string(&self.config_path) {
            Ok(text) => vdf::get_active_theme(&text),
            Err(_) => String::new(),
        }
    }

    /// Patch the host config file: read, set the active theme, back up the
    /// original, write the new text. Every failure along the way is
    /// surfaced as [`CoreError::ConfigUpdateFailed`].
    fn update_steam_config(&self, theme_name: &str) -> CoreResult<()> {
        let text = fs::read_to_string(&self.config_path).map_err(|e| {
            CoreError::ConfigUpdateFailed(format!(
                "cannot read {}: {e}",
                self.config_path.display()
            ))
        })?;

        let updated = vdf::set_active_theme(&text, theme_name)?;

        let backup_path = self.config_path.with_extension(BACKUP_EXTENSION);
        fs::copy(&self.config_path, &backup_path)
            .map_err(|e| CoreError::ConfigUpdateFailed(format!("backup failed: {e}")))?;

        fs::write(&self.config_path, updated)
            .map_err(|e| CoreError::ConfigUpdateFailed(format!("write failed: {e}")))?;

        tracing::info!(theme = theme_name, "Steam config updated");
        Ok(())
    }
}
