//! Discovery and preparation of the host Steam installation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::vdf::{self, VdfNode, VdfSection};

/// Relative path of the library config file under the Steam root.
const LIBRARY_CONFIG: &str = "config/libraryconfig.vdf";

/// Relative path of the skins directory under the Steam root.
const SKINS_DIR: &str = "steamui/skins";

/// Marker file enabling CEF remote debugging, required for live preview.
const CEF_DEBUG_MARKER: &str = ".cef-enable-remote-debugging";

/// Resolved paths of a Steam installation.
#[derive(Debug, Clone)]
pub struct SteamEnv {
    /// Steam installation root.
    pub steam_path: PathBuf,
    /// Directory holding installed skin copies (the active-skin location).
    pub skins_path: PathBuf,
    /// The host `libraryconfig.vdf` this system patches.
    pub config_path: PathBuf,
}

impl SteamEnv {
    /// Locate the Steam installation, preferring an explicit override.
    ///
    /// Fails with [`CoreError::EnvironmentNotFound`] when no candidate
    /// path exists; that is a permanent precondition failure, not
    /// something this system can recover from.
    pub fn discover(override_path: Option<&Path>) -> CoreResult<Self> {
        let steam_path = match override_path {
            Some(p) if p.exists() => p.to_path_buf(),
            Some(_) | None => locate_steam().ok_or(CoreError::EnvironmentNotFound)?,
        };
        Ok(Self::at(steam_path))
    }

    /// Build the environment for a known Steam root (no existence checks).
    pub fn at(steam_path: impl Into<PathBuf>) -> Self {
        let steam_path = steam_path.into();
        Self {
            skins_path: steam_path.join(SKINS_DIR),
            config_path: steam_path.join(LIBRARY_CONFIG),
            steam_path,
        }
    }

    /// Prepare the installation for theming: create the skins directory,
    /// enable CEF remote debugging, and seed an empty library config if
    /// none exists.
    pub fn initialize(&self) -> CoreResult<()> {
        if !self.steam_path.exists() {
            return Err(CoreError::EnvironmentNotFound);
        }

        fs::create_dir_all(&self.skins_path)?;

        let marker = self.steam_path.join(CEF_DEBUG_MARKER);
        if !marker.exists() {
            fs::write(&marker, "")?;
        }

        if let Some(config_dir) = self.config_path.parent() {
            fs::create_dir_all(config_dir)?;
        }
        if !self.config_path.exists() {
            fs::write(&self.config_path, default_library_config())?;
        }

        tracing::info!(steam = %self.steam_path.display(), "Steam environment initialized");
        Ok(())
    }
}

/// Serialized empty `libraryconfig.settings` structure used to seed a
/// missing config file.
fn default_library_config() -> String {
    let mut lib = VdfSection::new();
    lib.insert("settings".into(), VdfNode::Section(VdfSection::new()));
    let mut root = VdfSection::new();
    root.insert("libraryconfig".into(), VdfNode::Section(lib));
    vdf::format(&root, 0)
}

/// Search the platform's usual Steam install locations.
pub fn locate_steam() -> Option<PathBuf> {
    for candidate in candidate_paths() {
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(target_os = "windows")]
fn candidate_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(r"C:\Program Files (x86)\Steam")]
}

#[cfg(target_os = "macos")]
fn candidate_paths() -> Vec<PathBuf> {
    dirs::home_dir()
        .map(|home| vec![home.join("Library/Application Support/Steam")])
        .unwrap_or_default()
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn candidate_paths() -> Vec<PathBuf> {
    dirs::home_dir()
        .map(|home| {
            vec![
                home.join(".local/share/Steam"),
                home.join(".steam/steam"),
            ]
        })
        .unwrap_or_default()
}
