//! On-disk theme store: one directory per theme under a common root,
//! each holding a `skin.json` manifest and its stylesheet assets.

use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;

use crate::error::{CoreError, CoreResult};
use crate::fsops::copy_dir_recursive;
use crate::manifest::{self, Manifest, MANIFEST_FILE, PRIMARY_STYLESHEET};

/// Stylesheets seeded into every newly created theme, with their
/// boilerplate content.
const SEED_STYLESHEETS: [(&str, &str); 4] = [
    (PRIMARY_STYLESHEET, "/* Global styles */\n"),
    ("libraryroot.custom.css", "/* Library styles */\n"),
    ("friends.custom.css", "/* Friends list styles */\n"),
    ("bigpicture.custom.css", "/* Big Picture styles */\n"),
];

/// A theme directory together with its parsed manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeEntry {
    pub name: String,
    pub manifest: Manifest,
    pub path: PathBuf,
}

/// Filesystem store owning the themes root directory.
pub struct ThemeStore {
    root: PathBuf,
}

impl ThemeStore {
    /// Open a store at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> CoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Root directory holding all theme subdirectories.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a theme name to its directory, rejecting names that could
    /// escape the store root.
    pub fn theme_dir(&self, name: &str) -> CoreResult<PathBuf> {
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(CoreError::InvalidTheme(format!(
                "theme name is not directory-safe: {name:?}"
            )));
        }
        Ok(self.root.join(name))
    }

    /// Create a new theme directory with the given manifest and seeded
    /// stylesheet boilerplate.
    pub fn create(&self, name: &str, manifest: &Manifest) -> CoreResult<PathBuf> {
        let dir = self.theme_dir(name)?;
        if dir.exists() {
            return Err(CoreError::AlreadyExists(name.to_string()));
        }
        fs::create_dir_all(&dir)?;
        manifest::write(&dir, manifest)?;
        for (file, content) in SEED_STYLESHEETS {
            fs::write(dir.join(file), content)?;
        }
        tracing::info!(theme = name, path = %dir.display(), "Theme created");
        Ok(dir)
    }

    /// Read a theme's manifest and resolved path.
    pub fn read(&self, name: &str) -> CoreResult<ThemeEntry> {
        let dir = self.theme_dir(name)?;
        if !dir.exists() {
            return Err(CoreError::ThemeNotFound(name.to_string()));
        }
        let manifest = manifest::read(&dir)?;
        Ok(ThemeEntry {
            name: name.to_string(),
            manifest,
            path: dir,
        })
    }

    /// Shallow-merge `patch` into a theme's manifest and rewrite it.
    pub fn update(&self, name: &str, patch: &Manifest) -> CoreResult<ThemeEntry> {
        let mut entry = self.read(name)?;
        for (key, value) in patch {
            entry.manifest.insert(key.clone(), value.clone());
        }
        manifest::write(&entry.path, &entry.manifest)?;
        Ok(entry)
    }

    /// List all themes with a readable manifest.
    ///
    /// Non-directories and directories with a missing or unparseable
    /// manifest are skipped, not reported as errors. Enumeration order is
    /// whatever the filesystem yields.
    pub fn list(&self) -> CoreResult<Vec<ThemeEntry>> {
        let mut themes = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            match manifest::read(&entry.path()) {
                Ok(manifest) => themes.push(ThemeEntry {
                    name,
                    manifest,
                    path: entry.path(),
                }),
                Err(e) => {
                    tracing::debug!(theme = %name, error = %e, "Skipping unreadable theme");
                }
            }
        }
        Ok(themes)
    }

    /// Recursively delete a theme directory.
    ///
    /// Removing any active-skin copy of the theme is the caller's job
    /// (best-effort, via the engine) so a failure there cannot block the
    /// deletion itself.
    pub fn delete(&self, name: &str) -> CoreResult<()> {
        let dir = self.theme_dir(name)?;
        if !dir.exists() {
            return Err(CoreError::ThemeNotFound(name.to_string()));
        }
        fs::remove_dir_all(&dir)?;
        tracing::info!(theme = name, "Theme deleted");
        Ok(())
    }

    /// Package a theme directory as `<name>.zip` inside `target_dir`.
    pub fn export(&self, name: &str, target_dir: &Path) -> CoreResult<PathBuf> {
        let entry = self.read(name)?;
        fs::create_dir_all(target_dir)?;
        let archive_path = target_dir.join(format!("{name}.zip"));

        let file = File::create(&archive_path)?;
        let mut writer = zip::ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for item in WalkDir::new(&entry.path) {
            let item = item.map_err(std::io::Error::from)?;
            let relative = item
                .path()
                .strip_prefix(&entry.path)
                .unwrap_or_else(|_| Path::new(""));
            if relative.as_os_str().is_empty() {
                continue;
            }
            let rel_name = relative.to_string_lossy().replace('\\', "/");
            if item.file_type().is_dir() {
                writer.add_directory(rel_name, options)?;
            } else {
                writer.start_file(rel_name, options)?;
                let content = fs::read(item.path())?;
                writer.write_all(&content)?;
            }
        }
        writer.finish()?;

        tracing::info!(theme = name, archive = %archive_path.display(), "Theme exported");
        Ok(archive_path)
    }

    /// Unpack a theme archive into the store, overwriting any existing
    /// theme of the same name. Returns the imported theme's name.
    ///
    /// The manifest may live at any depth inside the archive; the first
    /// match wins. The theme name comes from the manifest's `name` field,
    /// falling back to the archive's base file name.
    pub fn import(&self, archive_path: &Path) -> CoreResult<String> {
        let file = File::open(archive_path)?;
        let mut archive = zip::ZipArchive::new(file)?;

        let scratch = tempfile::tempdir()?;
        archive.extract(scratch.path())?;

        let manifest_path = WalkDir::new(scratch.path())
            .into_iter()
            .filter_map(Result::ok)
            .find(|e| e.file_type().is_file() && e.file_name() == MANIFEST_FILE)
            .map(|e| e.path().to_path_buf())
            .ok_or_else(|| {
                CoreError::InvalidTheme(format!("archive contains no {MANIFEST_FILE}"))
            })?;
        let source_dir = manifest_path
            .parent()
            .ok_or_else(|| CoreError::InvalidTheme("manifest has no parent directory".into()))?
            .to_path_buf();

        let manifest = manifest::read(&source_dir)?;
        let name = match manifest::name(&manifest) {
            Some(n) => n.to_string(),
            None => archive_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .ok_or_else(|| CoreError::InvalidTheme("cannot derive theme name".into()))?,
        };

        let target = self.theme_dir(&name)?;
        if target.exists() {
            fs::remove_dir_all(&target)?;
        }
        copy_dir_recursive(&source_dir, &target)?;

        tracing::info!(theme = %name, "Theme imported");
        Ok(name)
    }
}
