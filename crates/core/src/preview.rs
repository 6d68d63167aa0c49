//! Live preview sessions: a temporary, reversible application of a theme
//! against a scratch copy, re-applied on every incoming stylesheet update.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tempfile::TempDir;

use crate::engine::SkinEngine;
use crate::error::{CoreError, CoreResult};
use crate::fsops::copy_dir_recursive;
use crate::manifest::PRIMARY_STYLESHEET;

/// Outcome of a preview update, reported as data rather than an error so
/// the live-update channel never tears down on content failures.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewAck {
    pub status: PreviewStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewStatus {
    Success,
    Error,
}

impl PreviewAck {
    fn success(message: impl Into<String>) -> Self {
        Self {
            status: PreviewStatus::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: PreviewStatus::Error,
            message: message.into(),
        }
    }
}

/// One in-flight preview session.
///
/// The scratch directory is created fresh per `start` and removed on
/// `stop`; if the session is dropped without a `stop`, the [`TempDir`]
/// guard still removes it.
pub struct PreviewSession {
    engine: Arc<SkinEngine>,
    scratch: Option<TempDir>,
    current: Option<PathBuf>,
    active: bool,
}

impl PreviewSession {
    pub fn new(engine: Arc<SkinEngine>) -> Self {
        Self {
            engine,
            scratch: None,
            current: None,
            active: false,
        }
    }

    /// Whether a preview is currently applied.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start previewing a theme: validate, copy it into a fresh scratch
    /// directory, apply as preview.
    ///
    /// On any failure the session ends up inactive with its scratch
    /// removed; a half-applied preview is never left registered as active.
    pub fn start(&mut self, theme_path: &Path) -> CoreResult<()> {
        if !SkinEngine::validate(theme_path) {
            return Err(CoreError::InvalidTheme(format!(
                "theme failed validation: {}",
                theme_path.display()
            )));
        }

        // Replace any previous session before starting the next one.
        self.stop();

        let result = self.start_inner(theme_path);
        if let Err(ref e) = result {
            tracing::warn!(error = %e, "Preview start failed, tearing down");
            self.stop();
        }
        result
    }

    fn start_inner(&mut self, theme_path: &Path) -> CoreResult<()> {
        let scratch = tempfile::tempdir()?;
        let dir_name = theme_path
            .file_name()
            .ok_or_else(|| CoreError::InvalidTheme("theme path has no directory name".into()))?;
        let scratch_copy = scratch.path().join(dir_name);
        copy_dir_recursive(theme_path, &scratch_copy)?;

        self.scratch = Some(scratch);
        self.current = Some(scratch_copy.clone());
        self.active = true;

        self.engine.apply(&scratch_copy, true)?;
        tracing::info!(theme = %theme_path.display(), "Preview started");
        Ok(())
    }

    /// Replace the primary stylesheet in the scratch copy and re-apply.
    ///
    /// Called at high frequency from the live-update channel; all failures
    /// come back as an error ack, never as an `Err`.
    pub fn update(&mut self, css: &str) -> PreviewAck {
        let Some(scratch_copy) = self.current.clone() else {
            return PreviewAck::error("no active preview session");
        };

        let result = fs::write(scratch_copy.join(PRIMARY_STYLESHEET), css)
            .map_err(CoreError::from)
            .and_then(|()| self.engine.apply(&scratch_copy, true));

        match result {
            Ok(()) => PreviewAck::success("preview updated"),
            Err(e) => {
                tracing::warn!(error = %e, "Preview update failed");
                PreviewAck::error(e.to_string())
            }
        }
    }

    /// End the session: best-effort removal of the applied skin and the
    /// scratch directory. Idempotent; errors are logged and swallowed so
    /// cleanup can never mask the primary operation's outcome.
    pub fn stop(&mut self) {
        if self.active {
            if let Some(scratch_copy) = self.current.take() {
                if let Err(e) = self.engine.remove(&scratch_copy) {
                    tracing::warn!(error = %e, "Failed to remove previewed skin");
                }
            }
            self.active = false;
            tracing::info!("Preview stopped");
        }
        self.current = None;
        if let Some(scratch) = self.scratch.take() {
            if let Err(e) = scratch.close() {
                tracing::warn!(error = %e, "Failed to remove preview scratch directory");
            }
        }
    }
}

impl Drop for PreviewSession {
    fn drop(&mut self) {
        // Scratch dirs accumulate across sessions if leaked; make
        // abandonment behave like stop().
        self.stop();
    }
}
