/// Domain-level errors shared by the store, engine, and preview modules.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Theme not found: {0}")]
    ThemeNotFound(String),

    #[error("Theme already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Malformed VDF config: {0}")]
    MalformedConfig(String),

    #[error("Failed to update Steam config: {0}")]
    ConfigUpdateFailed(String),

    #[error("Steam installation not found")]
    EnvironmentNotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(String),
}

/// Convenience alias used throughout the core crate.
pub type CoreResult<T> = Result<T, CoreError>;

impl From<zip::result::ZipError> for CoreError {
    fn from(err: zip::result::ZipError) -> Self {
        CoreError::Archive(err.to_string())
    }
}
