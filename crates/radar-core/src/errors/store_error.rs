use std::path::PathBuf;

/// Trigger store persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read trigger store {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("failed to write trigger store {path}: {message}")]
    Write { path: PathBuf, message: String },

    #[error("trigger store {path} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },
}
