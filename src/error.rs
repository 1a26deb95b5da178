//! Error handler for flicks.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Enum representing service-level failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad input or business-rule violation; correctable by the user.
    #[error("{0}")]
    Validation(String),

    #[error("an account with this email is already registered")]
    UserAlreadyExists,

    /// Catalog feed missing or malformed; correctable in the environment.
    #[error("catalog import failed: {details}")]
    Import {
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Filesystem-level persistence failures.
///
/// Fatal during repository construction, recoverable per-call afterwards.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not a valid record array: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
