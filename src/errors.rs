//! Error types for the phrasemap outer layers.
//!
//! The extraction pipeline itself never fails. Errors come from reading
//! documents, loading configuration, validating CLI parameters and writing
//! output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhrasemapError {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected phrase parameters
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl PhrasemapError {
    /// Create a file system error wrapping an IO error
    pub fn file_system_io(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams(message.into())
    }

    /// Whether the user can fix this by changing input or configuration.
    /// The binary exits with code 2 for these.
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::InvalidParams(_) | Self::Toml(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PhrasemapError>;

/// Exit code for user-fixable failures (bad parameters or configuration)
pub const EXIT_USER_ERROR: u8 = 2;
/// Exit code for every other failure
pub const EXIT_FAILURE: u8 = 1;

/// Pick the process exit code for an error reaching the binary.
///
/// Context layers added with `anyhow` are looked through.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let user_fixable = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<PhrasemapError>())
        .any(PhrasemapError::is_user_fixable);
    if user_fixable {
        EXIT_USER_ERROR
    } else {
        EXIT_FAILURE
    }
}
