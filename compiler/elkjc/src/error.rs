//! CLI error type.

use std::path::PathBuf;

/// Anything that stops a command before it can report on a file.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{}'", .path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data", .path.display())]
    InvalidUtf8 { path: PathBuf },
    #[error("error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no command given")]
    MissingCommand,
    /// Bad command-line arguments or environment.
    #[error("{0}")]
    Usage(String),
    #[error("cannot start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("cannot serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for any failed invocation. `1` is reserved for
    /// error-level lexical issues.
    pub const EXIT_CODE: i32 = 2;

    /// Classify an I/O error from reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => CliError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Io { path, source: err },
        }
    }
}
