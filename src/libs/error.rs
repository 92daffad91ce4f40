//! Error types shared by the store and the directory bootstrap.
//!
//! Every fallible library operation returns [`Result`]. Callers that only
//! care about the broad category of a failure can use [`Error::kind`], which
//! collapses the variants onto four kinds: not found, validation, I/O and
//! storage corruption.

use rusqlite::ErrorCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A lookup by id, or a dependent-project check, matched no row.
    NotFound,
    /// Malformed input was rejected before touching storage.
    Validation,
    /// Filesystem or storage engine failure.
    Io,
    /// The file at the store path is not a valid store.
    StorageCorrupt,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("{} is not a valid task store: {reason}", path.display())]
    StorageCorrupt { path: PathBuf, reason: String },

    #[error("failed to parse configuration {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Error::NotFound { entity, id }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Validation(_) => ErrorKind::Validation,
            Error::StorageCorrupt { .. } => ErrorKind::StorageCorrupt,
            Error::Database(err) if is_corruption(err) => ErrorKind::StorageCorrupt,
            Error::Io { .. } | Error::Database(_) | Error::Config { .. } => ErrorKind::Io,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// True when SQLite reports that the file is not a database or is damaged.
pub(crate) fn is_corruption(err: &rusqlite::Error) -> bool {
    matches!(err.sqlite_error_code(), Some(ErrorCode::NotADatabase) | Some(ErrorCode::DatabaseCorrupt))
}

/// True when SQLite could not open or write the file itself.
pub(crate) fn is_open_failure(err: &rusqlite::Error) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::CannotOpen) | Some(ErrorCode::PermissionDenied) | Some(ErrorCode::ReadOnly) | Some(ErrorCode::SystemIoFailure)
    )
}
