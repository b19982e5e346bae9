use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Failure of a single filesystem call.
///
/// Every variant except [`FsError::InvalidPattern`] carries the OS error it
/// was mapped from; nothing is retried or swallowed on the way up.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("{operation} '{}': entry not found", .path.display())]
    NotFound {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{operation} '{}': access denied", .path.display())]
    Access {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{operation} '{}': entry already exists", .path.display())]
    AlreadyExists {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{operation} '{}': entry is in use", .path.display())]
    InUse {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{operation} '{}': {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid search pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },
}

pub type FsResult<T> = std::result::Result<T, FsError>;

impl FsError {
    /// Classify an OS error raised by `operation` on `path`.
    pub fn from_io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                operation,
                path,
                source,
            },
            io::ErrorKind::PermissionDenied => Self::Access {
                operation,
                path,
                source,
            },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists {
                operation,
                path,
                source,
            },
            io::ErrorKind::ResourceBusy => Self::InUse {
                operation,
                path,
                source,
            },
            _ if is_sharing_violation(&source) => Self::InUse {
                operation,
                path,
                source,
            },
            _ => Self::Io {
                operation,
                path,
                source,
            },
        }
    }

    /// `NotFound` without an underlying OS call, for entries a snapshot
    /// recorded as absent.
    pub fn not_found(operation: &'static str, path: impl Into<PathBuf>) -> Self {
        Self::NotFound {
            operation,
            path: path.into(),
            source: io::ErrorKind::NotFound.into(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path, .. }
            | Self::Access { path, .. }
            | Self::AlreadyExists { path, .. }
            | Self::InUse { path, .. }
            | Self::Io { path, .. } => Some(path),
            Self::InvalidPattern { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// ERROR_SHARING_VIOLATION and ERROR_LOCK_VIOLATION.
#[cfg(windows)]
fn is_sharing_violation(err: &io::Error) -> bool {
    matches!(err.raw_os_error(), Some(32 | 33))
}

#[cfg(not(windows))]
fn is_sharing_violation(_err: &io::Error) -> bool {
    false
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
