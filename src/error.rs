use crate::config::ValidationError;
use crate::edit::EditError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which side of the read-transform-write run touched the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Reading,
    Writing,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAction::Reading => write!(f, "reading"),
            FileAction::Writing => write!(f, "writing"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("File not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied while {action} {path}")]
    PermissionDenied {
        path: PathBuf,
        action: FileAction,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid rewrite config: {0}")]
    Config(#[from] ValidationError),

    #[error("Invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),
}

impl RewriteError {
    /// Sort an I/O failure into the error kinds callers care about.
    pub fn from_io(path: &Path, action: FileAction, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => RewriteError::NotFound { path, source },
            io::ErrorKind::PermissionDenied => RewriteError::PermissionDenied {
                path,
                action,
                source,
            },
            _ => match action {
                FileAction::Reading => RewriteError::Read { path, source },
                FileAction::Writing => RewriteError::Write { path, source },
            },
        }
    }

    /// Path of the file involved, when the failure came from the filesystem.
    pub fn path(&self) -> Option<&Path> {
        match self {
            RewriteError::NotFound { path, .. }
            | RewriteError::PermissionDenied { path, .. }
            | RewriteError::Read { path, .. }
            | RewriteError::Decode { path, .. }
            | RewriteError::Write { path, .. } => Some(path),
            RewriteError::Config(_) | RewriteError::Pattern(_) | RewriteError::Edit(_) => None,
        }
    }
}
