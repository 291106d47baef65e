//! Error types for the tabstore library
//!
//! Every failure of the store surfaces as a [`TabStoreError`]. File system
//! failures on `open` are mapped to the path-carrying variants so callers can
//! tell a missing file apart from a permission problem.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum TabStoreError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration parsing errors
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Open mode missing or not recognized
    #[error("Invalid mode: {mode}")]
    InvalidMode { mode: String },

    /// File not found or parent directory missing
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Permission errors
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Operation invoked while the store is in the wrong state
    #[error("Cannot {operation} while store is {state}")]
    Usage {
        operation: &'static str,
        state: StoreState,
    },

    /// A field that cannot be written without breaking the line format
    #[error("Invalid field at index {index}: {reason}")]
    InvalidField { index: usize, reason: String },

    /// A record with no fields has no line representation
    #[error("Cannot write a record with no fields")]
    EmptyRecord,

    /// A line that is not valid UTF-8; the line has been consumed
    #[error("Invalid UTF-8 in {path} at line {line}")]
    InvalidEncoding { path: PathBuf, line: usize },

    /// Configuration value out of range
    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TabStoreError>;

/// Lifecycle state of a [`LineRecordStore`](crate::LineRecordStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Unopened,
    OpenedRead,
    OpenedWrite,
    Closed,
}

impl fmt::Display for StoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unopened => write!(f, "unopened"),
            Self::OpenedRead => write!(f, "opened for reading"),
            Self::OpenedWrite => write!(f, "opened for writing"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

impl TabStoreError {
    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Create a new invalid mode error
    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidMode { mode: mode.into() }
    }

    /// Create a new usage error
    pub fn usage(operation: &'static str, state: StoreState) -> Self {
        Self::Usage { operation, state }
    }

    /// Create a new invalid field error
    pub fn invalid_field(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            index,
            reason: reason.into(),
        }
    }

    /// Create a new invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Map an I/O error raised while opening `path`
    pub fn from_io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::file_not_found(path),
            io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::Io(err),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(io_err) => !matches!(
                io_err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
            ),
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::InvalidMode { .. }
            | Self::Usage { .. }
            | Self::Config(_)
            | Self::InvalidConfig { .. } => false,
            Self::InvalidField { .. } | Self::EmptyRecord | Self::InvalidEncoding { .. } => true,
        }
    }

    /// Programmer errors: wrong state or wrong mode argument
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::Usage { .. } | Self::InvalidMode { .. })
    }
}
