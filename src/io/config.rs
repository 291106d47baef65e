//! Store configuration

use crate::error::{Result, TabStoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a [`LineRecordStore`](crate::LineRecordStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Line terminator appended by `write`
    pub line_endings: LineEndings,
    /// Write to a temporary file and replace the target on close
    pub atomic_writes: bool,
    /// Reject fields containing a tab or a line terminator on write
    pub validate_fields: bool,
    /// Capacity of the read/write buffer (in bytes, at least 1)
    pub buffer_capacity: Option<usize>,
}

/// Line ending styles used when writing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndings {
    /// Unix-style line endings (\n)
    Unix,
    /// Windows-style line endings (\r\n)
    Windows,
    /// Whatever the current platform uses
    Native,
}

impl LineEndings {
    pub fn terminator(self) -> &'static str {
        match self {
            Self::Unix => "\n",
            Self::Windows => "\r\n",
            Self::Native if cfg!(windows) => "\r\n",
            Self::Native => "\n",
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            line_endings: LineEndings::Native,
            atomic_writes: false,
            validate_fields: false,
            buffer_capacity: None,
        }
    }
}

impl StoreConfig {
    /// Parse a configuration from JSON; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values a store cannot work with.
    ///
    /// A zero-capacity reader never fills and would report every file as
    /// exhausted.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_capacity == Some(0) {
            return Err(TabStoreError::invalid_config(
                "buffer_capacity must be at least 1",
            ));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| TabStoreError::from_io(e, path))?;
        Self::from_json_str(&content)
    }
}
