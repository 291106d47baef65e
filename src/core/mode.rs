//! Open mode of a store

use crate::error::{Result, TabStoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction a store is bound to for its lifetime between open and close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Read,
    Write,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

impl FromStr for Mode {
    type Err = TabStoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            _ => Err(TabStoreError::invalid_mode(s)),
        }
    }
}

/// Anything `open` accepts as a mode.
///
/// An absent mode (`None`) or an unrecognized name fails with
/// [`TabStoreError::InvalidMode`].
pub trait IntoMode {
    fn into_mode(self) -> Result<Mode>;
}

impl IntoMode for Mode {
    fn into_mode(self) -> Result<Mode> {
        Ok(self)
    }
}

impl IntoMode for Option<Mode> {
    fn into_mode(self) -> Result<Mode> {
        self.ok_or_else(|| TabStoreError::invalid_mode("<none>"))
    }
}

impl IntoMode for &str {
    fn into_mode(self) -> Result<Mode> {
        self.parse()
    }
}

impl IntoMode for String {
    fn into_mode(self) -> Result<Mode> {
        self.parse()
    }
}
