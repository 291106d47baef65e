//! Core types for tab-separated records
//!
//! - Record: ordered fields parsed from, or joined into, one line
//! - Mode: whether a store reads or writes

pub mod mode;
pub mod record;

pub use mode::{IntoMode, Mode};
pub use record::{Record, SEPARATOR};
