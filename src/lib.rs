//! tabstore: read and write tab-separated record files line by line
//!
//! A [`LineRecordStore`] is bound to one file, either for reading or for
//! writing. Each read turns one line into a [`Record`] by splitting on tabs;
//! each write joins fields with tabs into one line. There is no quoting or
//! escaping, so fields must not contain tabs or line terminators.
//!
//! # Quick Start
//!
//! ## Writing and reading back
//!
//! ```rust,no_run
//! use tabstore::{LineRecordStore, Mode, Result};
//!
//! fn main() -> Result<()> {
//!     let mut store = LineRecordStore::new();
//!     store.open("mailing.tsv", Mode::Write)?;
//!     store.write(["hello", "world"])?;
//!     store.write(["a", "b", "c"])?;
//!     store.close()?;
//!
//!     store.open("mailing.tsv", Mode::Read)?;
//!     while let Some(record) = store.read_record()? {
//!         println!("{:?}", record.fields());
//!     }
//!     store.close()
//! }
//! ```
//!
//! ## Fixed-width records
//!
//! ```rust,no_run
//! use tabstore::{LineRecordStore, Mode, Result};
//!
//! fn main() -> Result<()> {
//!     let mut store = LineRecordStore::new();
//!     store.open("mailing.tsv", Mode::Read)?;
//!
//!     // Always three slots: extra fields dropped, missing ones None
//!     if let Some(slots) = store.read_record_with_width(3)? {
//!         println!("{:?}", slots);
//!     }
//!     store.close()
//! }
//! ```
//!
//! ## Scoped access
//!
//! ```rust,no_run
//! use tabstore::{convenience, Mode, Result};
//!
//! fn main() -> Result<()> {
//!     // The store is closed even if the closure fails
//!     let count = convenience::with_store("mailing.tsv", Mode::Read, |store| {
//!         Ok(store.records().count())
//!     })?;
//!     println!("{} records", count);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`](crate::core): [`Record`] and [`Mode`]
//! - [`io`]: the store, its [`StoreConfig`] and the deprecated readers
//! - [`error`]: [`TabStoreError`] and the [`Result`] alias

// Public API exports
pub use error::{Result, StoreState, TabStoreError};

// Core types
pub use crate::core::{IntoMode, Mode, Record, SEPARATOR};

// IO types
pub use io::{LineEndings, LineRecordStore, Records, StoreConfig};

pub mod core;
pub mod error;
pub mod io;

/// Convenience functions for common operations
pub mod convenience {
    //! Functions that open a store for a bounded sequence of operations and
    //! always close it afterwards.

    pub use crate::io::convenience::*;
}
