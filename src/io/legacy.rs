//! Deprecated record readers kept for existing callers
//!
//! Both readers are thin adapters over
//! [`read_record_with_width`](LineRecordStore::read_record_with_width), so
//! splitting, padding and exhaustion behave exactly as in the value-returning
//! API.
//!
//! # Migration
//!
//! The old two-column read took both columns as plain string arguments and
//! assigned to them. Those assignments were never visible to the caller, so
//! that form is gone rather than deprecated. Use [`LineRecordStore::read_pair`]:
//!
//! ```rust,no_run
//! use tabstore::{LineRecordStore, Mode, Result};
//!
//! fn main() -> Result<()> {
//!     let mut store = LineRecordStore::new();
//!     store.open("contacts.tsv", Mode::Read)?;
//!     while let Some((name, email)) = store.read_pair()? {
//!         println!("{:?} <{:?}>", name, email);
//!     }
//!     store.close()
//! }
//! ```

use crate::error::Result;
use crate::io::store::LineRecordStore;

impl LineRecordStore {
    /// Fill `columns` with the fields of the next line.
    ///
    /// Returns `false` at end of file, with every slot reset to `None`.
    /// Lines with more fields than slots are truncated; lines with fewer
    /// leave the remaining slots as `None`.
    #[deprecated(
        since = "0.2.0",
        note = "use `read_record_with_width(columns.len())`, which returns the slots"
    )]
    pub fn read_into(&mut self, columns: &mut [Option<String>]) -> Result<bool> {
        match self.read_record_with_width(columns.len())? {
            Some(slots) => {
                for (column, slot) in columns.iter_mut().zip(slots) {
                    *column = slot;
                }
                Ok(true)
            }
            None => {
                columns.iter_mut().for_each(|column| *column = None);
                Ok(false)
            }
        }
    }

    /// Read the first two columns of the next line, or `None` at end of file
    pub fn read_pair(&mut self) -> Result<Option<(Option<String>, Option<String>)>> {
        Ok(self.read_record_with_width(2)?.map(|slots| {
            let mut slots = slots.into_iter();
            (slots.next().flatten(), slots.next().flatten())
        }))
    }
}
