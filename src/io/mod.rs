//! File I/O: the record store, its configuration and legacy adapters

pub mod config;
pub mod legacy;
pub mod store;

pub use config::{LineEndings, StoreConfig};
pub use store::{convenience, LineRecordStore, Records};
