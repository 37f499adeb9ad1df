//! Storage layer for the transfer pricing ledger
//!
//! `RecordStore` holds the records in memory. The `KeyValueStore` adapters
//! persist whole-store snapshots; the file-backed one writes atomically.

pub mod file_io;
pub mod kv;
pub mod records;

pub use file_io::{read_optional, write_atomic};
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use records::RecordStore;

/// Key under which the record snapshot is stored by default
pub const DEFAULT_STORAGE_KEY: &str = "transferPricingData";
