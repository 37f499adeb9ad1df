//! Import module
//!
//! Bulk import of charges from the CSV dialect produced by `export`.

pub mod csv;

pub use csv::{decode, decode_with_default_date, FIELD_COUNT};
