//! Export module
//!
//! CSV is the only export format; it is spreadsheet-compatible and is the
//! same dialect the importer reads.

pub mod csv;

pub use csv::{encode, export_filename, write_records, HeaderLanguage, BOM};
