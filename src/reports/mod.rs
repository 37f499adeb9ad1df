//! Read-side projections over the charge records

pub mod crosstab;

pub use crosstab::{Crosstab, CrosstabRow};
