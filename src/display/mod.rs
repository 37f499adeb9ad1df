//! Display formatting for terminal output
//!
//! Renders the list and crosstab projections as tables. Numbers are shown
//! with thousands separators and at most three fraction digits.

pub mod charge;
pub mod crosstab;
pub mod number;

pub use charge::{format_charge_details, format_charge_list};
pub use crosstab::format_crosstab;
pub use number::format_number;
