//! Core data models for the transfer pricing ledger
//!
//! This module contains the charge record, its raw form input, the record
//! identifier, and the lenient number parsing shared by forms and imports.

pub mod charge;
pub mod ids;
pub mod number;

pub use charge::{ChargeDetails, ChargeInput, ChargeRecord};
pub use ids::ChargeId;
pub use number::parse_lenient;
