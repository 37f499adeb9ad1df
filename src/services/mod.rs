//! Service layer for the transfer pricing ledger
//!
//! Business rules that sit between raw form input and the record store.

pub mod validator;

pub use validator::validate;
