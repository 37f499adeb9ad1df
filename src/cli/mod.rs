//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod catalog;
pub mod charge;
pub mod report;
pub mod transfer;

pub use catalog::handle_catalog_command;
pub use charge::{handle_charge_command, ChargeArgs, ChargeCommands};
pub use report::handle_crosstab_command;
pub use transfer::{handle_export_command, handle_import_command, ExportArgs};
