//! Transfer pricing ledger
//!
//! Records intercompany service charges (a providing unit delivers a
//! quantity of a service to a receiving unit at a unit price) and projects
//! them three ways: a flat list, a crosstab by receiving unit, and CSV.
//!
//! # Architecture
//!
//! - `models`: charge records, ids and lenient number parsing
//! - `services`: form validation
//! - `storage`: the ordered record store and key-value persistence adapters
//! - `reports`: crosstab aggregation
//! - `import` / `export`: the CSV codec
//! - `ledger`: the controller tying the store to persistence
//! - `config`, `logging`, `display`, `cli`: the command-line shell
//!
//! # Example
//!
//! ```rust
//! use transfer_pricing::ledger::Ledger;
//! use transfer_pricing::models::ChargeInput;
//! use transfer_pricing::storage::MemoryKeyValueStore;
//!
//! let mut ledger = Ledger::open(MemoryKeyValueStore::new(), "transferPricingData");
//! ledger
//!     .submit(&ChargeInput {
//!         date: "2024-01-01".into(),
//!         providing_unit: "IT".into(),
//!         service_name: "Support".into(),
//!         unit_price: "100".into(),
//!         receiving_unit: "HQ".into(),
//!         quantity: "3".into(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(ledger.records()[0].total_amount(), 300.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PricingError, PricingResult};
