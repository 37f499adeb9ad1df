//! Charge record model
//!
//! A charge is one billable intercompany service event: a providing unit
//! delivers some quantity of a service to a receiving unit at a unit price.
//! The total amount is derived and kept in sync by construction.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ChargeId;
use super::number::parse_lenient;

/// The six user-supplied fields of a charge, already coerced to their types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeDetails {
    /// Calendar date, ISO-8601 text
    pub date: String,
    pub providing_unit: String,
    pub service_name: String,
    #[serde(default)]
    pub unit_price: f64,
    pub receiving_unit: String,
    #[serde(default)]
    pub quantity: f64,
}

impl ChargeDetails {
    /// Price times quantity
    pub fn total_amount(&self) -> f64 {
        self.unit_price * self.quantity
    }
}

/// A stored charge with its identity and derived total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredCharge")]
pub struct ChargeRecord {
    id: ChargeId,
    #[serde(flatten)]
    details: ChargeDetails,
    total_amount: f64,
}

/// Shape read back from a snapshot; any stored total is ignored
#[derive(Deserialize)]
struct StoredCharge {
    id: ChargeId,
    #[serde(flatten)]
    details: ChargeDetails,
}

impl From<StoredCharge> for ChargeRecord {
    fn from(stored: StoredCharge) -> Self {
        Self::new(stored.id, stored.details)
    }
}

impl ChargeRecord {
    /// Create a record, computing its total amount
    pub fn new(id: ChargeId, details: ChargeDetails) -> Self {
        let total_amount = details.total_amount();
        Self {
            id,
            details,
            total_amount,
        }
    }

    /// Create a record with a freshly minted id
    pub fn create(details: ChargeDetails) -> Self {
        Self::new(ChargeId::new(), details)
    }

    pub fn id(&self) -> ChargeId {
        self.id
    }

    pub fn details(&self) -> &ChargeDetails {
        &self.details
    }

    /// Consume the record, keeping only the user-supplied fields
    pub fn into_details(self) -> ChargeDetails {
        self.details
    }

    pub fn date(&self) -> &str {
        &self.details.date
    }

    pub fn providing_unit(&self) -> &str {
        &self.details.providing_unit
    }

    pub fn service_name(&self) -> &str {
        &self.details.service_name
    }

    pub fn unit_price(&self) -> f64 {
        self.details.unit_price
    }

    pub fn receiving_unit(&self) -> &str {
        &self.details.receiving_unit
    }

    pub fn quantity(&self) -> f64 {
        self.details.quantity
    }

    /// Always `unit_price * quantity`
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }
}

impl fmt::Display for ChargeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}: {} x {} @ {} = {}",
            self.details.date,
            self.details.providing_unit,
            self.details.receiving_unit,
            self.details.service_name,
            self.details.quantity,
            self.details.unit_price,
            self.total_amount
        )
    }
}

/// Today's date (UTC) in `YYYY-MM-DD` form, used when a charge has no date
pub fn today_iso_date() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Raw form input before validation; every field is free text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargeInput {
    pub date: String,
    pub providing_unit: String,
    pub service_name: String,
    pub unit_price: String,
    pub receiving_unit: String,
    pub quantity: String,
}

impl ChargeInput {
    /// Prefill a form from an existing record (the edit flow)
    pub fn from_record(record: &ChargeRecord) -> Self {
        let details = record.details();
        Self {
            date: details.date.clone(),
            providing_unit: details.providing_unit.clone(),
            service_name: details.service_name.clone(),
            unit_price: details.unit_price.to_string(),
            receiving_unit: details.receiving_unit.clone(),
            quantity: details.quantity.to_string(),
        }
    }

    /// Coerce the text fields into typed details.
    ///
    /// Numbers go through the lenient parser; presence is not checked here.
    pub fn to_details(&self) -> ChargeDetails {
        ChargeDetails {
            date: self.date.trim().to_string(),
            providing_unit: self.providing_unit.trim().to_string(),
            service_name: self.service_name.trim().to_string(),
            unit_price: parse_lenient(&self.unit_price),
            receiving_unit: self.receiving_unit.trim().to_string(),
            quantity: parse_lenient(&self.quantity),
        }
    }
}
