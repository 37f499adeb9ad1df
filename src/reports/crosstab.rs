//! Crosstab Report
//!
//! Pivots charges into one row per (service, providing unit, unit price)
//! with a column per receiving unit holding the summed quantity.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::ChargeRecord;

/// One pivot row: a service sold by one unit at one price
#[derive(Debug, Clone, PartialEq)]
pub struct CrosstabRow {
    pub service_name: String,
    pub providing_unit: String,
    pub unit_price: f64,
    /// Receiving unit -> summed quantity
    pub receivers: BTreeMap<String, f64>,
}

impl CrosstabRow {
    /// Summed quantity for `receiver`, or `None` if it never received this row
    pub fn cell(&self, receiver: &str) -> Option<f64> {
        self.receivers.get(receiver).copied()
    }

    /// Quantity across all receivers
    pub fn total_quantity(&self) -> f64 {
        self.receivers.values().sum()
    }
}

/// Grouping key. Prices compare by bit pattern so that equal prices merge
/// exactly and nothing merges by tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RowKey<'a> {
    service_name: &'a str,
    providing_unit: &'a str,
    price_bits: u64,
}

impl<'a> RowKey<'a> {
    fn of(record: &'a ChargeRecord) -> Self {
        Self {
            service_name: record.service_name(),
            providing_unit: record.providing_unit(),
            price_bits: price_bits(record.unit_price()),
        }
    }
}

/// -0.0 and 0.0 are the same price
fn price_bits(price: f64) -> u64 {
    if price == 0.0 {
        0.0f64.to_bits()
    } else {
        price.to_bits()
    }
}

/// Pivot of a record set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Crosstab {
    /// Distinct receiving units, sorted
    pub columns: Vec<String>,
    /// Rows in first-seen order of their key
    pub rows: Vec<CrosstabRow>,
}

impl Crosstab {
    /// Aggregate `records` in a single pass
    pub fn aggregate(records: &[ChargeRecord]) -> Self {
        let mut rows: Vec<CrosstabRow> = Vec::new();
        let mut index: HashMap<RowKey<'_>, usize> = HashMap::new();
        let mut columns: BTreeSet<&str> = BTreeSet::new();

        for record in records {
            let slot = *index.entry(RowKey::of(record)).or_insert_with(|| {
                rows.push(CrosstabRow {
                    service_name: record.service_name().to_string(),
                    providing_unit: record.providing_unit().to_string(),
                    unit_price: record.unit_price(),
                    receivers: BTreeMap::new(),
                });
                rows.len() - 1
            });

            *rows[slot]
                .receivers
                .entry(record.receiving_unit().to_string())
                .or_insert(0.0) += record.quantity();

            columns.insert(record.receiving_unit());
        }

        Self {
            columns: columns.into_iter().map(str::to_string).collect(),
            rows,
        }
    }

    /// One cell per column for `row`, `None` where the receiver is absent
    pub fn cells<'a>(&'a self, row: &'a CrosstabRow) -> impl Iterator<Item = Option<f64>> + 'a {
        self.columns.iter().map(move |column| row.cell(column))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
