//! Ordered in-memory collection of charge records
//!
//! Insertion order is meaningful: it is the list order and it decides the
//! row order of the crosstab. Positional edits take the index shown to the
//! user, so out-of-range indexes are caller bugs and fail loudly.

use crate::error::{PricingError, PricingResult};
use crate::models::{ChargeId, ChargeRecord};

/// Owner of the ordered charge sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<ChargeRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records` in the given order
    pub fn from_records(records: Vec<ChargeRecord>) -> Self {
        Self { records }
    }

    /// Rebuild a store from a JSON snapshot produced by `to_snapshot`
    pub fn from_snapshot(json: &str) -> PricingResult<Self> {
        let records: Vec<ChargeRecord> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    /// Serialize the whole sequence as a JSON array
    pub fn to_snapshot(&self) -> PricingResult<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Add a record at the end
    pub fn append(&mut self, record: ChargeRecord) {
        self.records.push(record);
    }

    /// Add a batch at the end, keeping batch order
    pub fn append_many<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = ChargeRecord>,
    {
        self.records.extend(records);
    }

    /// Overwrite the record at `index`, returning the previous one
    pub fn replace_at(&mut self, index: usize, record: ChargeRecord) -> PricingResult<ChargeRecord> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(PricingError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, record))
    }

    /// Remove and return the record at `index`
    pub fn remove_at(&mut self, index: usize) -> PricingResult<ChargeRecord> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }

    /// All records in order
    pub fn list(&self) -> &[ChargeRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ChargeRecord> {
        self.records.get(index)
    }

    /// Position of the record with the given id
    pub fn position(&self, id: ChargeId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn check_index(&self, index: usize) -> PricingResult<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(PricingError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChargeDetails;

    fn record(service: &str, quantity: f64) -> ChargeRecord {
        ChargeRecord::create(ChargeDetails {
            date: "2024-01-01".into(),
            providing_unit: "IT".into(),
            service_name: service.into(),
            unit_price: 10.0,
            receiving_unit: "HQ".into(),
            quantity,
        })
    }

    fn services(store: &RecordStore) -> Vec<&str> {
        store.list().iter().map(|r| r.service_name()).collect()
    }

    #[test]
    fn test_append_keeps_order() {
        let mut store = RecordStore::new();
        store.append(record("a", 1.0));
        store.append(record("b", 1.0));
        assert_eq!(services(&store), ["a", "b"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_append_many_preserves_batch_order() {
        let mut store = RecordStore::new();
        store.append(record("first", 1.0));
        store.append_many(vec![record("x", 1.0), record("y", 1.0), record("z", 1.0)]);
        assert_eq!(services(&store), ["first", "x", "y", "z"]);
    }

    #[test]
    fn test_replace_at() {
        let mut store = RecordStore::from_records(vec![record("a", 1.0), record("b", 2.0)]);
        let old = store.replace_at(1, record("c", 5.0)).unwrap();

        assert_eq!(old.service_name(), "b");
        assert_eq!(services(&store), ["a", "c"]);
        assert_eq!(store.get(1).unwrap().total_amount(), 50.0);
    }

    #[test]
    fn test_replace_out_of_range() {
        let mut store = RecordStore::from_records(vec![record("a", 1.0)]);
        let err = store.replace_at(1, record("b", 1.0)).unwrap_err();
        assert!(matches!(err, PricingError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(services(&store), ["a"]);
    }

    #[test]
    fn test_remove_at() {
        let mut store =
            RecordStore::from_records(vec![record("a", 1.0), record("b", 1.0), record("c", 1.0)]);
        let removed = store.remove_at(1).unwrap();
        assert_eq!(removed.service_name(), "b");
        assert_eq!(services(&store), ["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = RecordStore::new();
        assert!(store.remove_at(0).unwrap_err().is_index_error());
    }

    #[test]
    fn test_position_by_id() {
        let a = record("a", 1.0);
        let b = record("b", 1.0);
        let b_id = b.id();
        let store = RecordStore::from_records(vec![a, b]);
        assert_eq!(store.position(b_id), Some(1));
        assert_eq!(store.position(ChargeId::new()), None);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let store = RecordStore::from_records(vec![record("a", 1.5), record("b", 2.0)]);
        let json = store.to_snapshot().unwrap();
        let restored = RecordStore::from_snapshot(&json).unwrap();
        assert_eq!(store, restored);
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        assert!(RecordStore::from_snapshot("{not json").is_err());
        assert!(RecordStore::from_snapshot("[]").unwrap().is_empty());
    }
}
