//! Ledger controller
//!
//! Owns the record store and the persistence adapter. Every mutation is
//! followed by a full snapshot write; a failed write is logged and the
//! in-memory state stays authoritative for the rest of the session.

use std::io::Read;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::error::{PricingError, PricingResult};
use crate::export::{self, HeaderLanguage};
use crate::import;
use crate::models::charge::today_iso_date;
use crate::models::{ChargeInput, ChargeRecord};
use crate::reports::Crosstab;
use crate::services::validate;
use crate::storage::{KeyValueStore, RecordStore};

/// A rendered export, ready to be written wherever the caller likes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name, e.g. `transfer_pricing_2024-01-31.csv`
    pub filename: String,
    pub contents: String,
}

/// Session state for one set of charges
pub struct Ledger<S: KeyValueStore> {
    store: RecordStore,
    adapter: S,
    key: String,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Open a ledger, hydrating from whatever `adapter` holds under `key`.
    ///
    /// Unreadable or corrupt snapshots are logged and the ledger starts empty.
    pub fn open(adapter: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let store = hydrate(&adapter, &key);
        debug!(key = %key, records = store.len(), "ledger opened");

        Self {
            store,
            adapter,
            key,
        }
    }

    /// Validate a form and append it as a new charge
    pub fn submit(&mut self, input: &ChargeInput) -> PricingResult<ChargeRecord> {
        let mut details = validate(input)?;
        if details.date.is_empty() {
            details.date = today_iso_date();
        }

        let record = ChargeRecord::create(details);
        self.store.append(record.clone());
        self.persist();

        Ok(record)
    }

    /// Replace the charge at `index` with the edited form, keeping its id
    pub fn edit(&mut self, index: usize, input: &ChargeInput) -> PricingResult<ChargeRecord> {
        let id = self
            .store
            .get(index)
            .map(|r| r.id())
            .ok_or(PricingError::IndexOutOfRange {
                index,
                len: self.store.len(),
            })?;

        let mut details = validate(input)?;
        if details.date.is_empty() {
            details.date = today_iso_date();
        }

        let record = ChargeRecord::new(id, details);
        self.store.replace_at(index, record.clone())?;
        self.persist();

        Ok(record)
    }

    /// Remove the charge at `index`
    pub fn delete(&mut self, index: usize) -> PricingResult<ChargeRecord> {
        let removed = self.store.remove_at(index)?;
        self.persist();
        Ok(removed)
    }

    /// Import a CSV batch. Either every accepted line is added or none is.
    ///
    /// Returns the number of records added.
    pub fn import<R: Read>(&mut self, input: R) -> PricingResult<usize> {
        let batch = import::decode(input)?;
        let count = batch.len();

        self.store.append_many(batch);
        self.persist();

        info!(count, total = self.store.len(), "imported charges");
        Ok(count)
    }

    /// Render every charge as CSV with a dated file name
    pub fn export(&self, language: HeaderLanguage, prefix: &str) -> PricingResult<ExportFile> {
        if self.store.is_empty() {
            return Err(PricingError::Export("no records to export".to_string()));
        }

        let contents = export::encode(self.store.list(), language)?;
        let filename = export::export_filename(prefix, Utc::now().date_naive());
        info!(records = self.store.len(), filename = %filename, "exported charges");

        Ok(ExportFile { filename, contents })
    }

    /// Pivot summary of the current charges
    pub fn crosstab(&self) -> Crosstab {
        Crosstab::aggregate(self.store.list())
    }

    pub fn records(&self) -> &[ChargeRecord] {
        self.store.list()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn adapter(&self) -> &S {
        &self.adapter
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn persist(&self) {
        let result = self
            .store
            .to_snapshot()
            .and_then(|snapshot| self.adapter.set(&self.key, &snapshot));

        if let Err(e) = result {
            error!(key = %self.key, error = %e, "failed to persist charges");
        }
    }
}

fn hydrate<S: KeyValueStore>(adapter: &S, key: &str) -> RecordStore {
    let snapshot = match adapter.get(key) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => return RecordStore::new(),
        Err(e) => {
            error!(key = %key, error = %e, "failed to load charges, starting empty");
            return RecordStore::new();
        }
    };

    RecordStore::from_snapshot(&snapshot).unwrap_or_else(|e| {
        warn!(key = %key, error = %e, "stored charges are corrupt, starting empty");
        RecordStore::new()
    })
}
