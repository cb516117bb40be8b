//! Process-wide read-only Record Store.
//!
//! The Record Store is the immutable in-memory table of launch records loaded
//! once at startup, together with the payload bounds derived from it. It is
//! held in a global singleton so the binding layer can serve chart queries
//! without threading the table through every call; request-handling paths
//! only ever read it.

use std::path::Path;
use std::sync::OnceLock;

use crate::core::domain::LaunchRecord;
use crate::io::loaders::RecordLoader;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for Record Store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record store is not initialized; call init_record_store first")]
    NotInitialized,

    #[error("dataset contains no launch records")]
    EmptyDataset,

    #[error("failed to load launch records: {0}")]
    LoadFailed(String),
}

/// Immutable in-memory table of launch records plus load-time derived bounds.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
}

impl RecordStore {
    /// Build a store from loaded records, deriving the payload bounds.
    ///
    /// An empty record set is rejected: the payload bounds (and with them the
    /// slider default) would be undefined, so it is treated as a malformed
    /// dataset rather than a valid empty dashboard.
    pub fn new(records: Vec<LaunchRecord>) -> StoreResult<Self> {
        if records.is_empty() {
            return Err(StoreError::EmptyDataset);
        }

        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        for record in &records {
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
        }

        Ok(Self {
            records,
            min_payload,
            max_payload,
        })
    }

    /// The full ordered record set.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Minimum and maximum payload mass observed at load time.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.min_payload, self.max_payload)
    }

    /// Distinct launch sites in first-seen order. Drives the site selector
    /// options exposed to the dashboard.
    pub fn launch_sites(&self) -> Vec<String> {
        let mut sites: Vec<String> = Vec::new();
        for record in &self.records {
            if !sites.iter().any(|site| site == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }
        sites
    }
}

/// Global Record Store instance initialized once.
static STORE: OnceLock<RecordStore> = OnceLock::new();

/// Initialize the global Record Store from a dataset file (CSV or JSON).
///
/// This function is idempotent - calling it again after a successful
/// initialization is a no-op and returns success.
pub fn init_record_store(path: &Path) -> StoreResult<()> {
    if STORE.get().is_some() {
        return Ok(());
    }

    let loaded = RecordLoader::load_from_file(path)
        .map_err(|e| StoreError::LoadFailed(format!("{:#}", e)))?;
    let store = RecordStore::new(loaded.records)?;

    // A concurrent initializer may have won the race; either value came from
    // the same dataset, so losing the set is fine.
    let _ = STORE.set(store);

    Ok(())
}

/// Initialize the global Record Store from already-parsed records.
///
/// Intended for hosts that load the table themselves (or for tests).
pub fn init_record_store_with_records(records: Vec<LaunchRecord>) -> StoreResult<()> {
    if STORE.get().is_some() {
        return Ok(());
    }

    let store = RecordStore::new(records)?;
    let _ = STORE.set(store);

    Ok(())
}

/// Get a reference to the global Record Store.
pub fn record_store() -> StoreResult<&'static RecordStore> {
    STORE.get().ok_or(StoreError::NotInitialized)
}
