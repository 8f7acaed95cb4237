//! Client catalog facade.
//!
//! This module contains the catalog that fronts a [`DataSource`], forwarding
//! entry operations to it and tracking the outcome of connect attempts.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, instrument, warn};

use crate::domain::{CatalogStatus, ConnectionOutcome, DataSource, DataSourceError, EntryIndex};

/// Catalog of clients backed by a shared data source.
///
/// The catalog adds no behaviour of its own to entry operations: each call
/// reaches the data source exactly once with the same arguments and its
/// result, success or error, is returned untouched. The only state it keeps
/// are two flags recording which connect outcomes have been observed.
///
/// # Example
///
/// ```ignore
/// let source = Arc::new(InMemoryDataSource::new(InMemoryConfig::default()));
/// let catalog = ClientsCatalog::new(source);
///
/// catalog.initialize()?;
/// catalog.add(0, "client0")?;
/// assert_eq!(catalog.get(0)?, "client0");
/// ```
pub struct ClientsCatalog {
    data_source: Arc<dyn DataSource>,
    is_ready: AtomicBool,
    failed: AtomicBool,
}

impl ClientsCatalog {
    /// Creates a new catalog over `data_source` with both flags cleared.
    #[must_use]
    pub fn new(data_source: Arc<dyn DataSource>) -> Self {
        Self {
            data_source,
            is_ready: AtomicBool::new(false),
            failed: AtomicBool::new(false),
        }
    }

    /// Connects the underlying data source and records the outcome.
    ///
    /// `Ready` sets [`is_ready`](Self::is_ready) and `Failed` sets
    /// [`failed`](Self::failed); the other flag is left as it was. Flags are
    /// never cleared, so a later attempt with the opposite outcome leaves
    /// both set.
    ///
    /// # Errors
    ///
    /// Returns the data source's error unchanged if the connect attempt
    /// itself faults. No flag changes in that case.
    #[instrument(skip(self))]
    pub fn initialize(&self) -> Result<ConnectionOutcome, DataSourceError> {
        let outcome = self.data_source.connect()?;

        match outcome {
            ConnectionOutcome::Ready => {
                self.is_ready.store(true, Ordering::SeqCst);
                info!("Data source ready");
            }
            ConnectionOutcome::Failed => {
                self.failed.store(true, Ordering::SeqCst);
                warn!("Data source failed to connect");
            }
        }

        Ok(outcome)
    }

    /// Stores `value` at `index` in the data source.
    #[instrument(skip(self, value))]
    pub fn add(&self, index: EntryIndex, value: &str) -> Result<(), DataSourceError> {
        debug!(value_len = value.len(), "Adding entry");
        self.data_source.add_entry(index, value)
    }

    /// Gets the value the data source holds for `index`.
    #[instrument(skip(self))]
    pub fn get(&self, index: EntryIndex) -> Result<String, DataSourceError> {
        self.data_source.get_entry(index)
    }

    /// Checks whether the data source holds an entry at `index`.
    #[instrument(skip(self))]
    pub fn has(&self, index: EntryIndex) -> Result<bool, DataSourceError> {
        self.data_source.contains(index)
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready.load(Ordering::SeqCst)
    }

    pub fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    /// Snapshot of both connection flags.
    pub fn status(&self) -> CatalogStatus {
        CatalogStatus::new(self.is_ready(), self.failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogState;
    use crate::test_utils::{DataSourceCall, MockDataSource};

    #[test]
    fn test_new_catalog_has_no_flags_set() {
        let source = Arc::new(MockDataSource::new());
        let catalog = ClientsCatalog::new(source.clone());

        assert!(!catalog.is_ready());
        assert!(!catalog.failed());
        assert_eq!(catalog.status().state, CatalogState::Pending);

        // Construction alone must not touch the data source
        assert_eq!(source.call_count(), 0);
    }

    #[test]
    fn test_initialize_ready() {
        let source = Arc::new(MockDataSource::new().with_outcome(ConnectionOutcome::Ready));
        let catalog = ClientsCatalog::new(source.clone());

        let outcome = catalog.initialize().unwrap();

        assert_eq!(outcome, ConnectionOutcome::Ready);
        assert!(catalog.is_ready());
        assert!(!catalog.failed());
        assert_eq!(source.received(&DataSourceCall::Connect), 1);
    }

    #[test]
    fn test_initialize_failed() {
        let source = Arc::new(MockDataSource::new().with_outcome(ConnectionOutcome::Failed));
        let catalog = ClientsCatalog::new(source.clone());

        let outcome = catalog.initialize().unwrap();

        assert_eq!(outcome, ConnectionOutcome::Failed);
        assert!(catalog.failed());
        assert!(!catalog.is_ready());
        assert_eq!(source.received(&DataSourceCall::Connect), 1);
    }

    #[test]
    fn test_initialize_fault_propagates_and_leaves_flags() {
        let source = Arc::new(MockDataSource::failing("connection refused"));
        let catalog = ClientsCatalog::new(source.clone());

        let result = catalog.initialize();

        assert_eq!(
            result.unwrap_err(),
            DataSourceError::Backend("connection refused".to_string())
        );
        assert!(!catalog.is_ready());
        assert!(!catalog.failed());
        assert_eq!(source.received(&DataSourceCall::Connect), 1);
    }

    #[test]
    fn test_flags_are_never_cleared() {
        let source = Arc::new(MockDataSource::new());
        let catalog = ClientsCatalog::new(source.clone());

        catalog.initialize().unwrap();
        source.set_outcome(ConnectionOutcome::Failed);
        catalog.initialize().unwrap();

        assert!(catalog.is_ready());
        assert!(catalog.failed());
        assert_eq!(catalog.status().state, CatalogState::Conflicted);
    }

    #[test]
    fn test_get_forwards_canned_values() {
        let source = Arc::new(
            MockDataSource::new()
                .returning_entry(0, "client0")
                .returning_entry(1, "client1")
                .returning_entry(2, "client2"),
        );
        let catalog = ClientsCatalog::new(source.clone());
        catalog.initialize().unwrap();

        assert_eq!(catalog.get(0).unwrap(), "client0");
        assert_eq!(catalog.get(1).unwrap(), "client1");
        assert_eq!(catalog.get(2).unwrap(), "client2");

        assert_eq!(source.received(&DataSourceCall::GetEntry(0)), 1);
        assert_eq!(source.received(&DataSourceCall::GetEntry(1)), 1);
        assert_eq!(source.received(&DataSourceCall::GetEntry(2)), 1);
    }

    #[test]
    fn test_get_returns_source_default_for_unknown_index() {
        let source = Arc::new(MockDataSource::new());
        let catalog = ClientsCatalog::new(source);

        assert_eq!(catalog.get(42).unwrap(), "");
    }

    #[test]
    fn test_has_forwards_predicate() {
        let source = Arc::new(
            MockDataSource::new()
                .returning_contains(0, true)
                .returning_contains(1, false)
                .returning_contains(2, true),
        );
        let catalog = ClientsCatalog::new(source.clone());

        assert!(catalog.has(0).unwrap());
        assert!(!catalog.has(1).unwrap());
        assert!(catalog.has(2).unwrap());

        assert_eq!(source.received(&DataSourceCall::Contains(1)), 1);
    }

    #[test]
    fn test_add_forwards_arguments_once() {
        let source = Arc::new(MockDataSource::new());
        let catalog = ClientsCatalog::new(source.clone());

        catalog.add(5, "client5").unwrap();

        assert_eq!(
            source.calls(),
            vec![DataSourceCall::AddEntry {
                index: 5,
                value: "client5".to_string(),
            }]
        );
    }

    #[test]
    fn test_entry_errors_propagate_unchanged() {
        let source = Arc::new(MockDataSource::failing("disk on fire"));
        let catalog = ClientsCatalog::new(source);

        let expected = DataSourceError::Backend("disk on fire".to_string());
        assert_eq!(catalog.add(0, "x").unwrap_err(), expected);
        assert_eq!(catalog.get(0).unwrap_err(), expected);
        assert_eq!(catalog.has(0).unwrap_err(), expected);
    }

    #[test]
    fn test_operations_before_initialize_are_forwarded() {
        let source = Arc::new(MockDataSource::new().returning_contains(3, true));
        let catalog = ClientsCatalog::new(source.clone());

        assert!(catalog.has(3).unwrap());
        assert_eq!(source.received(&DataSourceCall::Connect), 0);
        assert_eq!(source.received(&DataSourceCall::Contains(3)), 1);
    }
}
