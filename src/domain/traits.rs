//! Domain traits defining contracts for external systems.

use super::error::DataSourceError;
use super::types::{ConnectionOutcome, EntryIndex};

/// Data source backing a client catalog.
///
/// Implementations own connection handling and entry storage; the catalog
/// only forwards to them. Every method takes `&self` so a single source can
/// be shared behind an `Arc` between the catalog and its owner.
pub trait DataSource: Send + Sync {
    /// Attempt to connect, reporting whether the source is ready or failed
    fn connect(&self) -> Result<ConnectionOutcome, DataSourceError>;

    /// Store `value` at `index`
    fn add_entry(&self, index: EntryIndex, value: &str) -> Result<(), DataSourceError>;

    /// Get the value stored at `index`
    fn get_entry(&self, index: EntryIndex) -> Result<String, DataSourceError>;

    /// Check whether an entry exists at `index`
    fn contains(&self, index: EntryIndex) -> Result<bool, DataSourceError>;
}
