//! Mock implementations for testing.
//!
//! The mock data source answers from canned responses configured up front
//! and records every call it receives, so tests can assert both on what the
//! catalog returned and on how it talked to its data source.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::{ConnectionOutcome, DataSource, DataSourceError, EntryIndex};

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// If true, operations will fail.
    pub should_fail: bool,
    /// Custom error message for failures.
    pub error_message: Option<String>,
}

impl MockConfig {
    /// Creates a config that always succeeds.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Creates a config that always fails.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            error_message: Some(message.into()),
        }
    }
}

/// A call received by [`MockDataSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceCall {
    Connect,
    AddEntry { index: EntryIndex, value: String },
    GetEntry(EntryIndex),
    Contains(EntryIndex),
}

/// Mock data source for testing.
///
/// Unconfigured lookups fall back to substitute defaults: `get_entry`
/// returns an empty string and `contains` returns `false`. `add_entry` is
/// recorded but does not change the canned responses.
///
/// # Example
///
/// ```ignore
/// use clients_catalog::domain::ConnectionOutcome;
/// use clients_catalog::test_utils::{DataSourceCall, MockDataSource};
///
/// let mock = MockDataSource::new()
///     .with_outcome(ConnectionOutcome::Failed)
///     .returning_entry(0, "client0")
///     .returning_contains(0, true);
///
/// assert_eq!(mock.received(&DataSourceCall::Connect), 0);
/// ```
pub struct MockDataSource {
    config: MockConfig,
    outcome: Mutex<ConnectionOutcome>,
    entries: HashMap<EntryIndex, String>,
    presence: HashMap<EntryIndex, bool>,
    calls: Mutex<Vec<DataSourceCall>>,
}

impl MockDataSource {
    /// Creates a new mock that connects `Ready` and has no canned entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    /// Creates a new mock with the given configuration.
    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            outcome: Mutex::new(ConnectionOutcome::Ready),
            entries: HashMap::new(),
            presence: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock whose every operation fails with `Backend(message)`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig::failure(message))
    }

    /// Sets the outcome reported by `connect`.
    #[must_use]
    pub fn with_outcome(self, outcome: ConnectionOutcome) -> Self {
        self.set_outcome(outcome);
        self
    }

    /// Cans the value `get_entry(index)` returns.
    #[must_use]
    pub fn returning_entry(mut self, index: EntryIndex, value: impl Into<String>) -> Self {
        self.entries.insert(index, value.into());
        self
    }

    /// Cans the answer `contains(index)` returns.
    #[must_use]
    pub fn returning_contains(mut self, index: EntryIndex, present: bool) -> Self {
        self.presence.insert(index, present);
        self
    }

    /// Changes the outcome reported by subsequent `connect` calls.
    pub fn set_outcome(&self, outcome: ConnectionOutcome) {
        *self.outcome.lock().unwrap_or_else(PoisonError::into_inner) = outcome;
    }

    /// Gets every call received, in order.
    pub fn calls(&self) -> Vec<DataSourceCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Gets the number of calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Counts how many times exactly `call` was received.
    pub fn received(&self, call: &DataSourceCall) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|c| *c == call)
            .count()
    }

    /// Forgets all recorded calls.
    pub fn clear_calls(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn record(&self, call: DataSourceCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    fn check_should_fail(&self) -> Result<(), DataSourceError> {
        if self.config.should_fail {
            let msg = self
                .config
                .error_message
                .clone()
                .unwrap_or_else(|| "Mock data source error".to_string());
            return Err(DataSourceError::Backend(msg));
        }
        Ok(())
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for MockDataSource {
    fn connect(&self) -> Result<ConnectionOutcome, DataSourceError> {
        self.record(DataSourceCall::Connect);
        self.check_should_fail()?;

        Ok(*self.outcome.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn add_entry(&self, index: EntryIndex, value: &str) -> Result<(), DataSourceError> {
        self.record(DataSourceCall::AddEntry {
            index,
            value: value.to_string(),
        });
        self.check_should_fail()
    }

    fn get_entry(&self, index: EntryIndex) -> Result<String, DataSourceError> {
        self.record(DataSourceCall::GetEntry(index));
        self.check_should_fail()?;

        Ok(self.entries.get(&index).cloned().unwrap_or_default())
    }

    fn contains(&self, index: EntryIndex) -> Result<bool, DataSourceError> {
        self.record(DataSourceCall::Contains(index));
        self.check_should_fail()?;

        Ok(self.presence.get(&index).copied().unwrap_or(false))
    }
}
