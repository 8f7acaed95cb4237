//! In-memory data source implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::domain::{ConfigError, ConnectionOutcome, DataSource, DataSourceError, EntryIndex};

const AVAILABLE_VAR: &str = "CATALOG_STORE_AVAILABLE";
const MAX_ENTRIES_VAR: &str = "CATALOG_MAX_ENTRIES";
const REQUIRE_CONNECTION_VAR: &str = "CATALOG_REQUIRE_CONNECTION";

/// In-memory store configuration
#[derive(Debug, Clone, Validate)]
pub struct InMemoryConfig {
    /// Whether connect attempts report `Ready` (otherwise `Failed`)
    pub available: bool,
    /// Maximum number of distinct entries held at once
    #[validate(range(min = 1, max = 1_000_000))]
    pub max_entries: usize,
    /// Reject entry operations until a connect attempt succeeds
    pub require_connection: bool,
}

impl Default for InMemoryConfig {
    fn default() -> Self {
        Self {
            available: true,
            max_entries: 1024,
            require_connection: true,
        }
    }
}

impl InMemoryConfig {
    /// Create config from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a variable is set but cannot be parsed, or
    /// if the resulting config fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup, falling back to defaults
    /// for missing keys.
    ///
    /// # Errors
    ///
    /// See [`InMemoryConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let available = match lookup(AVAILABLE_VAR) {
            Some(raw) => parse_bool(AVAILABLE_VAR, &raw)?,
            None => defaults.available,
        };
        let max_entries = match lookup(MAX_ENTRIES_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: MAX_ENTRIES_VAR.to_string(),
                    message: e.to_string(),
                })?,
            None => defaults.max_entries,
        };
        let require_connection = match lookup(REQUIRE_CONNECTION_VAR) {
            Some(raw) => parse_bool(REQUIRE_CONNECTION_VAR, &raw)?,
            None => defaults.require_connection,
        };

        let config = Self {
            available,
            max_entries,
            require_connection,
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got '{other}'"),
        }),
    }
}

/// Data source holding entries in a process-local map
///
/// Writes to an existing index overwrite it. Reads of an absent index fail
/// with `EntryNotFound` rather than returning a placeholder.
pub struct InMemoryDataSource {
    entries: Mutex<HashMap<EntryIndex, String>>,
    connected: AtomicBool,
    config: InMemoryConfig,
}

impl InMemoryDataSource {
    /// Create a new, empty store with the given configuration
    #[must_use]
    pub fn new(config: InMemoryConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            connected: AtomicBool::new(false),
            config,
        }
    }

    /// Create a new, empty store with default configuration
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(InMemoryConfig::default())
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Number of entries currently stored
    ///
    /// # Errors
    ///
    /// Returns `Backend` if the entry map lock is poisoned.
    pub fn len(&self) -> Result<usize, DataSourceError> {
        Ok(self.lock_entries()?.len())
    }

    /// # Errors
    ///
    /// Returns `Backend` if the entry map lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, DataSourceError> {
        Ok(self.lock_entries()?.is_empty())
    }

    fn lock_entries(&self) -> Result<MutexGuard<'_, HashMap<EntryIndex, String>>, DataSourceError> {
        self.entries
            .lock()
            .map_err(|_| DataSourceError::Backend("entry store lock poisoned".to_string()))
    }

    fn ensure_connected(&self) -> Result<(), DataSourceError> {
        if self.config.require_connection && !self.is_connected() {
            return Err(DataSourceError::NotConnected);
        }
        Ok(())
    }
}

impl Default for InMemoryDataSource {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DataSource for InMemoryDataSource {
    #[instrument(skip(self))]
    fn connect(&self) -> Result<ConnectionOutcome, DataSourceError> {
        if !self.config.available {
            warn!("In-memory store is configured as unavailable");
            return Ok(ConnectionOutcome::Failed);
        }

        self.connected.store(true, Ordering::SeqCst);
        info!(max_entries = self.config.max_entries, "In-memory store connected");
        Ok(ConnectionOutcome::Ready)
    }

    #[instrument(skip(self, value))]
    fn add_entry(&self, index: EntryIndex, value: &str) -> Result<(), DataSourceError> {
        self.ensure_connected()?;
        let mut entries = self.lock_entries()?;

        if !entries.contains_key(&index) && entries.len() >= self.config.max_entries {
            warn!(limit = self.config.max_entries, "Entry store is full");
            return Err(DataSourceError::CapacityExceeded {
                limit: self.config.max_entries,
            });
        }

        let replaced = entries.insert(index, value.to_string()).is_some();
        debug!(replaced, "Entry stored");
        Ok(())
    }

    #[instrument(skip(self))]
    fn get_entry(&self, index: EntryIndex) -> Result<String, DataSourceError> {
        self.ensure_connected()?;
        self.lock_entries()?
            .get(&index)
            .cloned()
            .ok_or(DataSourceError::EntryNotFound(index))
    }

    #[instrument(skip(self))]
    fn contains(&self, index: EntryIndex) -> Result<bool, DataSourceError> {
        self.ensure_connected()?;
        Ok(self.lock_entries()?.contains_key(&index))
    }
}
