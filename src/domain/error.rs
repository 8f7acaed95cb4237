//! Error types for data sources and configuration.

use thiserror::Error;

use super::types::EntryIndex;

/// Errors raised by a [`DataSource`](super::traits::DataSource) implementation.
///
/// The catalog never constructs these itself; it hands them back to its
/// caller exactly as the data source produced them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Data source is not connected")]
    NotConnected,
    #[error("Entry not found: {0}")]
    EntryNotFound(EntryIndex),
    #[error("Capacity exceeded: store holds at most {limit} entries")]
    CapacityExceeded { limit: usize },
    #[error("Backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for ConfigError {
    fn from(err: validator::ValidationErrors) -> Self {
        ConfigError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_conversion() {
        use validator::Validate;

        #[derive(Validate)]
        struct TestStruct {
            #[validate(range(min = 1))]
            val: usize,
        }

        let s = TestStruct { val: 0 };
        let err = s.validate().unwrap_err();
        let config_err = ConfigError::from(err);

        assert!(matches!(config_err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_data_source_error_display() {
        let err = DataSourceError::Connection("refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: refused");

        let err = DataSourceError::NotConnected;
        assert_eq!(err.to_string(), "Data source is not connected");

        let err = DataSourceError::EntryNotFound(7);
        assert_eq!(err.to_string(), "Entry not found: 7");

        let err = DataSourceError::CapacityExceeded { limit: 2 };
        assert_eq!(
            err.to_string(),
            "Capacity exceeded: store holds at most 2 entries"
        );

        let err = DataSourceError::Backend("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Backend error: lock poisoned");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "CATALOG_MAX_ENTRIES".to_string(),
            message: "not a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'CATALOG_MAX_ENTRIES': not a number"
        );

        let err = ConfigError::Validation("max_entries: range".to_string());
        assert_eq!(err.to_string(), "Validation failed: max_entries: range");
    }

    #[test]
    fn test_data_source_error_is_comparable() {
        assert_eq!(
            DataSourceError::EntryNotFound(3),
            DataSourceError::EntryNotFound(3)
        );
        assert_ne!(DataSourceError::NotConnected, DataSourceError::EntryNotFound(3));
    }
}
