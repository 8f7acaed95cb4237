//! Domain layer containing core catalog types, traits, and error definitions.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ConfigError, DataSourceError};
pub use traits::DataSource;
pub use types::{CatalogState, CatalogStatus, ConnectionOutcome, EntryIndex};
