//! Infrastructure layer implementations.

pub mod memory;
pub mod observability;

pub use memory::{InMemoryConfig, InMemoryDataSource};
pub use observability::{LogFormat, init_tracing};
