//! Test utilities and mock implementations.
//!
//! This module provides a reusable test double for the `DataSource` trait
//! for use in unit and integration tests.

pub mod mocks;

pub use mocks::{DataSourceCall, MockConfig, MockDataSource};
