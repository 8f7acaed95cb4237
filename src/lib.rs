//! Clients Catalog
//!
//! A client catalog facade over an injectable data source, demonstrating
//! testable architecture through trait-based abstraction and dependency
//! injection.
//!
//! # Architecture Overview
//!
//! This crate is organized into three main layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               Application Layer              │
//! │   ClientsCatalog: forwarding + ready flags   │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │      DataSource trait, types, errors         │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │   In-memory data source, tracing setup       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Key Features
//!
//! - **Trait-based abstraction**: The catalog only knows the `DataSource` trait
//! - **Dependency injection**: The data source is handed to the catalog's constructor
//! - **Testability**: `MockDataSource` answers from canned responses and records calls
//! - **Error handling**: Data source errors reach the caller unchanged
//! - **Logging**: Structured logging with `tracing`
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use clients_catalog::app::ClientsCatalog;
//! use clients_catalog::infra::{InMemoryConfig, InMemoryDataSource};
//!
//! let source = Arc::new(InMemoryDataSource::new(InMemoryConfig::from_env()?));
//! let catalog = ClientsCatalog::new(source);
//!
//! catalog.initialize()?;
//! if catalog.is_ready() {
//!     catalog.add(0, "client0")?;
//!     assert!(catalog.has(0)?);
//! }
//! ```

pub mod app;
pub mod domain;
pub mod infra;

// Test utilities are available in tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
