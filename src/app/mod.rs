//! Application layer containing the catalog facade.

pub mod catalog;

pub use catalog::ClientsCatalog;
