//! Port interfaces for the application layer
//!
//! Ports define the contract between the card orchestration (`cc-app`)
//! and infrastructure implementations (`cc-infra`). The core only knows
//! the shape of a catalog lookup, never how it travels over the wire.

pub mod catalog;

pub use catalog::{CatalogError, CatalogErrorKind, CatalogPort};
