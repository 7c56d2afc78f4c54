//! # cc-core
//!
//! Core domain models and state machines for Creator Cards.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! The HTTP catalog adapter lives in `cc-infra`, the card orchestration in `cc-app`.

pub mod card;
pub mod catalog;
pub mod config;
pub mod creator;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use card::{BackLoad, CardState, Face, LoadFailure};
pub use catalog::EntityRecord;
pub use config::AppConfig;
pub use creator::{CardLabels, CreatorProfile};
pub use ids::EntityId;
pub use ports::{CatalogError, CatalogErrorKind, CatalogPort};
