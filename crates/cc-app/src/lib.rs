//! Creator Cards application orchestration layer
//!
//! This crate binds the pure card state machines from `cc-core` to the
//! catalog port: a process-scoped [`EntityFetchCache`] shared by every card,
//! and one [`LazyFlipCard`] per creator.

pub mod card;
pub mod catalog;

pub use card::{BackFaceRenderer, LazyFlipCard};
pub use catalog::EntityFetchCache;
