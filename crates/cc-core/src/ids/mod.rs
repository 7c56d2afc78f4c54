//! ID type wrappers for type safety.

pub mod entity_id;

pub use entity_id::{EntityId, InvalidEntityId};
