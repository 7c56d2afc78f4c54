pub mod record;

pub use record::EntityRecord;
