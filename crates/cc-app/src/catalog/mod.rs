pub mod fetch_cache;

pub use fetch_cache::EntityFetchCache;
