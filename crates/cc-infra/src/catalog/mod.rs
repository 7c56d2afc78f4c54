//! Remote catalog adapter.
//! 远程图鉴适配器。

pub mod http_client;
mod wire;

pub use http_client::{HttpCatalogClient, HttpCatalogConfig};
