//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No default value calculation / 禁止默认值计算**
//! ❌ **No file I/O / 禁止文件读写**
//!
//! Catalog defaults (resource segment, timeout) are applied by the adapter
//! that consumes them, label fallbacks by [`crate::CardLabels::with_fallbacks`].

pub mod app_config;

pub use app_config::{AppConfig, CatalogConfig};
