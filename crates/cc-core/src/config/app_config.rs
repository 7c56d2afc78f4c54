use tracing::warn;

use crate::creator::{CardLabels, CreatorProfile};
use crate::ids::EntityId;

/// Remote catalog settings (pure data, no defaults)
/// 远程图鉴配置（纯数据，无默认值）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL, e.g. `https://pokeapi.co/api/v2` (may be empty - this is a fact)
    pub base_url: String,
    /// Resource path segment; empty means "use the adapter default"
    pub resource: String,
    /// Request timeout in milliseconds; 0 means "use the adapter default"
    pub timeout_ms: u64,
}

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    /// Labels as written in the file; empty strings are kept as-is.
    pub labels: CardLabels,
    pub creators: Vec<CreatorProfile>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing values map to empty strings / zero. A `favorite_entity_id`
    /// that is not a positive integer is dropped (the card then never fetches).
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let catalog = toml_value.get("catalog");
        let labels = toml_value.get("labels");

        let creators = toml_value
            .get("creators")
            .and_then(|c| c.as_array())
            .map(|entries| entries.iter().map(creator_from_toml).collect())
            .unwrap_or_default();

        Ok(Self {
            catalog: CatalogConfig {
                base_url: str_field(catalog, "base_url"),
                resource: str_field(catalog, "resource"),
                timeout_ms: catalog
                    .and_then(|c| c.get("timeout_ms"))
                    .and_then(|v| v.as_integer())
                    .map(|ms| ms.max(0) as u64)
                    .unwrap_or(0),
            },
            labels: CardLabels {
                loading: str_field(labels, "loading"),
                error: str_field(labels, "error"),
                placeholder: str_field(labels, "placeholder"),
                flip_hint: str_field(labels, "flip_hint"),
                age_suffix: str_field(labels, "age_suffix"),
            },
            creators,
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            catalog: CatalogConfig {
                base_url: String::new(),
                resource: String::new(),
                timeout_ms: 0,
            },
            labels: CardLabels {
                loading: String::new(),
                error: String::new(),
                placeholder: String::new(),
                flip_hint: String::new(),
                age_suffix: String::new(),
            },
            creators: Vec::new(),
        }
    }
}

fn str_field(table: Option<&toml::Value>, key: &str) -> String {
    table
        .and_then(|t| t.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

fn creator_from_toml(entry: &toml::Value) -> CreatorProfile {
    let name = str_field(Some(entry), "name");
    let favorite_entity_id = entry
        .get("favorite_entity_id")
        .and_then(|v| v.as_integer())
        .and_then(|raw| match EntityId::try_from(raw) {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(creator = %name, error = %err, "ignoring favorite entity id");
                None
            }
        });

    CreatorProfile {
        role: str_field(Some(entry), "role"),
        age: entry
            .get("age")
            .and_then(|v| v.as_integer())
            .and_then(|age| u32::try_from(age).ok())
            .unwrap_or(0),
        bio: str_field(Some(entry), "bio"),
        avatar: str_field(Some(entry), "avatar"),
        github: str_field(Some(entry), "github"),
        favorite_entity_id,
        name,
    }
}
