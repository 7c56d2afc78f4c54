use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// Normalized catalog payload for one entity.
/// 规范化后的图鉴数据，拉取后不可变。
///
/// Records are immutable once fetched and are shared between cards as
/// `Arc<EntityRecord>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: EntityId,
    /// Display name, already normalized for presentation.
    pub name: String,
    /// Sprite image URL, when the catalog has one.
    pub sprite: Option<String>,
    /// Categorical attributes in catalog order (e.g. `["grass", "poison"]`).
    pub types: Vec<String>,
    pub height: Option<u32>,
    pub weight: Option<u32>,
}

impl EntityRecord {
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}
