//! Front-face data and localized labels supplied by the host shell.

use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// A creator shown on the front face of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorProfile {
    pub name: String,
    pub role: String,
    pub age: u32,
    pub bio: String,
    pub avatar: String,
    pub github: String,
    /// Without a favorite the card never contacts the catalog.
    pub favorite_entity_id: Option<EntityId>,
}

/// Localized strings for the back face and the flip control.
/// 背面与翻转按钮的本地化文案。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLabels {
    pub loading: String,
    pub error: String,
    pub placeholder: String,
    pub flip_hint: String,
    pub age_suffix: String,
}

impl CardLabels {
    pub fn defaults() -> Self {
        Self {
            loading: "Loading...".to_string(),
            error: "Couldn't load this monster".to_string(),
            placeholder: "No favorite monster yet".to_string(),
            flip_hint: "See my favorite monster".to_string(),
            age_suffix: "years".to_string(),
        }
    }

    /// Replace every empty label with its default.
    pub fn with_fallbacks(self) -> Self {
        let defaults = Self::defaults();
        let pick = |value: String, fallback: String| {
            if value.trim().is_empty() {
                fallback
            } else {
                value
            }
        };
        Self {
            loading: pick(self.loading, defaults.loading),
            error: pick(self.error, defaults.error),
            placeholder: pick(self.placeholder, defaults.placeholder),
            flip_hint: pick(self.flip_hint, defaults.flip_hint),
            age_suffix: pick(self.age_suffix, defaults.age_suffix),
        }
    }
}
