use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a catalog entry (a monster).
/// 图鉴条目的标识符，同时作为拉取与缓存的键。
///
/// Always a positive integer; zero and negative values are rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(NonZeroU32);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid entity id: {0}")]
pub struct InvalidEntityId(pub String);

impl EntityId {
    /// Returns `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroU32> for EntityId {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for EntityId {
    type Error = InvalidEntityId;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(EntityId::new)
            .ok_or_else(|| InvalidEntityId(value.to_string()))
    }
}

impl FromStr for EntityId {
    type Err = InvalidEntityId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(EntityId::new)
            .ok_or_else(|| InvalidEntityId(s.to_string()))
    }
}
