use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::catalog::EntityRecord;
use crate::ids::EntityId;

/// Failure of a single catalog lookup.
/// 单次图鉴查询失败。
///
/// The value is `Clone` so one outcome can be handed to every caller
/// attached to the same in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The service has no entry for this id.
    #[error("entity {0} not found in catalog")]
    NotFound(EntityId),

    /// Network failure, timeout or unexpected status.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// Response could not be turned into an [`EntityRecord`].
    #[error("malformed catalog response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogErrorKind {
    NotFound,
    Unavailable,
    Malformed,
}

impl CatalogErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogErrorKind::NotFound => "not_found",
            CatalogErrorKind::Unavailable => "unavailable",
            CatalogErrorKind::Malformed => "malformed",
        }
    }
}

impl Display for CatalogErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CatalogError {
    pub fn kind(&self) -> CatalogErrorKind {
        match self {
            CatalogError::NotFound(_) => CatalogErrorKind::NotFound,
            CatalogError::Unavailable(_) => CatalogErrorKind::Unavailable,
            CatalogError::Malformed(_) => CatalogErrorKind::Malformed,
        }
    }
}

/// Remote catalog lookup.
///
/// Implementations issue exactly one request per call and never retry;
/// retry policy belongs to the caller. Implementations are responsible for
/// bounding their own call duration and reporting a timeout as
/// [`CatalogError::Unavailable`].
#[async_trait::async_trait]
pub trait CatalogPort: Send + Sync {
    async fn fetch(&self, id: EntityId) -> Result<EntityRecord, CatalogError>;
}
