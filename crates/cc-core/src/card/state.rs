use std::sync::Arc;

use crate::catalog::EntityRecord;
use crate::ports::{CatalogError, CatalogErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub fn flipped(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
}

/// Which face is shown, and whether the one-shot reveal already fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    pub face: Face,
    pub revealed: bool,
}

/// Card-level view of a failed load.
/// 卡片层面的加载失败信息。
///
/// The user only ever sees a generic message; `kind` and `detail` are kept
/// for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: CatalogErrorKind,
    pub detail: String,
}

impl From<&CatalogError> for LoadFailure {
    fn from(err: &CatalogError) -> Self {
        Self {
            kind: err.kind(),
            detail: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackLoad {
    #[default]
    Idle,
    Loading,
    Loaded(Arc<EntityRecord>),
    Error(LoadFailure),
}

impl BackLoad {
    pub fn is_loading(&self) -> bool {
        matches!(self, BackLoad::Loading)
    }

    pub fn record(&self) -> Option<&Arc<EntityRecord>> {
        match self {
            BackLoad::Loaded(record) => Some(record),
            _ => None,
        }
    }
}

/// Complete per-card state. Owned by exactly one card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardState {
    pub reveal: RevealState,
    pub back_load: BackLoad,
}

impl CardState {
    pub fn face(&self) -> Face {
        self.reveal.face
    }
}
