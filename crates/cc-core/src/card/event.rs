use std::sync::Arc;

use crate::card::state::LoadFailure;
use crate::catalog::EntityRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackLoadEvent {
    // 翻到背面：首次揭示或从错误状态重新进入
    LoadRequested,

    // 拉取结果回调
    FetchSucceeded(Arc<EntityRecord>),
    FetchFailed(LoadFailure),
}
