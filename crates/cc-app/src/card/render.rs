use cc_core::{CreatorProfile, EntityRecord, LoadFailure};

/// Render callbacks supplied by the host, one per back-face variant.
/// 宿主提供的背面渲染回调，每种加载状态一个。
///
/// The card picks the callback matching its current load status; the host
/// decides what a "view" is (`Output`).
pub trait BackFaceRenderer {
    type Output;

    /// No favorite bound, or the back face has not been requested yet.
    fn placeholder(&self, creator: &CreatorProfile) -> Self::Output;

    fn loading(&self, creator: &CreatorProfile) -> Self::Output;

    fn loaded(&self, creator: &CreatorProfile, record: &EntityRecord) -> Self::Output;

    fn error(&self, creator: &CreatorProfile, failure: &LoadFailure) -> Self::Output;
}
