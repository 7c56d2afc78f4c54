//! Lazy, flip-revealing creator card.
//! 延迟加载的翻转卡片：首次翻到背面时才拉取收藏的怪兽数据。

use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use cc_core::card::{
    BackLoadAction, BackLoadEvent, BackLoadStateMachine, RevealAction, RevealStateMachine,
};
use cc_core::{BackLoad, CardState, CreatorProfile, EntityId, Face, LoadFailure};
use tokio::sync::watch;
use tracing::{debug, info_span, warn, Instrument};

use crate::card::render::BackFaceRenderer;
use crate::catalog::EntityFetchCache;

/// One creator card.
///
/// ## Behavior / 行为
/// - Starts on the front face with nothing loaded.
/// - The first flip to the back face fetches the creator's favorite entity
///   through the shared [`EntityFetchCache`].
/// - Re-entering the back face retries only when the previous load failed.
/// - Without a favorite the card never touches the cache.
///
/// State changes are published through a `watch` channel; hosts subscribe
/// and re-render on change. After [`LazyFlipCard::teardown`] (or drop) a late
/// fetch result is discarded.
pub struct LazyFlipCard {
    profile: CreatorProfile,
    cache: Arc<EntityFetchCache>,
    state: Arc<watch::Sender<CardState>>,
    live: Arc<AtomicBool>,
}

impl LazyFlipCard {
    pub fn new(profile: CreatorProfile, cache: Arc<EntityFetchCache>) -> Self {
        let (state, _) = watch::channel(CardState::default());
        Self {
            profile,
            cache,
            state: Arc::new(state),
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn profile(&self) -> &CreatorProfile {
        &self.profile
    }

    pub fn bound_id(&self) -> Option<EntityId> {
        self.profile.favorite_entity_id
    }

    pub fn state(&self) -> CardState {
        self.state.borrow().clone()
    }

    pub fn face(&self) -> Face {
        self.state.borrow().face()
    }

    pub fn back_load(&self) -> BackLoad {
        self.state.borrow().back_load.clone()
    }

    /// Observe every state change of this card.
    pub fn subscribe(&self) -> watch::Receiver<CardState> {
        self.state.subscribe()
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Toggle the shown face and return it.
    ///
    /// When this starts a load the fetch is spawned on the current tokio
    /// runtime, so it must be called from within one.
    /// A torn-down card still flips but never starts a load.
    pub fn flip(&self) -> Face {
        let bound_id = self.bound_id().filter(|_| self.is_live());
        let mut start_fetch = false;

        self.state.send_modify(|state| {
            let (reveal, action) = RevealStateMachine::flip(state.reveal);
            state.reveal = reveal;

            let wants_back = matches!(action, RevealAction::Revealed | RevealAction::Reentered);
            if wants_back && bound_id.is_some() {
                let (next, actions) = BackLoadStateMachine::transition(
                    mem::take(&mut state.back_load),
                    BackLoadEvent::LoadRequested,
                );
                state.back_load = next;
                start_fetch = actions.contains(&BackLoadAction::StartFetch);
            }
        });

        if let (true, Some(id)) = (start_fetch, bound_id) {
            self.spawn_load(id);
        }

        self.face()
    }

    /// Render the back face through the callback matching the load status.
    pub fn render_back<R: BackFaceRenderer>(&self, renderer: &R) -> R::Output {
        match self.back_load() {
            BackLoad::Idle => renderer.placeholder(&self.profile),
            BackLoad::Loading => renderer.loading(&self.profile),
            BackLoad::Loaded(record) => renderer.loaded(&self.profile, &record),
            BackLoad::Error(failure) => renderer.error(&self.profile, &failure),
        }
    }

    /// Mark the card dead. Results arriving afterwards are not applied.
    pub fn teardown(&self) {
        self.live.store(false, Ordering::Release);
    }

    fn spawn_load(&self, id: EntityId) {
        let cache = self.cache.clone();
        let state = self.state.clone();
        let live = self.live.clone();
        let span = info_span!("card.load", creator = %self.profile.name, entity_id = %id);

        tokio::spawn(
            async move {
                let event = match cache.get(id).await {
                    Ok(record) => BackLoadEvent::FetchSucceeded(record),
                    Err(err) => {
                        warn!(kind = %err.kind(), error = %err, "back face load failed");
                        BackLoadEvent::FetchFailed(LoadFailure::from(&err))
                    }
                };

                if !live.load(Ordering::Acquire) {
                    debug!("card torn down, discarding load result");
                    return;
                }

                state.send_modify(|state| {
                    let (next, _) =
                        BackLoadStateMachine::transition(mem::take(&mut state.back_load), event);
                    state.back_load = next;
                });
            }
            .instrument(span),
        );
    }
}

impl Drop for LazyFlipCard {
    fn drop(&mut self) {
        self.teardown();
    }
}
