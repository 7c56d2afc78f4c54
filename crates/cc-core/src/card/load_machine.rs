use tracing::warn;

use crate::card::action::BackLoadAction;
use crate::card::event::BackLoadEvent;
use crate::card::state::BackLoad;

/// Back-face load status transitions.
/// 背面数据加载状态机。
///
/// `LoadRequested` starts a fetch from `Idle` and, as the retry policy for
/// failed loads, from `Error`. It never starts a second fetch while one is
/// `Loading`, and `Loaded` is terminal.
pub struct BackLoadStateMachine;

impl BackLoadStateMachine {
    pub fn transition(state: BackLoad, event: BackLoadEvent) -> (BackLoad, Vec<BackLoadAction>) {
        match (state, event) {
            // ===== Start / Retry =====
            (BackLoad::Idle, BackLoadEvent::LoadRequested) => {
                (BackLoad::Loading, vec![BackLoadAction::StartFetch])
            }
            (BackLoad::Error(_), BackLoadEvent::LoadRequested) => {
                (BackLoad::Loading, vec![BackLoadAction::StartFetch])
            }
            (state @ BackLoad::Loading, BackLoadEvent::LoadRequested) => (state, vec![]),

            // ===== Outcome =====
            (BackLoad::Loading, BackLoadEvent::FetchSucceeded(record)) => {
                (BackLoad::Loaded(record), vec![])
            }
            (BackLoad::Loading, BackLoadEvent::FetchFailed(failure)) => {
                (BackLoad::Error(failure), vec![])
            }

            // ===== Terminal =====
            (state @ BackLoad::Loaded(_), _) => (state, vec![]),

            // ===== Invalid =====
            (state, event) => {
                warn!(?state, ?event, "invalid back load transition");
                (state, vec![])
            }
        }
    }
}
