//! Flip card domain: face/reveal state and back-face load status.
//!
//! Both machines are pure `(state, event) -> (state, actions)` functions.
//! Side effects (spawning the fetch, notifying the host) are carried out
//! by `cc-app` based on the returned actions.

pub mod action;
pub mod event;
pub mod load_machine;
pub mod reveal_machine;
pub mod state;

pub use action::{BackLoadAction, RevealAction};
pub use event::BackLoadEvent;
pub use load_machine::BackLoadStateMachine;
pub use reveal_machine::RevealStateMachine;
pub use state::{BackLoad, CardState, Face, LoadFailure, RevealState};
