use crate::card::action::RevealAction;
use crate::card::state::{Face, RevealState};

pub struct RevealStateMachine;

impl RevealStateMachine {
    /// Toggle the face. Flipping is always allowed, whatever the back load is doing.
    pub fn flip(state: RevealState) -> (RevealState, RevealAction) {
        let face = state.face.flipped();
        let action = match (face, state.revealed) {
            (Face::Back, false) => RevealAction::Revealed,
            (Face::Back, true) => RevealAction::Reentered,
            (Face::Front, _) => RevealAction::Concealed,
        };

        (
            RevealState {
                face,
                revealed: state.revealed || face == Face::Back,
            },
            action,
        )
    }
}
