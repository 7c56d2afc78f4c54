#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// First Front -> Back in the card's lifetime. This is the reveal signal.
    Revealed,
    /// Any later Front -> Back.
    Reentered,
    /// Back -> Front.
    Concealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackLoadAction {
    StartFetch,
}
