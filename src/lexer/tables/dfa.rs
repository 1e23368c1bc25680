// src/lexer/tables/dfa.rs
use super::category::CharCategory;

// DFA states for `$([A-F]+|\d)*\W+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Start,
    AfterMarker,
    InRestrictedRun,
    Final,

    Error,
}
impl State {
    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn from_idx(i: usize) -> Option<Self> {
        ALL_STATES.get(i).copied()
    }

    #[inline]
    pub fn is_accepting(self) -> bool {
        self == FINAL
    }
}

pub const N_STATES: usize = 5;
pub const START: State = State::Start;
pub const FINAL: State = State::Final;
pub const ERROR: State = State::Error;

pub const ALL_STATES: [State; N_STATES] = [
    State::Start,
    State::AfterMarker,
    State::InRestrictedRun,
    State::Final,
    State::Error,
];

/// The table rows, one match arm per (state, category) pair.
///
/// `None` means "no entry"; the lookup turns that into `Error`. Keeping the
/// match exhaustive makes a new state or category a compile error here
/// instead of a silent hole in the table.
pub(crate) fn table_rule(from: State, cat: CharCategory) -> Option<State> {
    use CharCategory::*;
    use State::*;
    match (from, cat) {
        (Start, Marker) => Some(AfterMarker),
        (Start, Digit | RestrictedAlphaRun | NonAlnum | Other) => None,

        (AfterMarker, Digit) => Some(AfterMarker),
        (AfterMarker, RestrictedAlphaRun) => Some(InRestrictedRun),
        (AfterMarker, Marker | NonAlnum) => Some(Final),
        (AfterMarker, Other) => None,

        (InRestrictedRun, RestrictedAlphaRun) => Some(InRestrictedRun),
        (InRestrictedRun, Digit) => Some(AfterMarker),
        (InRestrictedRun, Marker | NonAlnum) => Some(Final),
        (InRestrictedRun, Other) => None,

        (Final, Marker | NonAlnum) => Some(Final),
        (Final, Digit | RestrictedAlphaRun | Other) => None,

        // absorbing sink
        (Error, _) => None,
    }
}
