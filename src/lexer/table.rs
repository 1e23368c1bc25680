// src/lexer/table.rs
// Table-driven automaton: classify each char, then look up the next state.

use crate::lexer::{
    Run,
    tables::{State, TransitionTable, classify, table},
};

/// Walk `input` over an explicit table.
pub fn run_with(t: &TransitionTable, input: &str) -> Run {
    let mut state = State::Start;

    for (i, c) in input.chars().enumerate() {
        state = t.next(state, classify(c));
        if state == State::Error {
            log::trace!("table: rejected {input:?} at char {i} ({c:?})");
            return Run {
                state,
                failed_at: Some(i),
            };
        }
    }

    Run {
        state,
        failed_at: None,
    }
}

/// Walk `input` over the shared process-wide table.
pub fn run(input: &str) -> Run {
    run_with(table(), input)
}

pub fn accepts(input: &str) -> bool {
    run(input).accepted()
}
