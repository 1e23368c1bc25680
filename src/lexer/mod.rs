// src/lexer/mod.rs
pub mod branch;
pub mod pattern;
pub mod table;
pub mod tables;

use tables::State;

/// Where a recognizer ended up after walking an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub state: State,
    /// Char index that sent the walk into `Error`, if it got there.
    pub failed_at: Option<usize>,
}

impl Run {
    #[inline]
    pub fn accepted(&self) -> bool {
        self.state.is_accepting()
    }
}

/// The two automaton implementations, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognizer {
    Branching,
    Table,
}

impl Recognizer {
    pub fn run(self, input: &str) -> Run {
        match self {
            Recognizer::Branching => branch::run(input),
            Recognizer::Table => table::run(input),
        }
    }

    pub fn accepts(self, input: &str) -> bool {
        self.run(input).accepted()
    }
}
