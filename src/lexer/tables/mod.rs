// src/lexer/tables/mod.rs
pub mod build;
pub mod category;
pub mod dfa;
pub mod io;

use hashbrown::HashMap;

pub use build::{build_table, table};
pub use category::{CharCategory, classify};
pub use dfa::State;
pub use io::{load_table_json_bytes, save_table_json};

/// Sparse (state, category) -> state map. Missing keys mean `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    entries: HashMap<(State, CharCategory), State>,
}

impl TransitionTable {
    pub(crate) fn from_entries(entries: HashMap<(State, CharCategory), State>) -> Self {
        Self { entries }
    }

    /// Next state for `(from, cat)`; a lookup miss lands in `Error`.
    #[inline]
    pub fn next(&self, from: State, cat: CharCategory) -> State {
        self.entries
            .get(&(from, cat))
            .copied()
            .unwrap_or(State::Error)
    }

    pub fn get(&self, from: State, cat: CharCategory) -> Option<State> {
        self.entries.get(&(from, cat)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dense `[state][category]` grid of state indices, misses filled with `Error`.
    pub fn to_grid(&self) -> [[u8; category::N_CATEGORIES]; dfa::N_STATES] {
        let mut grid = [[State::Error.idx() as u8; category::N_CATEGORIES]; dfa::N_STATES];
        for s in dfa::ALL_STATES {
            for c in category::ALL_CATEGORIES {
                grid[s.idx()][c.idx()] = self.next(s, c).idx() as u8;
            }
        }
        grid
    }
}
