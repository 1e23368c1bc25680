// src/lexer/tables/build.rs
use std::{sync::OnceLock, time::Instant};

use hashbrown::HashMap;

use super::TransitionTable;
use super::category::ALL_CATEGORIES;
use super::dfa::{ALL_STATES, State, table_rule};

/// Materialize every rule from `table_rule` into a fresh table.
pub fn build_table() -> TransitionTable {
    let t0 = Instant::now();
    let mut entries = HashMap::new();

    for from in ALL_STATES {
        for cat in ALL_CATEGORIES {
            if let Some(to) = table_rule(from, cat) {
                entries.insert((from, cat), to);
            }
        }
    }

    debug_assert!(
        ALL_CATEGORIES
            .iter()
            .all(|&c| !entries.contains_key(&(State::Error, c))),
        "Error must stay absorbing"
    );

    log::debug!(
        "[tables] built {} entries over {}x{} in {:?}",
        entries.len(),
        ALL_STATES.len(),
        ALL_CATEGORIES.len(),
        t0.elapsed()
    );
    TransitionTable::from_entries(entries)
}

static TABLE: OnceLock<TransitionTable> = OnceLock::new();

/// Process-wide table, built on first use and read-only afterwards.
pub fn table() -> &'static TransitionTable {
    TABLE.get_or_init(build_table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tables::CharCategory::*;
    use crate::lexer::tables::State::*;

    #[test]
    fn entry_count() {
        // Start 1, AfterMarker 4, InRestrictedRun 4, Final 2, Error 0
        assert_eq!(build_table().len(), 11);
    }

    #[test]
    fn listed_entries() {
        let t = build_table();
        assert_eq!(t.get(Start, Marker), Some(AfterMarker));
        assert_eq!(t.get(AfterMarker, Digit), Some(AfterMarker));
        assert_eq!(t.get(AfterMarker, RestrictedAlphaRun), Some(InRestrictedRun));
        assert_eq!(t.get(AfterMarker, Marker), Some(Final));
        assert_eq!(t.get(AfterMarker, NonAlnum), Some(Final));
        assert_eq!(t.get(InRestrictedRun, RestrictedAlphaRun), Some(InRestrictedRun));
        assert_eq!(t.get(InRestrictedRun, Digit), Some(AfterMarker));
        assert_eq!(t.get(InRestrictedRun, Marker), Some(Final));
        assert_eq!(t.get(InRestrictedRun, NonAlnum), Some(Final));
        assert_eq!(t.get(Final, Marker), Some(Final));
        assert_eq!(t.get(Final, NonAlnum), Some(Final));
    }

    #[test]
    fn misses_default_to_error() {
        let t = build_table();
        assert_eq!(t.get(Start, Digit), None);
        assert_eq!(t.next(Start, Digit), Error);
        assert_eq!(t.next(AfterMarker, Other), Error);
        assert_eq!(t.next(Final, RestrictedAlphaRun), Error);
        for c in ALL_CATEGORIES {
            assert_eq!(t.next(Error, c), Error);
        }
    }

    #[test]
    fn shared_table_is_built_once() {
        let a: *const TransitionTable = table();
        let b: *const TransitionTable = table();
        assert_eq!(a, b);
        assert_eq!(*table(), build_table());
    }
}
