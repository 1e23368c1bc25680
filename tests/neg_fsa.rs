//! Inputs both automata must reject.

use tokencheck::lexer::{Recognizer, tables::State};

const BOTH: [Recognizer; 2] = [Recognizer::Branching, Recognizer::Table];

fn rejects(s: &str) {
    for r in BOTH {
        assert!(!r.accepts(s), "{r:?} accepted {s:?}");
    }
}

#[test]
fn empty_input() {
    rejects("");
    for r in BOTH {
        assert_eq!(r.run("").state, State::Start);
    }
}

#[test]
fn missing_marker() {
    rejects("A#");
    rejects("1#");
    rejects("#");
    rejects(" $A#");
}

#[test]
fn missing_terminator() {
    rejects("$");
    rejects("$A1");
    rejects("$ABCDEF");
    rejects("$0123");
}

#[test]
fn letter_outside_run() {
    rejects("$G#");
    rejects("$AG#");
    rejects("$1g#");
    rejects("$z$");
}

#[test]
fn alphanumeric_after_terminator() {
    rejects("$A#B");
    rejects("$A#1");
    rejects("$$$a");
}

#[test]
fn error_is_absorbing() {
    for r in BOTH {
        let run = r.run("$G#####");
        assert_eq!(run.state, State::Error);
        assert_eq!(run.failed_at, Some(1));
    }
}
