// src/lexer/branch.rs
// Hand-coded automaton: one `match` arm per state, character tests inline.
// Used as the reference the table-driven recognizer is checked against.

use crate::lexer::{
    Run,
    tables::{State, category::is_digit},
};

/// Walk `input` and report the state it stops in.
pub fn run(input: &str) -> Run {
    let mut state = State::Start;

    for (i, c) in input.chars().enumerate() {
        state = match state {
            State::Start => {
                if c == '$' {
                    State::AfterMarker
                } else {
                    State::Error
                }
            }
            State::AfterMarker => {
                if is_digit(c) {
                    State::AfterMarker
                } else if ('A'..='F').contains(&c) {
                    State::InRestrictedRun
                } else if !c.is_alphanumeric() {
                    // '$' included
                    State::Final
                } else {
                    State::Error
                }
            }
            State::InRestrictedRun => {
                if ('A'..='F').contains(&c) {
                    State::InRestrictedRun
                } else if is_digit(c) {
                    State::AfterMarker
                } else if !c.is_alphanumeric() {
                    State::Final
                } else {
                    State::Error
                }
            }
            State::Final => {
                if !c.is_alphanumeric() {
                    State::Final
                } else {
                    State::Error
                }
            }
            State::Error => State::Error,
        };

        if state == State::Error {
            log::trace!("branching: rejected {input:?} at char {i} ({c:?})");
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

pub fn accepts(input: &str) -> bool {
    run(input).accepted()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_bare_marker() {
        assert!(!accepts(""));
        assert_eq!(run("").state, State::Start);
        assert!(!accepts("$"));
        assert_eq!(run("$").state, State::AfterMarker);
    }

    #[test]
    fn terminator_required() {
        assert!(accepts("$A1#"));
        assert!(!accepts("$A1"));
        assert_eq!(run("$A1").state, State::AfterMarker);
        assert!(accepts("$ABC$"));
        assert!(accepts("$$"));
        assert!(accepts("$#%&"));
        assert!(accepts("$12AB3FF!!"));
    }

    #[test]
    fn rejects_with_position() {
        assert_eq!(
            run("$G#"),
            Run {
                state: State::Error,
                failed_at: Some(1)
            }
        );
        assert_eq!(run("A$#").failed_at, Some(0));
        // alphanumeric after the terminator run
        assert_eq!(run("$A#1").failed_at, Some(3));
        assert_eq!(run("$a#").failed_at, Some(1));
    }

    #[test]
    fn digit_returns_from_run() {
        assert_eq!(run("$AB").state, State::InRestrictedRun);
        assert_eq!(run("$AB7").state, State::AfterMarker);
        assert_eq!(run("$AB7C").state, State::InRestrictedRun);
    }

    #[test]
    fn unicode_input() {
        assert!(accepts("$A€"));
        assert!(!accepts("$Ж#"));
        assert!(accepts("$٣#"));
        assert!(accepts("$²#"));
        assert!(accepts("$A٣B①!"));
        assert!(!accepts("$½#"));
    }
}
