// src/dev/generator.rs
// Random inputs for cross-checking the two automata. Most candidates are
// built from the pieces the language is made of, so a good share of them
// are accepted and the rest fail late rather than on the first char.

use rand::Rng;

use crate::lexer::tables::category::{MARKER, RESTRICTED_FIRST, RESTRICTED_LAST};

const TERMINATORS: &[char] = &['#', '%', '!', '.', ' ', '_', '-', '$', '€', '\t'];
const STRAYS: &[char] = &['G', 'Z', 'a', 'f', 'z', 'é', 'Ж', '٣', '²'];

fn random_restricted<R: Rng>(rng: &mut R) -> char {
    let span = RESTRICTED_LAST as u32 - RESTRICTED_FIRST as u32;
    char::from_u32(RESTRICTED_FIRST as u32 + rng.random_range(0..=span)).unwrap_or(RESTRICTED_FIRST)
}

fn random_digit<R: Rng>(rng: &mut R) -> char {
    (b'0' + rng.random_range(0u8..10)) as char
}

fn pick<R: Rng>(rng: &mut R, set: &[char]) -> char {
    set[rng.random_range(0..set.len())]
}

/// Any char the classifier can see, weighted toward the automaton's alphabet.
pub fn random_char<R: Rng>(rng: &mut R) -> char {
    match rng.random_range(0u32..100) {
        0..=14 => MARKER,
        15..=34 => random_digit(rng),
        35..=54 => random_restricted(rng),
        55..=74 => pick(rng, TERMINATORS),
        75..=89 => pick(rng, STRAYS),
        _ => rng.random_range(0x20u8..0x7F) as char,
    }
}

/// Uniform-ish noise of exactly `len` chars.
pub fn gen_noise<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| random_char(rng)).collect()
}

/// A string shaped like `$([A-F]+|\d)*\W+`, with an occasional mutation
/// so the rejecting paths get exercised too.
pub fn gen_candidate<R: Rng>(rng: &mut R, max_len: usize) -> String {
    let mut out = String::new();
    if rng.random_bool(0.9) {
        out.push(MARKER);
    }

    let body = rng.random_range(0..=max_len.max(1) / 2);
    while out.chars().count() < body {
        if rng.random_bool(0.5) {
            for _ in 0..rng.random_range(1..=3) {
                out.push(random_restricted(rng));
            }
        } else {
            out.push(random_digit(rng));
        }
    }

    if rng.random_bool(0.85) {
        for _ in 0..rng.random_range(1..=3) {
            out.push(pick(rng, TERMINATORS));
        }
    }

    if rng.random_bool(0.25) && !out.is_empty() {
        let chars: Vec<char> = out.chars().collect();
        let at = rng.random_range(0..chars.len());
        out = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| if i == at { random_char(rng) } else { c })
            .collect();
    }

    out
}
