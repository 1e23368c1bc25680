// src/lexer/pattern.rs
// Regex-only checks: the signed bracket token and the word splitter.

use std::sync::LazyLock;

use regex::Regex;

/// `[`, a sign, digits or uppercase letters (not both), `]`.
pub const SIGNED_TOKEN_PATTERN: &str = r"^\[(\+|-)([0-9]+|[A-Z]+)\]$";

/// Runs of space, comma and period separate words.
pub const WORD_DELIMITERS_PATTERN: &str = r"[ ,.]+";

static SIGNED_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SIGNED_TOKEN_PATTERN).expect("signed token pattern compiles"));

static WORD_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(WORD_DELIMITERS_PATTERN).expect("delimiter pattern compiles")
});

pub fn is_signed_token(token: &str) -> bool {
    SIGNED_TOKEN.is_match(token)
}

/// Split `text` on delimiter runs, dropping empty pieces at the edges.
pub fn split_words(text: &str) -> Vec<&str> {
    WORD_DELIMITERS
        .split(text)
        .filter(|w| !w.is_empty())
        .collect()
}
