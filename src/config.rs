// src/config.rs
use std::{env, path::PathBuf};

pub const DEFAULT_TOKENS_FILE: &str = "level1_input.txt";
pub const DEFAULT_TEXT_FILE: &str = "level3_input.txt";

pub const TOKENS_FILE_VAR: &str = "TOKENCHECK_TOKENS_FILE";
pub const TEXT_FILE_VAR: &str = "TOKENCHECK_TEXT_FILE";

/// Input locations for the file-based demos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tokens_file: PathBuf,
    pub text_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tokens_file: PathBuf::from(DEFAULT_TOKENS_FILE),
            text_file: PathBuf::from(DEFAULT_TEXT_FILE),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |name: &str, default: &str| {
            lookup(name)
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };
        Self {
            tokens_file: path(TOKENS_FILE_VAR, DEFAULT_TOKENS_FILE),
            text_file: path(TEXT_FILE_VAR, DEFAULT_TEXT_FILE),
        }
    }
}

pub fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

pub fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(default)
}
