// src/main.rs
use std::io;

use anyhow::{Context, Result};
use tokencheck::{config::Config, demo};

fn main() -> Result<()> {
    env_logger::init();

    let cfg = Config::from_env();
    log::debug!("config: {cfg:?}");

    println!("=== Token validation: regex, branching and table automata ===\n");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let report = demo::run_all(&cfg, &mut stdin.lock(), &mut stdout.lock())
        .context("demo run failed")?;

    log::info!(
        "done: {} tokens, {} words, line accepted={}",
        report.tokens.as_ref().map_or(0, Vec::len),
        report.words.as_ref().map_or(0, Vec::len),
        report.line.accepted
    );
    println!("=== Done ===\n");
    Ok(())
}
