// src/bin/fuzz_fsa.rs
// Generate many random candidates, run both automata, compare verdicts.
//   - FUZZ_ITERS=<n>     number of candidates (default 1,000,000)
//   - FUZZ_SEED=<u64>    base seed (default 42)
//   - FUZZ_MAX_LEN=<n>   rough upper bound on candidate length (default 24)
//   - FUZZ_INPUT=path    replay a file, one candidate per line
//   - FUZZ_SAVE=1 and FUZZ_DIR=... save mismatching candidates

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::{Instant, SystemTime, UNIX_EPOCH},
};

use anyhow::{Context, Result, bail};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use tokencheck::{
    config::{env_u64, env_usize},
    dev::generator::{gen_candidate, gen_noise},
    lexer::{Run, branch, table},
};

#[derive(Debug)]
struct Mismatch {
    iter: usize,
    input: String,
    branching: Run,
    table: Run,
}

fn candidate_for(seed: u64, iter: usize, max_len: usize) -> String {
    // Per-iteration seed keeps any single case reproducible on its own.
    let mut rng = StdRng::seed_from_u64(seed ^ (iter as u64).wrapping_mul(0x9E3779B97F4A7C15));
    if rng.random_bool(0.8) {
        gen_candidate(&mut rng, max_len)
    } else {
        let len = rng.random_range(0..=max_len);
        gen_noise(&mut rng, len)
    }
}

fn check(iter: usize, input: String) -> Option<Mismatch> {
    let b = branch::run(&input);
    let t = table::run(&input);
    (b != t).then_some(Mismatch {
        iter,
        input,
        branching: b,
        table: t,
    })
}

fn report(m: &Mismatch) {
    eprintln!(
        "[fuzz] MISMATCH iter {}: {:?}\n  branching: {:?}\n  table:     {:?}",
        m.iter, m.input, m.branching, m.table
    );
}

#[derive(serde::Serialize)]
struct CaseMeta<'a> {
    unix_ts: u64,
    seed: u64,
    iter: usize,
    input: &'a str,
    branching_accepted: bool,
    table_accepted: bool,
    note: &'a str,
}

fn save_case(dir: &Path, seed: u64, m: &Mismatch) -> Result<PathBuf> {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let path = dir.join(format!("case_s{seed}_i{}.txt", m.iter));
    fs::write(&path, format!("{}\n", m.input))
        .with_context(|| format!("write {}", path.display()))?;

    let meta = CaseMeta {
        unix_ts: ts,
        seed,
        iter: m.iter,
        input: &m.input,
        branching_accepted: m.branching.accepted(),
        table_accepted: m.table.accepted(),
        note: "Replay with: FUZZ_INPUT=<this file> cargo run --bin fuzz_fsa",
    };
    let meta_path = path.with_extension("json");
    let mut f =
        fs::File::create(&meta_path).with_context(|| format!("write {}", meta_path.display()))?;
    writeln!(f, "{}", serde_json::to_string_pretty(&meta)?)?;
    Ok(path)
}

fn replay(path: &str) -> Result<()> {
    eprintln!("[replay] reading {path}");
    let s = fs::read_to_string(path).with_context(|| format!("read FUZZ_INPUT={path}"))?;
    let mismatches: Vec<Mismatch> = s
        .lines()
        .enumerate()
        .filter_map(|(i, line)| check(i, line.to_string()))
        .collect();
    for m in &mismatches {
        report(m);
    }
    if !mismatches.is_empty() {
        bail!("{} mismatching line(s)", mismatches.len());
    }
    eprintln!("[replay] {} line(s) agree", s.lines().count());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    if let Ok(path) = std::env::var("FUZZ_INPUT") {
        return replay(&path);
    }

    let iters = env_usize("FUZZ_ITERS", 1_000_000);
    let seed = env_u64("FUZZ_SEED", 42);
    let max_len = env_usize("FUZZ_MAX_LEN", 24);
    let save_cases = std::env::var("FUZZ_SAVE").ok().as_deref() == Some("1");
    let out_dir = PathBuf::from(std::env::var("FUZZ_DIR").unwrap_or_else(|_| "fuzz-cases".into()));

    eprintln!("[fuzz] iters={iters} seed={seed} max_len={max_len}");
    let t0 = Instant::now();

    let mut mismatches: Vec<Mismatch> = (0..iters)
        .into_par_iter()
        .filter_map(|i| check(i, candidate_for(seed, i, max_len)))
        .collect();
    mismatches.sort_by_key(|m| m.iter);

    let accepted = (0..iters.min(10_000))
        .filter(|&i| table::accepts(&candidate_for(seed, i, max_len)))
        .count();
    eprintln!(
        "[fuzz] checked {iters} candidates in {} ms (accept rate in first {}: {accepted})",
        t0.elapsed().as_millis(),
        iters.min(10_000)
    );

    if mismatches.is_empty() {
        eprintln!("[fuzz] all candidates matched ✅");
        return Ok(());
    }

    if save_cases {
        fs::create_dir_all(&out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    }
    for m in mismatches.iter().take(16) {
        report(m);
        if save_cases {
            let path = save_case(&out_dir, seed, m)?;
            eprintln!("[save] wrote {}", path.display());
        }
    }
    bail!("{} mismatch(es)", mismatches.len())
}
