// src/demo.rs
// The three console demonstrations: token file (regex), interactive line
// (branching automaton) and free text (table automaton).

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    config::Config,
    lexer::{
        branch,
        pattern::{self, SIGNED_TOKEN_PATTERN, WORD_DELIMITERS_PATTERN},
        table,
    },
};

const RULE: &str = "--------------------";

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("file '{}' not found", path.display())]
    MissingInput { path: PathBuf },
    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write report")]
    Output(#[from] io::Error),
}

/// One checked input and whether it was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub input: String,
    pub accepted: bool,
}

impl Verdict {
    fn new(input: &str, accepted: bool) -> Self {
        Self {
            input: input.to_string(),
            accepted,
        }
    }
}

fn read_input(path: &Path) -> Result<String, DemoError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DemoError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => DemoError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Test every non-blank line of `path` against the signed token pattern.
pub fn check_tokens_file<W: Write>(path: &Path, out: &mut W) -> Result<Vec<Verdict>, DemoError> {
    let content = read_input(path)?;
    writeln!(out, "Results for file '{}':", path.display())?;

    let mut verdicts = Vec::new();
    for line in content.lines() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let ok = pattern::is_signed_token(word);
        if ok {
            writeln!(out, "  '{word}' -> matches")?;
        } else {
            writeln!(out, "  '{word}' -> does not match")?;
        }
        verdicts.push(Verdict::new(word, ok));
    }
    Ok(verdicts)
}

/// Split the text in `path` into words and run each through the table automaton.
pub fn check_text_file<W: Write>(path: &Path, out: &mut W) -> Result<Vec<Verdict>, DemoError> {
    let content = read_input(path)?;
    writeln!(out, "\nContents of '{}':\n{content}", path.display())?;
    writeln!(out, "Word results (transition table):")?;

    let mut verdicts = Vec::new();
    for word in pattern::split_words(&content) {
        let run = table::run(word);
        match run.failed_at {
            Some(i) => log::debug!("{word:?}: fell into Error at char {i}"),
            None => log::debug!("{word:?}: ended in {:?}", run.state),
        }
        if run.accepted() {
            writeln!(out, "  '{word}' -> VALID")?;
        } else {
            writeln!(out, "  '{word}' -> INVALID")?;
        }
        verdicts.push(Verdict::new(word, run.accepted()));
    }
    Ok(verdicts)
}

/// Prompt for one line on `input` and run it through the branching automaton.
/// End of input is read as an empty line.
pub fn check_line<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Verdict, DemoError> {
    write!(out, "Your line: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(&line);

    let run = branch::run(line);
    log::debug!("{line:?}: {:?} (failed_at={:?})", run.state, run.failed_at);
    if run.accepted() {
        writeln!(out, "Result: line is VALID (accepted by the automaton).")?;
    } else {
        writeln!(out, "Result: line is INVALID.")?;
    }
    Ok(Verdict::new(line, run.accepted()))
}

/// Report a missing input and turn it into "skipped"; other errors pass through.
fn skip_missing<T, W: Write>(
    res: Result<T, DemoError>,
    out: &mut W,
) -> Result<Option<T>, DemoError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(DemoError::MissingInput { path }) => {
            log::warn!("skipping demo, {} does not exist", path.display());
            writeln!(out, "Error: file '{}' not found.", path.display())?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub fn level_1<W: Write>(path: &Path, out: &mut W) -> Result<Option<Vec<Verdict>>, DemoError> {
    log::info!("level 1: regex over {}", path.display());
    writeln!(out, "--- Level 1 ---")?;
    writeln!(out, "Regular expression: {SIGNED_TOKEN_PATTERN}\n")?;
    let res = check_tokens_file(path, out);
    let res = skip_missing(res, out)?;
    writeln!(out, "{RULE}\n")?;
    Ok(res)
}

pub fn level_2<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Verdict, DemoError> {
    log::info!("level 2: branching automaton on stdin");
    writeln!(out, "--- Level 2 ---")?;
    writeln!(out, "Automaton check (branching). Enter a line:")?;
    let verdict = check_line(input, out)?;
    writeln!(out, "{RULE}\n")?;
    Ok(verdict)
}

pub fn level_3<W: Write>(path: &Path, out: &mut W) -> Result<Option<Vec<Verdict>>, DemoError> {
    log::info!("level 3: table automaton over {}", path.display());
    writeln!(out, "--- Level 3 ---")?;
    writeln!(out, "Delimiter expression: {WORD_DELIMITERS_PATTERN}")?;
    let res = check_text_file(path, out);
    let res = skip_missing(res, out)?;
    writeln!(out, "{RULE}\n")?;
    Ok(res)
}

/// Everything one run produced; `None` marks a skipped file demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub tokens: Option<Vec<Verdict>>,
    pub words: Option<Vec<Verdict>>,
    pub line: Verdict,
}

/// Level 1, then Level 3, then the interactive Level 2.
pub fn run_all<R: BufRead, W: Write>(
    cfg: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<Report, DemoError> {
    let tokens = level_1(&cfg.tokens_file, out)?;
    let words = level_3(&cfg.text_file, out)?;
    let line = level_2(input, out)?;
    Ok(Report {
        tokens,
        words,
        line,
    })
}
