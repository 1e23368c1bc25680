// src/lexer/tables/io.rs
use std::{
    io::{BufWriter, Write},
    time::Instant,
};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{
    TransitionTable,
    category::{ALL_CATEGORIES, N_CATEGORIES},
    dfa::{ALL_STATES, N_STATES, State},
};

// -------------------- JSON (de)serialization --------------------

#[derive(Serialize, Deserialize)]
struct TableDisk {
    n_states: u32,
    n_categories: u32,
    states: Vec<String>,
    categories: Vec<String>,
    // [state][category] -> state index
    next: Vec<Vec<u8>>,
}

impl From<&TransitionTable> for TableDisk {
    fn from(t: &TransitionTable) -> Self {
        Self {
            n_states: N_STATES as u32,
            n_categories: N_CATEGORIES as u32,
            states: ALL_STATES.iter().map(|s| format!("{s:?}")).collect(),
            categories: ALL_CATEGORIES.iter().map(|c| format!("{c:?}")).collect(),
            next: t.to_grid().iter().map(|row| row.to_vec()).collect(),
        }
    }
}

impl TableDisk {
    fn into_table(self) -> Result<TransitionTable, String> {
        if self.n_states as usize != N_STATES || self.n_categories as usize != N_CATEGORIES {
            return Err(format!(
                "table shape {}x{} does not match {}x{}",
                self.n_states, self.n_categories, N_STATES, N_CATEGORIES
            ));
        }
        if self.next.len() != N_STATES {
            return Err(format!("expected {N_STATES} rows, got {}", self.next.len()));
        }

        let mut entries = HashMap::new();
        for (from, row) in ALL_STATES.iter().zip(&self.next) {
            if row.len() != N_CATEGORIES {
                return Err(format!(
                    "row {from:?} has {} columns, expected {N_CATEGORIES}",
                    row.len()
                ));
            }
            for (cat, &to) in ALL_CATEGORIES.iter().zip(row) {
                let to = State::from_idx(to as usize)
                    .ok_or_else(|| format!("bad state id {to} at ({from:?}, {cat:?})"))?;
                if to != State::Error {
                    entries.insert((*from, *cat), to);
                }
            }
        }
        if entries.keys().any(|(from, _)| *from == State::Error) {
            return Err("Error row must not leave Error".into());
        }
        Ok(TransitionTable::from_entries(entries))
    }
}

pub fn save_table_json(path: &std::path::Path, t: &TransitionTable) -> std::io::Result<()> {
    let instant = Instant::now();
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &TableDisk::from(t))?;
    w.write_all(b"\n")?;
    let flush = w.flush();
    log::info!(
        "Saved table to {} in {} ms",
        path.display(),
        instant.elapsed().as_millis()
    );
    flush
}

pub fn load_table_json_bytes(data: &[u8]) -> Result<TransitionTable, String> {
    serde_json::from_slice::<TableDisk>(data)
        .map_err(|e| format!("Failed to parse table JSON: {e}"))?
        .into_table()
}
