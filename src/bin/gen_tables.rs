// src/bin/gen_tables.rs
use std::{fs, path::Path};

use anyhow::{Context, Result};
use tokencheck::lexer::tables::{
    State, build_table,
    category::ALL_CATEGORIES,
    dfa::ALL_STATES,
    save_table_json,
};

fn main() -> Result<()> {
    env_logger::init();

    println!("[gen_tables] building transition table...");
    let t = build_table();

    let out_path = Path::new("tables/transition_table.json");
    if let Some(dir) = out_path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    save_table_json(out_path, &t).with_context(|| format!("write {}", out_path.display()))?;

    // Human-readable grid; '-' marks a miss (-> Error).
    print!("{:<16}", "");
    for c in ALL_CATEGORIES {
        print!("{:<20}", format!("{c:?}"));
    }
    println!();
    for s in ALL_STATES {
        print!("{:<16}", format!("{s:?}"));
        for c in ALL_CATEGORIES {
            let cell = t
                .get(s, c)
                .map(|to: State| format!("{to:?}"))
                .unwrap_or_else(|| "-".into());
            print!("{cell:<20}");
        }
        println!();
    }

    println!(
        "[gen_tables] wrote {} entries → {}",
        t.len(),
        out_path.display()
    );
    Ok(())
}
