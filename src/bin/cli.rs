//! Line-oriented command interpreter over [`BTreeIndex`].
//!
//! Reads commands from standard input, one per line:
//! ```text
//! + <key> <value>    insert                  -> OK | Exist
//! - <key>            delete                  -> OK | NoSuchWord
//! ! Save <path>      write the index to disk -> OK | ERROR: ...
//! ! Load <path>      replace the index       -> OK | ERROR: ...
//! <key>              lookup                  -> OK: <value> | NoSuchWord
//! ```
//!
//! Keys are ASCII-lowercased before they reach the index; the engine itself
//! is case-sensitive and never prints.

use std::io::{self, BufRead, BufWriter, Write};

use lexindex::{BTreeIndex, DeleteOutcome, InsertOutcome};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut index = BTreeIndex::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            continue;
        };

        match command {
            "+" => match (tokens.next(), tokens.next().map(str::parse::<u64>)) {
                (Some(key), Some(Ok(value))) => {
                    match index.insert(fold(key).as_bytes(), value) {
                        InsertOutcome::Inserted => writeln!(out, "OK")?,
                        InsertOutcome::AlreadyExists => writeln!(out, "Exist")?,
                    }
                }
                _ => writeln!(out, "ERROR: expected '+ <key> <value>'")?,
            },
            "-" => match tokens.next() {
                Some(key) => match index.delete(fold(key).as_bytes()) {
                    DeleteOutcome::Deleted => writeln!(out, "OK")?,
                    DeleteOutcome::NotFound => writeln!(out, "NoSuchWord")?,
                },
                None => writeln!(out, "ERROR: expected '- <key>'")?,
            },
            "!" => match (tokens.next(), tokens.next()) {
                (Some("Save"), Some(path)) => match index.save(path) {
                    Ok(()) => writeln!(out, "OK")?,
                    Err(err) => writeln!(out, "ERROR: {err}")?,
                },
                (Some("Load"), Some(path)) => match index.load(path) {
                    Ok(()) => writeln!(out, "OK")?,
                    Err(err) => writeln!(out, "ERROR: {err}")?,
                },
                _ => writeln!(out, "ERROR: expected '! Save <path>' or '! Load <path>'")?,
            },
            key => match index.lookup(fold(key).as_bytes()) {
                Some(value) => writeln!(out, "OK: {value}")?,
                None => writeln!(out, "NoSuchWord")?,
            },
        }
        out.flush()?;
    }
    Ok(())
}

/// Case-normalize a key before it reaches the engine.
fn fold(key: &str) -> String {
    key.to_ascii_lowercase()
}
