//! Line splitting from a blocking reader.
//!
//! Run with:
//!     cargo run --example sync_reader -- <file>

use std::env;
use std::fs::File;

use splitrs::{Separator, SplitError, lines};

fn main() -> Result<(), SplitError> {
    let path = env::args().nth(1).unwrap_or_else(|| "Cargo.toml".to_owned());
    let file = File::open(&path)?;

    let mut count = 0usize;
    let mut widest = 0usize;

    for line in lines(file, Separator::default()) {
        let line = line?;
        count += 1;
        widest = widest.max(line.chars().count());
    }

    println!("{path}: {count} lines, widest {widest} chars");
    Ok(())
}
