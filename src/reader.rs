use tbe::models::AccountSeed;
use tbe::Result;

use std::{fs::File, path::PathBuf};

use csv::{Reader, ReaderBuilder, Trim};

pub fn build_csv_reader(filepath: PathBuf) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(filepath)?;

    return Ok(reader);
}

/// Loads the seed account records, once, at startup.
pub fn load_seeds(filepath: PathBuf) -> Result<Vec<AccountSeed>> {
    let file = File::open(filepath)?;
    let seeds = serde_json::from_reader(file)?;

    return Ok(seeds);
}
