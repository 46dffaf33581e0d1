use tbe::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub struct InputPaths {
    pub accounts: PathBuf,
    pub actions: PathBuf,
}

/// Parses the input arguments: the seed-accounts JSON file followed by the
/// actions CSV file.
pub fn parse_input_args() -> Result<InputPaths> {
    let accounts = canonical_arg(1, "First argument must be the accounts file.")?;
    let actions = canonical_arg(2, "Second argument must be the actions file.")?;

    Ok(InputPaths { accounts, actions })
}

fn canonical_arg(position: usize, message: &str) -> Result<PathBuf> {
    let filename = env::args()
        .nth(position)
        .ok_or_else(|| InputArgsError::Parse(message.to_string()))?;

    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(path)
}
