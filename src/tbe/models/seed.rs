use crate::ids::Pin;
use crate::Money;

use chrono::{DateTime, Utc};

use serde::Deserialize;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Seed for {owner:?} has {dates} dates for {transactions} transactions")]
    DateCountMismatch {
        owner: String,
        transactions: usize,
        dates: usize,
    },
}

/// One account record from the startup configuration; loaded once, never
/// reloaded at runtime.
#[derive(Deserialize, Debug, Clone)]
pub struct AccountSeed {
    pub owner: String,
    pub transactions: Vec<Money>,
    pub interest_rate: f64,
    pub pin: Pin,

    /// Parallel to `transactions` when present
    #[serde(default)]
    pub dates: Option<Vec<DateTime<Utc>>>,

    /// Display metadata only, no effect on computation
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}
