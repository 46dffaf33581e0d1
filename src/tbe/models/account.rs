use super::{AccountSeed, Ledger, SeedError};

use crate::ids::{AccountId, Pin, Username};
use crate::{InterestRate, Result};

/// One bank account. The balance is always derived from the ledger, never
/// stored; the only mutation after creation is appending transactions.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub owner: String,
    pub username: Username,
    pub pin: Pin,
    pub interest_rate: InterestRate,
    pub ledger: Ledger,
    pub currency: Option<String>,
    pub locale: Option<String>,
}

impl Account {
    /// Builds an account from a validated seed record. The username is
    /// derived (and collision-checked) by the Directory before this runs.
    pub fn from_seed(id: AccountId, username: Username, seed: AccountSeed) -> Result<Self> {
        if let Some(dates) = &seed.dates {
            if dates.len() != seed.transactions.len() {
                Err(SeedError::DateCountMismatch {
                    owner: seed.owner.clone(),
                    transactions: seed.transactions.len(),
                    dates: dates.len(),
                })?
            }
        }

        let interest_rate = InterestRate::from_percent(seed.interest_rate)?;

        Ok(Self {
            id,
            owner: seed.owner,
            username,
            pin: seed.pin,
            interest_rate,
            ledger: Ledger::new(seed.transactions, seed.dates),
            currency: seed.currency,
            locale: seed.locale,
        })
    }
}
