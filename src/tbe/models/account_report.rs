use super::Account;

use serde::{Deserialize, Serialize};

/// Final per-account summary row, serialized to CSV at end of run. All
/// amounts are pre-formatted strings: decimal rounding happens only here.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountReport {
    pub account: String,
    pub owner: String,
    pub username: String,
    pub balance: String,
    pub income: String,
    pub outflow: String,
    pub interest: String,
}

impl AccountReport {
    pub fn for_account(account: &Account) -> Self {
        let ledger = &account.ledger;

        Self {
            account: account.id.to_string(),
            owner: account.owner.clone(),
            username: account.username.to_string(),
            balance: ledger.balance().to_string(),
            income: ledger.total_income().to_string(),
            outflow: ledger.total_outflow().to_string(),
            interest: ledger.total_interest(account.interest_rate).to_string(),
        }
    }
}
