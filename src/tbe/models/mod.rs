mod account;
mod account_report;
mod ledger;
mod seed;

pub use account::Account;
pub use account_report::AccountReport;
pub use ledger::Ledger;
pub use seed::{AccountSeed, SeedError};
