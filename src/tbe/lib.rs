pub mod ids;
pub mod input;
pub mod models;
mod money;
pub mod present;
mod rate;
mod result;
mod session;
pub mod services;

pub use money::{Money, MoneyError};
pub use rate::{InterestRate, RateError};
pub use result::Result;
pub use session::Session;

use models::AccountSeed;
use present::Present;
use services::{Directory, Teller};

/// Builds a Teller over a fresh Directory seeded from startup configuration.
pub fn build_teller<P: Present>(seeds: Vec<AccountSeed>, presenter: P) -> Result<Teller<P>> {
    let mut directory = Directory::new();

    for seed in seeds {
        let id = directory.create(seed)?;
        log::debug!("Seeded account {id}");
    }

    let teller = Teller::new(directory, presenter);

    return Ok(teller);
}
