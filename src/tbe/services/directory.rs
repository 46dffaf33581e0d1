use crate::ids::{AccountId, Pin, Username};
use crate::models::{Account, AccountSeed};
use crate::Result;

use std::collections::HashMap;

use thiserror::Error;

pub type AccountDataStore = HashMap<AccountId, Account>;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Username already taken: {0}")]
    DuplicateUsername(Username),

    #[error("Account not found: {0}")]
    AccountNotFound(Username),

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// The collection of live accounts, keyed by unique id with a derived-username
/// index for login and transfer lookups. Owned by the application context and
/// passed by reference; there is no global account list.
pub struct Directory {
    repository: AccountDataStore,
    by_username: HashMap<Username, AccountId>,
    next_id: u32,
}

impl Directory {
    pub fn new() -> Self {
        return Self {
            repository: AccountDataStore::new(),
            by_username: HashMap::new(),
            next_id: 1,
        };
    }

    /// Derives the username, assigns the next id, and inserts the account.
    ///
    /// Username derivation can collide across distinct owners; a collision is
    /// rejected here, at creation time, rather than silently shadowing an
    /// existing account in lookups.
    pub fn create(&mut self, seed: AccountSeed) -> Result<AccountId> {
        let username = Username::derive(&seed.owner)?;

        if self.by_username.contains_key(&username) {
            Err(DirectoryError::DuplicateUsername(username.clone()))?
        }

        let id = AccountId(self.next_id);
        let account = Account::from_seed(id, username.clone(), seed)?;

        self.next_id += 1;
        self.by_username.insert(username, id);
        self.repository.insert(id, account);

        return Ok(id);
    }

    pub fn get(&self, id: AccountId) -> Option<&Account> {
        return self.repository.get(&id);
    }

    pub fn get_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        return self.repository.get_mut(&id);
    }

    pub fn find_by_username(&self, username: &Username) -> Option<&Account> {
        return self
            .by_username
            .get(username)
            .and_then(|id| self.repository.get(id));
    }

    /// Checks username and PIN together. Lookup failure and PIN mismatch are
    /// indistinguishable to the caller, so callers cannot probe for which
    /// usernames exist.
    pub fn authenticate(&self, username: &Username, pin: Pin) -> Result<AccountId> {
        let account = self
            .find_by_username(username)
            .ok_or(DirectoryError::InvalidCredentials)?;

        if account.pin != pin {
            Err(DirectoryError::InvalidCredentials)?
        }

        return Ok(account.id);
    }

    /// Deletes the account wholesale. Does not consult the Session: callers
    /// closing the active account clear the Session first.
    pub fn remove(&mut self, username: &Username) -> Result<Account> {
        let id = self
            .by_username
            .remove(username)
            .ok_or_else(|| DirectoryError::AccountNotFound(username.clone()))?;

        let account = self
            .repository
            .remove(&id)
            .ok_or_else(|| DirectoryError::AccountNotFound(username.clone()))?;

        return Ok(account);
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        return self.repository.values();
    }

    pub fn len(&self) -> usize {
        return self.repository.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}

impl Default for Directory {
    fn default() -> Self {
        return Self::new();
    }
}
