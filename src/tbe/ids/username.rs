use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NameError {
    #[error("Owner name is empty or contains no name parts")]
    EmptyOwner,
}

/// Login key derived from the owner's display name: the lower-cased first
/// letter of each whitespace-separated part, concatenated.
///
/// Derivation can collide across distinct owners, so a Username identifies an
/// account only within a Directory that rejected duplicates at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Derives the username from an owner's display name.
    pub fn derive(owner: &str) -> Result<Self> {
        let initials: String = owner
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(|c| c.to_lowercase())
            .collect();

        if initials.is_empty() {
            Err(NameError::EmptyOwner)?
        }

        return Ok(Self(initials));
    }

    /// Normalizes a raw login input for comparison against derived usernames.
    pub fn parse(raw: &str) -> Self {
        return Self(raw.trim().to_lowercase());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
