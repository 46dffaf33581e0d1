use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use thiserror::Error;

#[derive(Error, Debug)]
#[error("Invalid PIN: expected a 4-digit number")]
pub struct PinParseError;

/// 4-digit numeric secret, fixed at account creation and compared by exact
/// equality.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin(pub u16);

impl FromStr for Pin {
    type Err = PinParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u16 = s.trim().parse().map_err(|_| PinParseError)?;

        if !(1000..=9999).contains(&value) {
            return Err(PinParseError);
        }

        return Ok(Self(value));
    }
}

/// Redacted so account secrets never reach log output
impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "****");
    }
}
