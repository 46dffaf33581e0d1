use crate::Money;
use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateError {
    #[error("Interest rate out of range (expected 0-100%): {0}")]
    OutOfRange(f64),
}

/// Per-deposit interest rate, stored in basis points (1.2% == 120 bps) so
/// accrual stays exact integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct InterestRate(u32);

impl InterestRate {
    pub fn from_percent(percent: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&percent) {
            Err(RateError::OutOfRange(percent))?
        }

        return Ok(Self((percent * 100.0).round() as u32));
    }

    pub fn basis_points(&self) -> u32 {
        return self.0;
    }

    /// Interest earned by a single deposit: `deposit * rate`, truncated to
    /// the fixed-point grain. The product is taken in 128 bits and the rate
    /// never exceeds 100%, so the result always fits back into a Money.
    pub fn apply(&self, deposit: Money) -> Money {
        return Money((deposit.0 as i128 * self.0 as i128 / 10_000) as i64);
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100);
    }
}
