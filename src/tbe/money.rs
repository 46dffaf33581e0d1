use crate::Result;

use std::fmt;
use std::ops::Neg;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Money parse error: {0}, {1}")]
    Parse(&'static str, String),
}

/// Fixed-point monetary amount with 4 implied decimal places.
///
/// Positive values are deposits, negative values are withdrawals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    /// One whole unit of currency
    pub const UNIT: Self = Self(10_000);
    pub const ZERO: Self = Self(0);

    /// Parses a decimal string like "450", "-400", or "12.5" into a Money value
    pub fn parse(string: &str) -> Result<Self> {
        let (negative, magnitude) = match string.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, string),
        };

        let mut parts = magnitude.split('.');

        let units = parts
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| MoneyError::Parse("Missing whole part", string.to_string()))?;

        let fraction = match parts.next() {
            None => "0000".to_string(),
            Some(fraction) => {
                // pad/truncate by characters, then reject anything non-digit
                format!("{:0<4}", fraction).chars().take(4).collect()
            }
        };

        if parts.next().is_some() {
            Err(MoneyError::Parse(
                "Too many decimal points",
                string.to_string(),
            ))?
        }

        for part in [units, fraction.as_str()] {
            if !part.chars().all(|c| c.is_ascii_digit()) {
                Err(MoneyError::Parse("Non-digit amount", string.to_string()))?
            }
        }

        let units: i64 = units.parse()?;
        let fraction: i64 = fraction.parse()?;

        let value = units
            .checked_mul(10_000)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Amount out of range", string.to_string()))?;

        return Ok(Money(if negative { -value } else { value }));
    }

    pub fn is_positive(&self) -> bool {
        return self.0 > 0;
    }

    pub fn is_negative(&self) -> bool {
        return self.0 < 0;
    }

    pub fn abs(&self) -> Self {
        return Self(self.0.abs());
    }

    /// Truncates toward zero to a whole unit of currency
    pub fn trunc_to_unit(&self) -> Self {
        return Self(self.0 - (self.0 % Self::UNIT.0));
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        return Self(-self.0);
    }
}

/// Rounds half-up to two decimal places; rounding happens only here, at
/// display time, never inside accumulation.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hundredths = (self.0.abs() + 50) / 100;
        let sign = if self.0 < 0 { "-" } else { "" };

        return write!(f, "{sign}{}.{:02}", hundredths / 100, hundredths % 100);
    }
}

/// Accepts either a JSON number (whole or fractional) or a decimal string,
/// so seed config can write plain amounts like `-400` or `"12.5"`.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MoneyVisitor;

        impl<'de> Visitor<'de> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                return f.write_str("a decimal number or decimal string");
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Money, E> {
                return Ok(Money(v * 10_000));
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Money, E> {
                return Ok(Money(v as i64 * 10_000));
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Money, E> {
                return Ok(Money((v * 10_000.0).round() as i64));
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Money, E> {
                return Money::parse(v).map_err(E::custom);
            }
        }

        return deserializer.deserialize_any(MoneyVisitor);
    }
}
