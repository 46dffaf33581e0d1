use crate::{InterestRate, Money};

use chrono::{DateTime, Utc};

/// Append-only, chronologically ordered transaction history for one account.
///
/// Amounts are signed: positive entries are deposits, negative entries are
/// withdrawals. Timestamps are tracked as a parallel sequence only when the
/// account was seeded with dates; when tracked, `dates.len() == amounts.len()`
/// holds at all times, enforced by `append`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    amounts: Vec<Money>,
    dates: Option<Vec<DateTime<Utc>>>,
}

impl Ledger {
    pub fn new(amounts: Vec<Money>, dates: Option<Vec<DateTime<Utc>>>) -> Self {
        Self { amounts, dates }
    }

    /// Appends one signed entry, recording the timestamp iff dates are
    /// tracked for this account.
    pub fn append(&mut self, amount: Money, at: DateTime<Utc>) {
        self.amounts.push(amount);

        if let Some(dates) = self.dates.as_mut() {
            dates.push(at);
        }
    }

    /// Sum of all entries. Empty ledger yields 0.
    pub fn balance(&self) -> Money {
        Money(self.amounts.iter().fold(0i64, |acc, m| acc.saturating_add(m.0)))
    }

    /// Sum of strictly positive entries.
    pub fn total_income(&self) -> Money {
        Money(
            self.amounts
                .iter()
                .filter(|m| m.is_positive())
                .fold(0i64, |acc, m| acc.saturating_add(m.0)),
        )
    }

    /// Absolute value of the sum of strictly negative entries.
    pub fn total_outflow(&self) -> Money {
        Money(
            self.amounts
                .iter()
                .filter(|m| m.is_negative())
                .fold(0i64, |acc, m| acc.saturating_add(m.0)),
        )
        .abs()
    }

    /// Interest accrued across deposits: each positive entry earns
    /// `amount * rate`, but a deposit's interest is paid only when it reaches
    /// one whole unit of currency. The threshold is per deposit, not an
    /// aggregate one.
    pub fn total_interest(&self, rate: InterestRate) -> Money {
        Money(
            self.amounts
                .iter()
                .filter(|m| m.is_positive())
                .map(|m| rate.apply(*m))
                .filter(|i| *i >= Money::UNIT)
                .fold(0i64, |acc, i| acc.saturating_add(i.0)),
        )
    }

    /// Ascending copy of the entries; the ledger itself is never reordered.
    pub fn sorted_view(&self) -> Vec<Money> {
        let mut view = self.amounts.clone();
        view.sort_unstable();
        view
    }

    /// True iff any single entry is at least `threshold`.
    pub fn any_entry_at_least(&self, threshold: Money) -> bool {
        self.amounts.iter().any(|m| *m >= threshold)
    }

    pub fn entries(&self) -> &[Money] {
        &self.amounts
    }

    pub fn dates(&self) -> Option<&[DateTime<Utc>]> {
        self.dates.as_deref()
    }

    pub fn tracks_dates(&self) -> bool {
        self.dates.is_some()
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
