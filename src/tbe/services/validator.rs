use crate::models::Account;
use crate::Money;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Amount exceeds the sender's balance")]
    InsufficientBalance,

    #[error("Cannot transfer to the sending account")]
    SelfTransfer,

    #[error("No single prior transaction covers 10% of the requested loan")]
    Unaffordable,
}

/// Gate for appending a transfer to both ledgers: the recipient must be a
/// different account, the amount positive, and covered by the sender's
/// current balance. Recipient existence is the caller's lookup problem.
pub fn validate_transfer(sender: &Account, recipient: &Account, amount: Money) -> Result {
    if sender.username == recipient.username {
        Err(ValidationError::SelfTransfer)?
    }

    if !amount.is_positive() {
        Err(ValidationError::InvalidAmount)?
    }

    if amount > sender.ledger.balance() {
        Err(ValidationError::InsufficientBalance)?
    }

    return Ok(());
}

/// Gate for granting a loan. The requested amount is truncated toward zero to
/// a whole unit first; the affordability rule is deliberately weak: any
/// single prior transaction of at least 10% of the (truncated) request
/// qualifies, regardless of current balance.
///
/// Returns the truncated amount to append on approval.
pub fn validate_loan(account: &Account, requested: Money) -> Result<Money> {
    let granted = requested.trunc_to_unit();

    if !granted.is_positive() {
        Err(ValidationError::InvalidAmount)?
    }

    if !account.ledger.any_entry_at_least(Money(granted.0 / 10)) {
        Err(ValidationError::Unaffordable)?
    }

    return Ok(granted);
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ids::{AccountId, Pin, Username};
    use crate::models::AccountSeed;

    fn build_account(id: u32, owner: &str, transactions: &[i64]) -> Account {
        let seed = AccountSeed {
            owner: owner.to_string(),
            transactions: transactions.iter().map(|a| Money(a * 10_000)).collect(),
            interest_rate: 1.0,
            pin: Pin(1111),
            dates: None,
            currency: None,
            locale: None,
        };

        let username = Username::derive(owner).unwrap();

        Account::from_seed(AccountId(id), username, seed).unwrap()
    }

    fn money(units: i64) -> Money {
        Money(units * 10_000)
    }

    #[test]
    fn transfer_within_balance_is_allowed() {
        let sender = build_account(1, "Abasa Wandega", &[200, 450, -400]);
        let recipient = build_account(2, "Pius Omoding", &[]);

        assert!(validate_transfer(&sender, &recipient, money(250)).is_ok());
        // exactly the balance
        assert!(validate_transfer(&sender, &recipient, money(250)).is_ok());
    }

    #[test]
    fn transfer_over_balance_is_rejected() {
        let sender = build_account(1, "Abasa Wandega", &[200, 450, -400]);
        let recipient = build_account(2, "Pius Omoding", &[]);

        assert!(validate_transfer(&sender, &recipient, money(251)).is_err());
    }

    #[test]
    fn non_positive_transfer_is_rejected() {
        let sender = build_account(1, "Abasa Wandega", &[200]);
        let recipient = build_account(2, "Pius Omoding", &[]);

        assert!(validate_transfer(&sender, &recipient, Money::ZERO).is_err());
        assert!(validate_transfer(&sender, &recipient, money(-5)).is_err());
    }

    #[test]
    fn self_transfer_is_always_rejected() {
        let sender = build_account(1, "Abasa Wandega", &[200]);
        let same = sender.clone();

        assert!(validate_transfer(&sender, &same, money(1)).is_err());
        assert!(validate_transfer(&sender, &same, money(-1)).is_err());
        assert!(validate_transfer(&sender, &same, money(100_000)).is_err());
    }

    #[test]
    fn loan_with_qualifying_deposit_is_granted() {
        let account = build_account(1, "Pius Omoding", &[430, 1000, 700, 50, 90]);

        // 430 >= 50 * 0.1
        assert_eq!(validate_loan(&account, money(50)).unwrap(), money(50));
    }

    #[test]
    fn loan_without_qualifying_deposit_is_rejected() {
        let account = build_account(1, "Pius Omoding", &[430, 1000, 700, 50, 90]);

        // threshold 2000, largest entry is 1000
        assert!(validate_loan(&account, money(20_000)).is_err());
    }

    #[test]
    fn loan_threshold_is_inclusive() {
        let account = build_account(1, "Pius Omoding", &[430, 1000, 700, 50, 90]);

        // threshold is exactly 1000, met by the 1000 entry
        assert_eq!(
            validate_loan(&account, money(10_000)).unwrap(),
            money(10_000),
        );
    }

    #[test]
    fn loan_amount_is_truncated_before_checking() {
        let account = build_account(1, "Pius Omoding", &[430, 1000, 700, 50, 90]);

        // 50.9 floors to 50
        assert_eq!(
            validate_loan(&account, Money(509_000)).unwrap(),
            money(50),
        );

        // 0.9 floors to zero
        assert!(validate_loan(&account, Money(9_000)).is_err());
    }

    #[test]
    fn non_positive_loan_is_rejected() {
        let account = build_account(1, "Pius Omoding", &[430]);

        assert!(validate_loan(&account, Money::ZERO).is_err());
        assert!(validate_loan(&account, money(-10)).is_err());
    }
}
