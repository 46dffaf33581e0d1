use crate::models::Account;

/// Seam to the presentation layer. The core calls out through this trait
/// after every successful state change; rendering details (markup, locale
/// formatting) live entirely on the other side.
pub trait Present {
    /// Renders the transaction list, ascending when `sorted` is set.
    fn render(&mut self, account: &Account, sorted: bool);

    fn render_balance(&mut self, account: &Account);

    fn render_summary(&mut self, account: &Account);
}

/// Log-backed presenter used by the command-line front-end.
#[derive(Debug, Default)]
pub struct LogPresenter;

impl Present for LogPresenter {
    fn render(&mut self, account: &Account, sorted: bool) {
        let entries = if sorted {
            account.ledger.sorted_view()
        } else {
            account.ledger.entries().to_vec()
        };

        for (i, amount) in entries.iter().enumerate() {
            let kind = if amount.is_positive() {
                "deposit"
            } else {
                "withdrawal"
            };

            log::info!("[{}] {} {} {}", account.username, i + 1, kind, amount);
        }
    }

    fn render_balance(&mut self, account: &Account) {
        log::info!("[{}] balance {}", account.username, account.ledger.balance());
    }

    fn render_summary(&mut self, account: &Account) {
        let ledger = &account.ledger;

        log::info!(
            "[{}] in {} out {} interest {}",
            account.username,
            ledger.total_income(),
            ledger.total_outflow(),
            ledger.total_interest(account.interest_rate),
        );
    }
}
