use super::validator;
use super::Directory;

use crate::ids::{AccountId, Pin, Username};
use crate::input::Action;
use crate::models::{Account, AccountReport};
use crate::present::Present;
use crate::{Money, Result, Session};

use chrono::{DateTime, Utc};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TellerError {
    #[error("No account is logged in")]
    NotLoggedIn,

    #[error("Session refers to a removed account: {0}")]
    StaleSession(AccountId),

    #[error("Close confirmation does not match the active account")]
    ConfirmationMismatch,
}

/// Processes user actions one at a time, to completion, against the account
/// Directory. The teller owns the single Session, making it the only
/// legitimate mutator of account state; any rejected action leaves every
/// ledger and the session untouched.
pub struct Teller<P: Present> {
    directory: Directory,
    session: Session,
    presenter: P,
}

impl<P: Present> Teller<P> {
    pub fn new(directory: Directory, presenter: P) -> Self {
        return Self {
            directory,
            session: Session::new(),
            presenter,
        };
    }

    pub fn process(&mut self, action: Action) -> Result {
        log::debug!("Processing action: {action:?}");

        return match action {
            Action::Login { username, pin } => self.login(&username, pin),

            Action::Transfer { to, amount } => self.transfer(&to, amount),

            Action::RequestLoan { amount } => self.request_loan(amount),

            Action::CloseAccount { username, pin } => self.close_account(&username, pin),

            Action::ToggleSort => self.toggle_sort(),
        };
    }

    /// Authenticates and activates the account. A failed attempt clears any
    /// previously active session.
    pub fn login(&mut self, username: &Username, pin: Pin) -> Result {
        let id = match self.directory.authenticate(username, pin) {
            Ok(id) => id,
            Err(e) => {
                self.session.logout();
                return Err(e);
            }
        };

        self.session.login(id);

        log::debug!("Login successful for {username}");

        return self.update_ui();
    }

    /// Moves `amount` from the active account to `to`: one `-amount` entry on
    /// the sender, one `+amount` entry on the recipient, sharing a single
    /// timestamp. Validation happens before either append, and appends cannot
    /// fail, so both sides land together or neither does.
    pub fn transfer(&mut self, to: &Username, amount: Money) -> Result {
        let sender = self.active_account()?;

        let recipient = self
            .directory
            .find_by_username(to)
            .ok_or_else(|| super::DirectoryError::AccountNotFound(to.clone()))?;

        validator::validate_transfer(sender, recipient, amount)?;

        let sender_id = sender.id;
        let recipient_id = recipient.id;
        let at = Utc::now();

        self.append_entry(sender_id, -amount, at)?;
        self.append_entry(recipient_id, amount, at)?;

        log::debug!("Transferred {amount} from account {sender_id} to {recipient_id}");

        return self.update_ui();
    }

    /// Grants a loan by appending the (truncated) requested amount.
    pub fn request_loan(&mut self, requested: Money) -> Result {
        let account = self.active_account()?;

        let granted = validator::validate_loan(account, requested)?;
        let id = account.id;

        self.append_entry(id, granted, Utc::now())?;

        log::debug!("Granted loan of {granted} to account {id}");

        return self.update_ui();
    }

    /// Removes the active account after re-confirmation of its username and
    /// PIN. This is not a fresh login: both inputs are compared against the
    /// account that is already active. The session is cleared before the
    /// account leaves the Directory.
    pub fn close_account(&mut self, confirm_username: &Username, confirm_pin: Pin) -> Result {
        let account = self.active_account()?;

        if account.username != *confirm_username || account.pin != confirm_pin {
            Err(TellerError::ConfirmationMismatch)?
        }

        let username = account.username.clone();

        self.session.logout();
        self.directory.remove(&username)?;

        log::debug!("Closed account for {username}");

        return Ok(());
    }

    /// Flips the display-sort toggle and re-renders.
    pub fn toggle_sort(&mut self) -> Result {
        self.active_account()?;

        self.session.toggle_sorted();

        return self.update_ui();
    }

    pub fn build_report(&self) -> Vec<AccountReport> {
        let mut accounts: Vec<&Account> = self.directory.accounts().collect();
        accounts.sort_by_key(|account| account.id);

        return accounts.iter().map(|a| AccountReport::for_account(a)).collect();
    }

    pub fn session(&self) -> &Session {
        return &self.session;
    }

    pub fn directory(&self) -> &Directory {
        return &self.directory;
    }

    pub fn take(self) -> Directory {
        log::debug!("Destructuring Teller");
        return self.directory;
    }

    fn active_account(&self) -> Result<&Account> {
        let id = self.session.active().ok_or(TellerError::NotLoggedIn)?;

        return Ok(self
            .directory
            .get(id)
            .ok_or(TellerError::StaleSession(id))?);
    }

    fn append_entry(&mut self, id: AccountId, amount: Money, at: DateTime<Utc>) -> Result {
        let account = self
            .directory
            .get_mut(id)
            .ok_or(TellerError::StaleSession(id))?;

        account.ledger.append(amount, at);

        return Ok(());
    }

    fn update_ui(&mut self) -> Result {
        let id = self.session.active().ok_or(TellerError::NotLoggedIn)?;
        let account = self
            .directory
            .get(id)
            .ok_or(TellerError::StaleSession(id))?;

        self.presenter.render(account, self.session.sorted());
        self.presenter.render_balance(account);
        self.presenter.render_summary(account);

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::AccountSeed;

    /// Test double that records what the core asked it to draw
    #[derive(Default)]
    struct RecordingPresenter {
        renders: Vec<(String, bool)>,
    }

    impl Present for RecordingPresenter {
        fn render(&mut self, account: &Account, sorted: bool) {
            self.renders.push((account.username.to_string(), sorted));
        }

        fn render_balance(&mut self, _account: &Account) {}

        fn render_summary(&mut self, _account: &Account) {}
    }

    fn build_seed(owner: &str, pin: u16, transactions: &[i64], dated: bool) -> AccountSeed {
        let transactions: Vec<Money> =
            transactions.iter().map(|a| Money(a * 10_000)).collect();

        let dates = dated.then(|| vec![Utc::now(); transactions.len()]);

        AccountSeed {
            owner: owner.to_string(),
            transactions,
            interest_rate: 1.2,
            pin: Pin(pin),
            dates,
            currency: None,
            locale: None,
        }
    }

    fn build_teller() -> Teller<RecordingPresenter> {
        let mut directory = Directory::new();
        directory
            .create(build_seed(
                "Abasa Wandega",
                1111,
                &[200, 450, -400, 3000, -650, -130, 70, 1300],
                true,
            ))
            .unwrap();
        directory
            .create(build_seed("Pius Omoding", 4444, &[430, 1000, 700, 50, 90], false))
            .unwrap();

        Teller::new(directory, RecordingPresenter::default())
    }

    fn money(units: i64) -> Money {
        Money(units * 10_000)
    }

    fn balance_of(teller: &Teller<RecordingPresenter>, username: &str) -> Money {
        teller
            .directory()
            .find_by_username(&Username::parse(username))
            .unwrap()
            .ledger
            .balance()
    }

    #[test]
    fn login_success_activates_and_renders() {
        let mut teller = build_teller();

        teller.login(&Username::parse("aw"), Pin(1111)).unwrap();

        assert!(teller.session().active().is_some());
        assert_eq!(teller.presenter.renders, vec![("aw".to_string(), false)]);
    }

    #[test]
    fn failed_login_clears_the_session() {
        let mut teller = build_teller();
        teller.login(&Username::parse("aw"), Pin(1111)).unwrap();

        assert!(teller.login(&Username::parse("aw"), Pin(9999)).is_err());

        assert_eq!(*teller.session(), Session::LoggedOut);
    }

    #[test]
    fn transfer_moves_exactly_the_amount() {
        let mut teller = build_teller();
        teller.login(&Username::parse("aw"), Pin(1111)).unwrap();

        let sender_before = balance_of(&teller, "aw");
        let recipient_before = balance_of(&teller, "po");

        teller.transfer(&Username::parse("po"), money(500)).unwrap();

        assert_eq!(balance_of(&teller, "aw").0, sender_before.0 - money(500).0);
        assert_eq!(
            balance_of(&teller, "po").0,
            recipient_before.0 + money(500).0
        );
    }

    #[test]
    fn transfer_timestamps_follow_each_ledger() {
        let mut teller = build_teller();
        teller.login(&Username::parse("aw"), Pin(1111)).unwrap();

        teller.transfer(&Username::parse("po"), money(500)).unwrap();

        let sender = teller
            .directory()
            .find_by_username(&Username::parse("aw"))
            .unwrap();
        assert_eq!(sender.ledger.dates().unwrap().len(), sender.ledger.len());

        let recipient = teller
            .directory()
            .find_by_username(&Username::parse("po"))
            .unwrap();
        assert!(recipient.ledger.dates().is_none());
    }

    #[test]
    fn rejected_transfer_changes_nothing() {
        let mut teller = build_teller();
        teller.login(&Username::parse("aw"), Pin(1111)).unwrap();

        let sender_before = balance_of(&teller, "aw");
        let recipient_before = balance_of(&teller, "po");

        // over balance
        assert!(teller
            .transfer(&Username::parse("po"), money(1_000_000))
            .is_err());
        // unknown recipient
        assert!(teller.transfer(&Username::parse("zz"), money(10)).is_err());
        // self transfer
        assert!(teller.transfer(&Username::parse("aw"), money(10)).is_err());

        assert_eq!(balance_of(&teller, "aw"), sender_before);
        assert_eq!(balance_of(&teller, "po"), recipient_before);
    }

    #[test]
    fn transfer_requires_login() {
        let mut teller = build_teller();

        assert!(teller.transfer(&Username::parse("po"), money(10)).is_err());
    }

    #[test]
    fn loan_appends_to_the_active_account() {
        let mut teller = build_teller();
        teller.login(&Username::parse("po"), Pin(4444)).unwrap();

        let before = balance_of(&teller, "po");

        teller.request_loan(money(50)).unwrap();

        assert_eq!(balance_of(&teller, "po").0, before.0 + money(50).0);
    }

    #[test]
    fn unaffordable_loan_is_rejected() {
        let mut teller = build_teller();
        teller.login(&Username::parse("po"), Pin(4444)).unwrap();

        let before = balance_of(&teller, "po");

        assert!(teller.request_loan(money(20_000)).is_err());

        assert_eq!(balance_of(&teller, "po"), before);
    }

    #[test]
    fn close_removes_the_account_and_logs_out() {
        let mut teller = build_teller();
        teller.login(&Username::parse("aw"), Pin(1111)).unwrap();

        teller
            .close_account(&Username::parse("aw"), Pin(1111))
            .unwrap();

        assert_eq!(*teller.session(), Session::LoggedOut);
        assert!(teller
            .directory()
            .find_by_username(&Username::parse("aw"))
            .is_none());
    }

    #[test]
    fn close_requires_matching_confirmation() {
        let mut teller = build_teller();
        teller.login(&Username::parse("aw"), Pin(1111)).unwrap();

        // wrong pin
        assert!(teller
            .close_account(&Username::parse("aw"), Pin(9999))
            .is_err());
        // someone else's credentials, even if valid
        assert!(teller
            .close_account(&Username::parse("po"), Pin(4444))
            .is_err());

        assert!(teller.session().active().is_some());
        assert!(teller
            .directory()
            .find_by_username(&Username::parse("aw"))
            .is_some());
    }

    #[test]
    fn toggle_sort_rerenders_with_the_flag() {
        let mut teller = build_teller();
        teller.login(&Username::parse("aw"), Pin(1111)).unwrap();

        teller.toggle_sort().unwrap();
        teller.toggle_sort().unwrap();

        assert_eq!(
            teller.presenter.renders,
            vec![
                ("aw".to_string(), false),
                ("aw".to_string(), true),
                ("aw".to_string(), false),
            ]
        );
    }

    #[test]
    fn report_is_ordered_by_account_id() {
        let teller = build_teller();

        let report = teller.build_report();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].username, "aw");
        assert_eq!(report[1].username, "po");
    }
}
