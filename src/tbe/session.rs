use crate::ids::AccountId;

/// Session is a finite state-machine with the following structure:
///
/// LoggedOut
/// -> login: LoggedIn
///
/// LoggedIn
/// -> logout (account closure, failed re-login): LoggedOut
///
/// At most one account is ever active. The session holds a lookup key into
/// the Directory, not a copy of the account; transfer and loan actions
/// require `LoggedIn` and never change the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn { account: AccountId, sorted: bool },
}

impl Session {
    pub fn new() -> Self {
        return Self::default();
    }

    /// Enters `LoggedIn` for the given account, resetting the sort toggle.
    pub fn login(&mut self, account: AccountId) {
        *self = Self::LoggedIn {
            account,
            sorted: false,
        };
    }

    pub fn logout(&mut self) {
        *self = Self::LoggedOut;
    }

    pub fn active(&self) -> Option<AccountId> {
        return match self {
            Self::LoggedIn { account, .. } => Some(*account),
            Self::LoggedOut => None,
        };
    }

    pub fn sorted(&self) -> bool {
        return matches!(self, Self::LoggedIn { sorted: true, .. });
    }

    /// Flips the display-sort toggle; a no-op when logged out.
    pub fn toggle_sorted(&mut self) {
        if let Self::LoggedIn { sorted, .. } = self {
            *sorted = !*sorted;
        }
    }
}
