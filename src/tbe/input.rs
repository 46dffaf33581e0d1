use crate::ids::{Pin, Username};
use crate::Money;
use crate::Result;

use serde::Deserialize;

use thiserror::Error;

/// Represents one raw user action row as the presentation layer hands it
/// over: every field arrives as an optional string, validated on parse.
#[derive(Deserialize, Debug, Clone)]
pub struct ActionRecord {
    #[serde(rename = "type")]
    pub typ: ActionType,

    pub user: Option<String>,
    pub pin: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Login,
    Transfer,
    Loan,
    Close,
    Sort,
}

#[derive(Error, Debug)]
pub enum ActionParseError {
    #[error("Error parsing action: username missing: {0:?}")]
    MissingUsername(ActionRecord),

    #[error("Error parsing action: pin missing: {0:?}")]
    MissingPin(ActionRecord),

    #[error("Error parsing action: pin is not a 4-digit number: {0:?}")]
    InvalidPin(ActionRecord),

    #[error("Error parsing action: transfer target missing: {0:?}")]
    MissingTarget(ActionRecord),

    #[error("Error parsing action: amount missing: {0:?}")]
    MissingAmount(ActionRecord),
}

/// Typed user action, forcing correct handling through the type-system
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Login { username: Username, pin: Pin },
    Transfer { to: Username, amount: Money },
    RequestLoan { amount: Money },
    CloseAccount { username: Username, pin: Pin },
    ToggleSort,
}

impl ActionRecord {
    pub fn parse_action(self) -> Result<Action> {
        let action = match self.typ {
            ActionType::Login => {
                let (username, pin) = self.parse_credentials()?;
                Action::Login { username, pin }
            }
            ActionType::Transfer => {
                let to = self
                    .to
                    .as_deref()
                    .map(Username::parse)
                    .ok_or_else(|| ActionParseError::MissingTarget(self.clone()))?;
                let amount = self.parse_amount()?;

                Action::Transfer { to, amount }
            }
            ActionType::Loan => Action::RequestLoan {
                amount: self.parse_amount()?,
            },
            ActionType::Close => {
                let (username, pin) = self.parse_credentials()?;
                Action::CloseAccount { username, pin }
            }
            ActionType::Sort => Action::ToggleSort,
        };

        Ok(action)
    }

    fn parse_credentials(&self) -> Result<(Username, Pin)> {
        let username = self
            .user
            .as_deref()
            .map(Username::parse)
            .ok_or_else(|| ActionParseError::MissingUsername(self.clone()))?;

        let pin = self
            .pin
            .as_deref()
            .ok_or_else(|| ActionParseError::MissingPin(self.clone()))?
            .parse::<Pin>()
            .map_err(|_| ActionParseError::InvalidPin(self.clone()))?;

        Ok((username, pin))
    }

    fn parse_amount(&self) -> Result<Money> {
        let amount = self
            .amount
            .as_deref()
            .ok_or_else(|| ActionParseError::MissingAmount(self.clone()))?;

        Money::parse(amount)
    }
}
