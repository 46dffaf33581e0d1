mod account_id;
mod pin;
mod username;

pub use account_id::AccountId;
pub use pin::Pin;
pub use username::{NameError, Username};
