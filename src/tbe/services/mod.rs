mod directory;
mod teller;
mod validator;

pub use directory::{AccountDataStore, Directory, DirectoryError};
pub use teller::{Teller, TellerError};
pub use validator::{validate_loan, validate_transfer, ValidationError};
