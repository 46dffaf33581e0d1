use std::fmt;

/// Unique account identity, assigned by the Directory at creation.
///
/// Identity is deliberately separate from the derived username, which is not
/// guaranteed unique across owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(pub u32);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
