//! How a user document is addressed.

use std::fmt;

use super::record_id::RecordId;

/// Users are reachable by their natural key (email) or by their identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Email(String),
    Id(RecordId),
}

impl UserLookup {
    pub fn email(email: impl Into<String>) -> Self {
        UserLookup::Email(email.into())
    }

    pub fn id(id: RecordId) -> Self {
        UserLookup::Id(id)
    }
}

impl fmt::Display for UserLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserLookup::Email(email) => write!(f, "email={}", email),
            UserLookup::Id(id) => write!(f, "id={}", id),
        }
    }
}
