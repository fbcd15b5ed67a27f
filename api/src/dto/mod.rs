//! Request and response bodies

pub mod property;
pub mod rental;
pub mod user;

pub use property::*;
pub use rental::*;
pub use user::*;

use serde::Deserialize;

use dw_shared::validation::first_present;

/// `?email=` on routes that identify the caller by email
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// Body fallback for the caller's email
///
/// Older clients send the whole property document and put the caller in
/// `owner_email`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailBody {
    pub email: Option<String>,
    pub owner_email: Option<String>,
}

/// Caller email from the query string, falling back to the body
pub fn caller_email(query: &EmailQuery, body: Option<&EmailBody>) -> Option<String> {
    first_present([
        query.email.as_deref(),
        body.and_then(|b| b.email.as_deref()),
        body.and_then(|b| b.owner_email.as_deref()),
    ])
}
