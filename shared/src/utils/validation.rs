//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .unwrap_or_else(|_| unreachable!("email pattern is a valid literal"))
});

/// Common validation functions
pub mod validators {
    use super::EMAIL_PATTERN;

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if an email address is well formed
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email.trim())
    }

    /// Check if a price is usable
    pub fn is_valid_price(price: f64) -> bool {
        price.is_finite() && price >= 0.0
    }
}

/// Trim every entry, drop blanks and collapse duplicates, keeping first-seen order
pub fn normalize_string_set<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for value in values {
        let trimmed = value.as_ref().trim();
        if !trimmed.is_empty() && !normalized.iter().any(|existing| existing == trimmed) {
            normalized.push(trimmed.to_string());
        }
    }
    normalized
}

/// Return the first candidate that is present and not blank
///
/// Used for inputs that may arrive either in the query string or the body.
pub fn first_present<'a, I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
