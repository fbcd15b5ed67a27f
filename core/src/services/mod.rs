//! Business services containing domain logic and use cases.

pub mod consistency;
pub mod identity;
pub mod property;
pub mod rental;
pub mod user;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used types
pub use consistency::{require_match, WriteSequence};
pub use identity::{EmailClaimVerifier, IdentityVerifier, VerifiedIdentity};
pub use property::PropertyService;
pub use rental::RentalService;
pub use user::{Registration, UserService};
