//! Caller identity.
//!
//! Operations that act on behalf of a caller receive a claimed email and ask
//! an [`IdentityVerifier`] to turn it into a [`VerifiedIdentity`]. The default
//! [`EmailClaimVerifier`] accepts any non-empty claim; a real authenticator
//! can be plugged in without touching the services.

use async_trait::async_trait;

use crate::domain::entities::property::Property;
use crate::errors::{DomainResult, ValidationError};

/// An identity the services may act for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    email: String,
}

impl VerifiedIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Ownership is an exact comparison with the stored owner email
    pub fn owns(&self, property: &Property) -> bool {
        self.email == property.owner_email
    }
}

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, claimed_email: &str) -> DomainResult<VerifiedIdentity>;
}

/// Trusts the claimed email as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailClaimVerifier;

#[async_trait]
impl IdentityVerifier for EmailClaimVerifier {
    async fn verify(&self, claimed_email: &str) -> DomainResult<VerifiedIdentity> {
        let email = claimed_email.trim();
        if email.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }
        Ok(VerifiedIdentity::new(email))
    }
}
