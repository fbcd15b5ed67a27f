//! Rental request state machine for a (property, user) pair.
//!
//! ```text
//!   NONE --Request--> REQUESTED --Accept--> ACCEPTED
//!                         |
//!                         +------Reject---> NONE
//! ```
//!
//! The current state is derived from the property document: a pending request
//! is membership in `rental_requests`, an accepted one is `rented_by_id`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::property::Property;
use crate::domain::value_objects::RecordId;
use crate::errors::{DomainResult, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalState {
    None,
    Requested,
    Accepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalEvent {
    Request,
    Accept,
    Reject,
}

/// Owner decision on a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalAction {
    Accept,
    Reject,
}

impl RentalState {
    /// Derive the state of `user_id` with respect to `property`
    pub fn of(property: &Property, user_id: &RecordId) -> Self {
        if property.has_rental_request(user_id) {
            RentalState::Requested
        } else if property.is_rented_by(user_id) {
            RentalState::Accepted
        } else {
            RentalState::None
        }
    }

    /// Compute the state reached by `event`
    ///
    /// Repeating a request is a no-op. Resolving requires a pending request.
    pub fn apply(self, event: RentalEvent) -> DomainResult<RentalState> {
        match (self, event) {
            (RentalState::None, RentalEvent::Request)
            | (RentalState::Requested, RentalEvent::Request) => Ok(RentalState::Requested),
            (RentalState::Accepted, RentalEvent::Request) => {
                Err(ValidationError::BusinessRuleViolation {
                    rule: "property is already rented by this user".to_string(),
                }
                .into())
            }
            (RentalState::Requested, RentalEvent::Accept) => Ok(RentalState::Accepted),
            (RentalState::Requested, RentalEvent::Reject) => Ok(RentalState::None),
            (_, RentalEvent::Accept) | (_, RentalEvent::Reject) => {
                Err(ValidationError::BusinessRuleViolation {
                    rule: "no pending rental request for this user".to_string(),
                }
                .into())
            }
        }
    }
}

impl fmt::Display for RentalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RentalState::None => write!(f, "NONE"),
            RentalState::Requested => write!(f, "REQUESTED"),
            RentalState::Accepted => write!(f, "ACCEPTED"),
        }
    }
}

impl RentalAction {
    pub fn event(&self) -> RentalEvent {
        match self {
            RentalAction::Accept => RentalEvent::Accept,
            RentalAction::Reject => RentalEvent::Reject,
        }
    }
}

impl FromStr for RentalAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "accept" => Ok(RentalAction::Accept),
            "reject" => Ok(RentalAction::Reject),
            _ => Err(ValidationError::InvalidAction {
                action: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RentalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RentalAction::Accept => write!(f, "accept"),
            RentalAction::Reject => write!(f, "reject"),
        }
    }
}
