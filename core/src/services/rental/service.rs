//! Rental service implementation
//!
//! A rental touches the property document and the renter's user document.
//! Each transition runs as a [`WriteSequence`] in a fixed order:
//!
//! - request: property `rental_requests`, then user `rental_requests`
//! - resolve: remove from both request sets, then on accept mark the
//!   property rented and add it to the renter's `rented_properties`

use std::sync::Arc;

use crate::domain::entities::property::Property;
use crate::domain::entities::rental::{RentalAction, RentalEvent, RentalState};
use crate::domain::entities::user::{PropertyList, User};
use crate::domain::value_objects::{RecordId, UserLookup};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{PropertyRepository, UserRepository};
use crate::services::consistency::{require_match, WriteSequence};
use crate::services::identity::IdentityVerifier;

/// Service driving the rental request state machine
pub struct RentalService<U, P>
where
    U: UserRepository,
    P: PropertyRepository,
{
    users: Arc<U>,
    properties: Arc<P>,
    identity: Arc<dyn IdentityVerifier>,
}

impl<U, P> RentalService<U, P>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    pub fn new(users: Arc<U>, properties: Arc<P>, identity: Arc<dyn IdentityVerifier>) -> Self {
        Self {
            users,
            properties,
            identity,
        }
    }

    /// Ask to rent a property; repeating a pending request is a no-op
    pub async fn request(&self, property_id: &RecordId, user_id: &RecordId) -> DomainResult<RentalState> {
        let property = self.load_property(property_id).await?;
        let user = self.load_user(user_id).await?;
        let next = RentalState::of(&property, &user.id).apply(RentalEvent::Request)?;

        let mut seq = WriteSequence::new("rental_request");
        seq.step("property.rental_requests", async {
            require_match(
                self.properties.add_rental_request(property_id, &user.id).await?,
                "Property",
            )
        })
        .await?;
        seq.step("user.rental_requests", async {
            require_match(
                self.users
                    .add_reference(&UserLookup::id(user.id), PropertyList::RentalRequests, property_id)
                    .await?,
                "User",
            )
        })
        .await?;

        tracing::info!(property_id = %property_id, user_id = %user.id, "Rental requested");
        Ok(next)
    }

    /// Accept or reject a pending request
    ///
    /// `action` is matched case-insensitively. When `caller_email` is given it
    /// must be the property owner.
    pub async fn resolve(
        &self,
        property_id: &RecordId,
        renter_id: &RecordId,
        action: &str,
        caller_email: Option<&str>,
    ) -> DomainResult<RentalState> {
        let action: RentalAction = action.parse()?;
        let property = self.load_property(property_id).await?;

        if let Some(claimed) = caller_email {
            let caller = self.identity.verify(claimed).await?;
            if !caller.owns(&property) {
                return Err(DomainError::forbidden(
                    "Only the owner can handle rental requests for this property",
                ));
            }
        }

        let renter = self.load_user(renter_id).await?;
        let next = RentalState::of(&property, &renter.id).apply(action.event())?;
        let renter_lookup = UserLookup::id(renter.id);

        let mut seq = WriteSequence::new(format!("rental_{}", action));
        seq.step("property.rental_requests", async {
            require_match(
                self.properties.remove_rental_request(property_id, &renter.id).await?,
                "Property",
            )
        })
        .await?;
        seq.step("user.rental_requests", async {
            require_match(
                self.users
                    .remove_reference(&renter_lookup, PropertyList::RentalRequests, property_id)
                    .await?,
                "User",
            )
        })
        .await?;

        if action == RentalAction::Accept {
            seq.step("property.rented_by", async {
                require_match(
                    self.properties
                        .mark_rented(property_id, &renter.id, Some(renter.email.as_str()))
                        .await?,
                    "Property",
                )
            })
            .await?;
            seq.step("user.rented_properties", async {
                require_match(
                    self.users
                        .add_reference(&renter_lookup, PropertyList::Rented, property_id)
                        .await?,
                    "User",
                )
            })
            .await?;
        }

        tracing::info!(
            property_id = %property_id,
            renter_id = %renter.id,
            action = %action,
            "Rental request resolved"
        );
        Ok(next)
    }

    async fn load_property(&self, id: &RecordId) -> DomainResult<Property> {
        self.properties
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))
    }

    async fn load_user(&self, id: &RecordId) -> DomainResult<User> {
        self.users
            .find(&UserLookup::id(*id))
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }
}
