//! Property service implementation

use std::sync::Arc;

use crate::domain::entities::property::{ListingChanges, NewListing, Property};
use crate::domain::entities::user::{PropertyList, User};
use crate::domain::value_objects::{Outcome, PropertyFilter, RecordId, SearchCriteria, UserLookup};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{PropertyRepository, UserRepository};
use crate::services::consistency::require_match;
use crate::services::identity::{IdentityVerifier, VerifiedIdentity};

/// Service for property listings and the like/search/feed queries over them
pub struct PropertyService<U, P>
where
    U: UserRepository,
    P: PropertyRepository,
{
    users: Arc<U>,
    properties: Arc<P>,
    identity: Arc<dyn IdentityVerifier>,
}

impl<U, P> PropertyService<U, P>
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

    /// Create a listing for the caller
    ///
    /// The property is inserted first, then its id is appended to the owner's
    /// `posted_properties`. A failure of that second write does not undo the
    /// listing; it is reported as a warning on the outcome.
    pub async fn create(
        &self,
        caller_email: &str,
        listing: NewListing,
    ) -> DomainResult<Outcome<Property>> {
        let caller = self.identity.verify(caller_email).await?;
        listing.validate()?;
        let owner = self.load_user(caller.email()).await?;

        let property = self.properties.create(Property::new(listing, &owner)).await?;
        tracing::info!(
            property_id = %property.id,
            owner = %owner.email,
            "Property created"
        );

        let mut outcome = Outcome::new(property);
        let back_reference = self
            .users
            .add_reference(
                &UserLookup::id(owner.id),
                PropertyList::Posted,
                &outcome.value.id,
            )
            .await;
        match back_reference {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(property_id = %outcome.value.id, "Owner vanished before back-reference write");
                outcome.warn("Property created but the owner record was not found to link it");
            }
            Err(err) => {
                tracing::warn!(
                    property_id = %outcome.value.id,
                    error = %err,
                    "Failed to add property to owner's posted list"
                );
                outcome.warn(format!(
                    "Property created but the owner's posted properties could not be updated: {}",
                    err
                ));
            }
        }
        Ok(outcome)
    }

    pub async fn get(&self, id: &RecordId) -> DomainResult<Property> {
        self.properties
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))
    }

    /// Change listing fields; only the owner may do so
    pub async fn update(
        &self,
        id: &RecordId,
        caller_email: &str,
        changes: ListingChanges,
    ) -> DomainResult<()> {
        let caller = self.identity.verify(caller_email).await?;
        let property = self.get(id).await?;
        authorize_owner(&caller, &property, "update")?;
        changes.validate()?;

        let matched = self.properties.update_listing(id, &changes).await?;
        require_match(matched, "Property")?;
        tracing::info!(property_id = %id, "Property updated");
        Ok(())
    }

    /// Delete a listing and prune it from the owner's posted list
    pub async fn delete(&self, id: &RecordId, caller_email: &str) -> DomainResult<Outcome<()>> {
        let caller = self.identity.verify(caller_email).await?;
        let property = self.get(id).await?;
        authorize_owner(&caller, &property, "delete")?;

        let matched = self.properties.delete(id).await?;
        require_match(matched, "Property")?;
        tracing::info!(property_id = %id, "Property deleted");

        let mut outcome = Outcome::new(());
        let prune = self
            .users
            .remove_reference(
                &UserLookup::email(property.owner_email.as_str()),
                PropertyList::Posted,
                id,
            )
            .await;
        if let Err(err) = prune {
            tracing::warn!(
                property_id = %id,
                error = %err,
                "Failed to remove property from owner's posted list"
            );
            outcome.warn(format!(
                "Property deleted but the owner's posted properties could not be updated: {}",
                err
            ));
        }
        Ok(outcome)
    }

    pub async fn like(&self, id: &RecordId, email: &str) -> DomainResult<()> {
        self.set_like(id, email, true).await
    }

    pub async fn unlike(&self, id: &RecordId, email: &str) -> DomainResult<()> {
        self.set_like(id, email, false).await
    }

    /// Apply both halves of a like pair
    ///
    /// Both writes are attempted regardless of the other's result; the last
    /// error observed is returned.
    async fn set_like(&self, id: &RecordId, email: &str, liked: bool) -> DomainResult<()> {
        let caller = self.identity.verify(email).await?;
        self.get(id).await?;
        let user = self.load_user(caller.email()).await?;

        let property_write = if liked {
            self.properties.add_like(id, caller.email()).await
        } else {
            self.properties.remove_like(id, caller.email()).await
        };
        match &property_write {
            Ok(_) => tracing::debug!(property_id = %id, liked, "liked_by updated"),
            Err(err) => tracing::warn!(property_id = %id, liked, error = %err, "liked_by update failed"),
        }

        let lookup = UserLookup::id(user.id);
        let user_write = if liked {
            self.users.add_reference(&lookup, PropertyList::Liked, id).await
        } else {
            self.users.remove_reference(&lookup, PropertyList::Liked, id).await
        };
        match &user_write {
            Ok(_) => tracing::debug!(user_id = %user.id, liked, "liked_properties updated"),
            Err(err) => tracing::warn!(user_id = %user.id, liked, error = %err, "liked_properties update failed"),
        }

        user_write.and(property_write).map(|_| ())
    }

    /// Location equality, inclusive price bounds and a limit/skip window
    pub async fn search(&self, criteria: &SearchCriteria) -> DomainResult<Vec<Property>> {
        self.properties.find(&criteria.to_filter()).await
    }

    /// Properties located in any of the user's preferred locations
    pub async fn homescreen(&self, email: &str) -> DomainResult<Vec<Property>> {
        let caller = self.identity.verify(email).await?;
        let user = self.load_user(caller.email()).await?;
        if user.preferred_locations.is_empty() {
            return Err(DomainError::validation("User has no preferred locations set"));
        }
        self.properties
            .find(&PropertyFilter::all().in_locations(user.preferred_locations))
            .await
    }

    async fn load_user(&self, email: &str) -> DomainResult<User> {
        self.users
            .find(&UserLookup::email(email))
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }
}

fn authorize_owner(caller: &VerifiedIdentity, property: &Property, action: &str) -> DomainResult<()> {
    if caller.owns(property) {
        Ok(())
    } else {
        tracing::warn!(
            property_id = %property.id,
            caller = caller.email(),
            action,
            "Ownership check failed"
        );
        Err(DomainError::forbidden(format!(
            "Only the owner can {} this property",
            action
        )))
    }
}
