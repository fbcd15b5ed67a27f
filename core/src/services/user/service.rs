//! User service implementation

use std::sync::Arc;

use dw_shared::validation::{normalize_string_set, validators};

use crate::domain::entities::property::{Property, PropertyWithRequesters};
use crate::domain::entities::user::{NewUser, PropertyList, User};
use crate::domain::value_objects::{PropertyFilter, UserLookup};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{PropertyRepository, UserRepository};

use super::types::Registration;

/// Service for user profiles and the property lists hanging off them
pub struct UserService<U, P>
where
    U: UserRepository,
    P: PropertyRepository,
{
    users: Arc<U>,
    properties: Arc<P>,
}

impl<U, P> UserService<U, P>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    pub fn new(users: Arc<U>, properties: Arc<P>) -> Self {
        Self { users, properties }
    }

    /// Register a user, or return the existing one for a known email
    ///
    /// Two concurrent registrations of a new email can both pass the lookup;
    /// the second insert then surfaces as a store error.
    pub async fn register_or_fetch(&self, profile: NewUser) -> DomainResult<Registration> {
        profile.validate()?;

        let lookup = UserLookup::email(profile.email.trim());
        if let Some(existing) = self.users.find(&lookup).await? {
            tracing::debug!(user_id = %existing.id, "Registration for known email");
            return Ok(Registration {
                user: existing,
                created: false,
            });
        }

        let user = self.users.create(User::new(profile)).await?;
        tracing::info!(user_id = %user.id, email = %user.email, "User registered");
        Ok(Registration {
            user,
            created: true,
        })
    }

    pub async fn get_by_email(&self, email: &str) -> DomainResult<User> {
        self.users
            .find(&UserLookup::email(email.trim()))
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    pub async fn update_location(&self, email: &str, location: &str) -> DomainResult<()> {
        if !validators::not_empty(location) {
            return Err(ValidationError::RequiredField {
                field: "location".to_string(),
            }
            .into());
        }
        let matched = self
            .users
            .update_location(email.trim(), location.trim())
            .await?;
        if !matched {
            return Err(DomainError::not_found("User"));
        }
        Ok(())
    }

    /// Replace the preferred locations, returning the stored set
    pub async fn update_preferred_locations(
        &self,
        email: &str,
        locations: Vec<String>,
    ) -> DomainResult<Vec<String>> {
        let locations = normalize_string_set(locations);
        let matched = self
            .users
            .update_preferred_locations(email.trim(), &locations)
            .await?;
        if !matched {
            return Err(DomainError::not_found("User"));
        }
        Ok(locations)
    }

    /// Resolve one of the user's reference lists into property documents
    ///
    /// An empty list short-circuits to an empty result.
    pub async fn referenced_properties(
        &self,
        email: &str,
        list: PropertyList,
    ) -> DomainResult<Vec<Property>> {
        let user = self.get_by_email(email).await?;
        let ids = user.references(list);
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.properties
            .find(&PropertyFilter::all().with_ids(ids.to_vec()))
            .await
    }

    pub async fn liked_properties(&self, email: &str) -> DomainResult<Vec<Property>> {
        self.referenced_properties(email, PropertyList::Liked).await
    }

    pub async fn posted_properties(&self, email: &str) -> DomainResult<Vec<Property>> {
        self.referenced_properties(email, PropertyList::Posted).await
    }

    pub async fn rented_properties(&self, email: &str) -> DomainResult<Vec<Property>> {
        self.referenced_properties(email, PropertyList::Rented).await
    }

    /// Properties the user has asked to rent
    pub async fn requested_properties(&self, email: &str) -> DomainResult<Vec<Property>> {
        self.referenced_properties(email, PropertyList::RentalRequests)
            .await
    }

    /// Pending requests across the owner's listings, with requester profiles
    pub async fn incoming_rental_requests(
        &self,
        owner_email: &str,
    ) -> DomainResult<Vec<PropertyWithRequesters>> {
        let owner = self.get_by_email(owner_email).await?;
        self.properties.find_with_requesters(&owner.email).await
    }
}
