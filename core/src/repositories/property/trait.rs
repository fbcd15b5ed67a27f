//! Property repository trait defining the interface for listing persistence.

use async_trait::async_trait;

use crate::domain::entities::property::{ListingChanges, Property, PropertyWithRequesters};
use crate::domain::value_objects::{PropertyFilter, RecordId};
use crate::errors::DomainError;

/// Repository trait for Property entity persistence operations
///
/// Write operations return `Ok(false)` when no property has the given id.
/// Every write refreshes `updated_at`.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Insert a new property document
    async fn create(&self, property: Property) -> Result<Property, DomainError>;

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Property>, DomainError>;

    /// Fetch every property matching `filter`, honouring its limit/skip window
    async fn find(&self, filter: &PropertyFilter) -> Result<Vec<Property>, DomainError>;

    /// Set the supplied listing fields
    async fn update_listing(
        &self,
        id: &RecordId,
        changes: &ListingChanges,
    ) -> Result<bool, DomainError>;

    async fn delete(&self, id: &RecordId) -> Result<bool, DomainError>;

    /// Set-insert an email into `liked_by`
    async fn add_like(&self, id: &RecordId, email: &str) -> Result<bool, DomainError>;

    /// Remove an email from `liked_by`
    async fn remove_like(&self, id: &RecordId, email: &str) -> Result<bool, DomainError>;

    /// Set-insert a user id into `rental_requests`
    async fn add_rental_request(
        &self,
        id: &RecordId,
        user_id: &RecordId,
    ) -> Result<bool, DomainError>;

    /// Remove a user id from `rental_requests`
    async fn remove_rental_request(
        &self,
        id: &RecordId,
        user_id: &RecordId,
    ) -> Result<bool, DomainError>;

    /// Set `is_rented`, `rented_by_id` and `rented_by_email`
    async fn mark_rented(
        &self,
        id: &RecordId,
        renter_id: &RecordId,
        renter_email: Option<&str>,
    ) -> Result<bool, DomainError>;

    /// Properties of `owner_email` with pending requests, joined with the requesting users
    async fn find_with_requesters(
        &self,
        owner_email: &str,
    ) -> Result<Vec<PropertyWithRequesters>, DomainError>;
}
