//! User repository trait defining the interface for user persistence.
//!
//! Reference lists are only ever changed through set-insert and set-remove
//! operations so that concurrent writers cannot clobber each other's entries.
//! Every write refreshes `updated_at`.

use async_trait::async_trait;

use crate::domain::entities::user::{PropertyList, User};
use crate::domain::value_objects::{RecordId, UserLookup};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Write operations return `Ok(false)` when no user matched the lookup.
///
/// # Example
/// ```no_run
/// # use dw_core::repositories::UserRepository;
/// # use dw_core::domain::{PropertyList, RecordId, UserLookup};
/// # async fn example(repo: &impl UserRepository, property_id: RecordId) -> Result<(), Box<dyn std::error::Error>> {
/// let owner = UserLookup::email("owner@example.com");
/// if !repo.add_reference(&owner, PropertyList::Posted, &property_id).await? {
///     println!("owner disappeared");
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a single user by email or id
    async fn find(&self, lookup: &UserLookup) -> Result<Option<User>, DomainError>;

    /// Fetch the users whose ids appear in `ids`, in store order
    async fn find_by_ids(&self, ids: &[RecordId]) -> Result<Vec<User>, DomainError>;

    /// Insert a new user document
    ///
    /// Email uniqueness is the caller's concern (check-then-insert).
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Set the user's current location
    async fn update_location(&self, email: &str, location: &str) -> Result<bool, DomainError>;

    /// Replace the user's preferred locations
    async fn update_preferred_locations(
        &self,
        email: &str,
        locations: &[String],
    ) -> Result<bool, DomainError>;

    /// Set-insert a property id into one of the user's reference lists
    async fn add_reference(
        &self,
        lookup: &UserLookup,
        list: PropertyList,
        property_id: &RecordId,
    ) -> Result<bool, DomainError>;

    /// Remove a property id from one of the user's reference lists
    async fn remove_reference(
        &self,
        lookup: &UserLookup,
        list: PropertyList,
        property_id: &RecordId,
    ) -> Result<bool, DomainError>;
}
