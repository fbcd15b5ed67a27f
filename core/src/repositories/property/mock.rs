//! In-memory implementation of PropertyRepository for tests and local runs

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::property::{ListingChanges, Property, PropertyWithRequesters};
use crate::domain::value_objects::{PropertyFilter, RecordId};
use crate::errors::{DomainError, StoreError};
use crate::repositories::user::{MockUserRepository, UserRepository};

use super::trait_::PropertyRepository;

/// Mock property repository keeping documents in insertion order
///
/// The requester join needs access to user documents, so the repository can
/// be linked to a [`MockUserRepository`]; without one the join yields no users.
#[derive(Clone, Default)]
pub struct MockPropertyRepository {
    properties: Arc<RwLock<Vec<Property>>>,
    users: Option<MockUserRepository>,
    fail_writes: Arc<AtomicBool>,
}

impl MockPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link the user collection used by [`PropertyRepository::find_with_requesters`]
    pub fn with_users(users: MockUserRepository) -> Self {
        Self {
            users: Some(users),
            ..Self::default()
        }
    }

    /// Make every subsequent write fail with a store error
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Insert a document directly, bypassing failure injection
    pub async fn seed(&self, property: Property) -> Property {
        self.properties.write().await.push(property.clone());
        property
    }

    /// Snapshot of a stored document
    pub async fn get(&self, id: &RecordId) -> Option<Property> {
        let properties = self.properties.read().await;
        properties.iter().find(|p| &p.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.properties.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.properties.read().await.is_empty()
    }

    fn check_writable(&self, operation: &str) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(
                StoreError::backend(format!("properties.{} rejected by mock", operation)).into(),
            );
        }
        Ok(())
    }

    async fn modify<F>(&self, operation: &str, id: &RecordId, change: F) -> Result<bool, DomainError>
    where
        F: FnOnce(&mut Property) + Send,
    {
        self.check_writable(operation)?;
        let mut properties = self.properties.write().await;
        match properties.iter_mut().find(|p| &p.id == id) {
            Some(property) => {
                change(property);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl PropertyRepository for MockPropertyRepository {
    async fn create(&self, property: Property) -> Result<Property, DomainError> {
        self.check_writable("insert_one")?;
        self.properties.write().await.push(property.clone());
        Ok(property)
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Property>, DomainError> {
        Ok(self.get(id).await)
    }

    async fn find(&self, filter: &PropertyFilter) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;
        let matching = properties.iter().filter(|p| filter.matches(p)).cloned();
        Ok(match filter.window {
            Some(window) => window.apply(matching),
            None => matching.collect(),
        })
    }

    async fn update_listing(
        &self,
        id: &RecordId,
        changes: &ListingChanges,
    ) -> Result<bool, DomainError> {
        let changes = changes.clone();
        self.modify("update_listing", id, move |p| p.apply_changes(&changes))
            .await
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, DomainError> {
        self.check_writable("delete_one")?;
        let mut properties = self.properties.write().await;
        let before = properties.len();
        properties.retain(|p| &p.id != id);
        Ok(properties.len() != before)
    }

    async fn add_like(&self, id: &RecordId, email: &str) -> Result<bool, DomainError> {
        let email = email.to_string();
        self.modify("add_like", id, move |p| {
            p.add_like(&email);
        })
        .await
    }

    async fn remove_like(&self, id: &RecordId, email: &str) -> Result<bool, DomainError> {
        let email = email.to_string();
        self.modify("remove_like", id, move |p| {
            p.remove_like(&email);
        })
        .await
    }

    async fn add_rental_request(
        &self,
        id: &RecordId,
        user_id: &RecordId,
    ) -> Result<bool, DomainError> {
        let user_id = *user_id;
        self.modify("add_rental_request", id, move |p| {
            p.add_rental_request(user_id);
        })
        .await
    }

    async fn remove_rental_request(
        &self,
        id: &RecordId,
        user_id: &RecordId,
    ) -> Result<bool, DomainError> {
        let user_id = *user_id;
        self.modify("remove_rental_request", id, move |p| {
            p.remove_rental_request(&user_id);
        })
        .await
    }

    async fn mark_rented(
        &self,
        id: &RecordId,
        renter_id: &RecordId,
        renter_email: Option<&str>,
    ) -> Result<bool, DomainError> {
        let renter_id = *renter_id;
        let renter_email = renter_email.map(str::to_string);
        self.modify("mark_rented", id, move |p| p.mark_rented(renter_id, renter_email))
            .await
    }

    async fn find_with_requesters(
        &self,
        owner_email: &str,
    ) -> Result<Vec<PropertyWithRequesters>, DomainError> {
        let filter = PropertyFilter::all()
            .owned_by(owner_email)
            .with_pending_requests();
        let properties = self.find(&filter).await?;

        let mut joined = Vec::with_capacity(properties.len());
        for property in properties {
            let requesting_users = match &self.users {
                Some(users) => users.find_by_ids(&property.rental_requests).await?,
                None => Vec::new(),
            };
            joined.push(PropertyWithRequesters {
                property,
                requesting_users,
            });
        }
        Ok(joined)
    }
}
