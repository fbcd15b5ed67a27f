//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{PropertyList, User};
use crate::domain::value_objects::{RecordId, UserLookup};
use crate::errors::{DomainError, StoreError};

use super::trait_::UserRepository;

/// Mock user repository keeping documents in insertion order
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with a store error
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Insert documents directly, bypassing failure injection
    pub async fn seed(&self, user: User) -> User {
        self.users.write().await.push(user.clone());
        user
    }

    /// Snapshot of a stored document
    pub async fn get(&self, lookup: &UserLookup) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| matches_lookup(u, lookup)).cloned()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    fn check_writable(&self, operation: &str) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::backend(format!("users.{} rejected by mock", operation)).into());
        }
        Ok(())
    }

    async fn modify<F>(&self, operation: &str, lookup: &UserLookup, change: F) -> Result<bool, DomainError>
    where
        F: FnOnce(&mut User) + Send,
    {
        self.check_writable(operation)?;
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| matches_lookup(u, lookup)) {
            Some(user) => {
                change(user);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn matches_lookup(user: &User, lookup: &UserLookup) -> bool {
    match lookup {
        UserLookup::Email(email) => &user.email == email,
        UserLookup::Id(id) => &user.id == id,
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find(&self, lookup: &UserLookup) -> Result<Option<User>, DomainError> {
        Ok(self.get(lookup).await)
    }

    async fn find_by_ids(&self, ids: &[RecordId]) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| ids.contains(&u.id)).cloned().collect())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.check_writable("insert_one")?;
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn update_location(&self, email: &str, location: &str) -> Result<bool, DomainError> {
        let location = location.to_string();
        self.modify("update_location", &UserLookup::email(email), move |u| {
            u.set_location(location)
        })
        .await
    }

    async fn update_preferred_locations(
        &self,
        email: &str,
        locations: &[String],
    ) -> Result<bool, DomainError> {
        let locations = locations.to_vec();
        self.modify("update_preferred_locations", &UserLookup::email(email), move |u| {
            u.set_preferred_locations(locations)
        })
        .await
    }

    async fn add_reference(
        &self,
        lookup: &UserLookup,
        list: PropertyList,
        property_id: &RecordId,
    ) -> Result<bool, DomainError> {
        let id = *property_id;
        self.modify("add_reference", lookup, move |u| {
            u.add_reference(list, id);
        })
        .await
    }

    async fn remove_reference(
        &self,
        lookup: &UserLookup,
        list: PropertyList,
        property_id: &RecordId,
    ) -> Result<bool, DomainError> {
        let id = *property_id;
        self.modify("remove_reference", lookup, move |u| {
            u.remove_reference(list, &id);
        })
        .await
    }
}
