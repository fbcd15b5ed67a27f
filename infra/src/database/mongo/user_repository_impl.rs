//! MongoDB implementation of the UserRepository trait.

use std::time::Duration;

use async_trait::async_trait;
use bson::{doc, DateTime as BsonDateTime};
use futures_util::TryStreamExt;
use mongodb::Collection;

use dw_core::{DomainError, PropertyList, RecordId, User, UserLookup, UserRepository};

use crate::database::connection::MongoStore;
use crate::database::documents::UserDocument;
use crate::database::errors::bounded;
use crate::database::queries;

/// MongoDB implementation of UserRepository over the `users` collection
#[derive(Clone)]
pub struct MongoUserRepository {
    users: Collection<UserDocument>,
    timeout: Duration,
}

impl MongoUserRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            users: store.users(),
            timeout: store.operation_timeout(),
        }
    }

    async fn update(
        &self,
        operation: &str,
        filter: bson::Document,
        update: bson::Document,
    ) -> Result<bool, DomainError> {
        let result = bounded(operation, self.timeout, self.users.update_one(filter, update, None)).await?;
        Ok(result.matched_count > 0)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find(&self, lookup: &UserLookup) -> Result<Option<User>, DomainError> {
        let found = bounded(
            "users.find_one",
            self.timeout,
            self.users.find_one(queries::user_filter(lookup), None),
        )
        .await?;
        Ok(found.map(User::from))
    }

    async fn find_by_ids(&self, ids: &[RecordId]) -> Result<Vec<User>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let oids: Vec<_> = ids.iter().map(RecordId::as_object_id).collect();
        let docs: Vec<UserDocument> = bounded("users.find", self.timeout, async {
            let cursor = self.users.find(doc! { "_id": { "$in": oids } }, None).await?;
            cursor.try_collect().await
        })
        .await?;
        Ok(docs.into_iter().map(User::from).collect())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        bounded(
            "users.insert_one",
            self.timeout,
            self.users.insert_one(UserDocument::from(&user), None),
        )
        .await?;
        tracing::debug!(user_id = %user.id, "User document inserted");
        Ok(user)
    }

    async fn update_location(&self, email: &str, location: &str) -> Result<bool, DomainError> {
        self.update(
            "users.update_location",
            queries::user_filter(&UserLookup::email(email)),
            queries::set_fields_update(doc! { "location": location }, BsonDateTime::now()),
        )
        .await
    }

    async fn update_preferred_locations(
        &self,
        email: &str,
        locations: &[String],
    ) -> Result<bool, DomainError> {
        self.update(
            "users.update_preferred_locations",
            queries::user_filter(&UserLookup::email(email)),
            queries::set_fields_update(
                doc! { "preferred_locations": locations.to_vec() },
                BsonDateTime::now(),
            ),
        )
        .await
    }

    async fn add_reference(
        &self,
        lookup: &UserLookup,
        list: PropertyList,
        property_id: &RecordId,
    ) -> Result<bool, DomainError> {
        self.update(
            "users.add_reference",
            queries::user_filter(lookup),
            queries::add_reference_update(list, property_id, BsonDateTime::now()),
        )
        .await
    }

    async fn remove_reference(
        &self,
        lookup: &UserLookup,
        list: PropertyList,
        property_id: &RecordId,
    ) -> Result<bool, DomainError> {
        self.update(
            "users.remove_reference",
            queries::user_filter(lookup),
            queries::remove_reference_update(list, property_id, BsonDateTime::now()),
        )
        .await
    }
}
