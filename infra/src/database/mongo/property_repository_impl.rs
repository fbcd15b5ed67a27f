//! MongoDB implementation of the PropertyRepository trait.

use std::time::Duration;

use async_trait::async_trait;
use bson::{Bson, DateTime as BsonDateTime, Document};
use futures_util::TryStreamExt;
use mongodb::Collection;

use dw_core::{
    DomainError, ListingChanges, Property, PropertyFilter, PropertyRepository,
    PropertyWithRequesters, RecordId, StoreError, User,
};

use crate::database::connection::MongoStore;
use crate::database::documents::{PropertyDocument, UserDocument};
use crate::database::errors::bounded;
use crate::database::queries::{self, REQUESTING_USERS};

/// MongoDB implementation of PropertyRepository over the `properties` collection
#[derive(Clone)]
pub struct MongoPropertyRepository {
    properties: Collection<PropertyDocument>,
    timeout: Duration,
}

impl MongoPropertyRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            properties: store.properties(),
            timeout: store.operation_timeout(),
        }
    }

    async fn update(&self, operation: &str, id: &RecordId, update: Document) -> Result<bool, DomainError> {
        let result = bounded(
            operation,
            self.timeout,
            self.properties.update_one(queries::id_filter(id), update, None),
        )
        .await?;
        Ok(result.matched_count > 0)
    }
}

/// Split an aggregation result into the property and its joined requesters
pub fn decode_with_requesters(mut raw: Document) -> Result<PropertyWithRequesters, StoreError> {
    let requesters = match raw.remove(REQUESTING_USERS) {
        Some(Bson::Array(items)) => items,
        Some(other) => {
            return Err(StoreError::Decode {
                message: format!("{} is not an array: {}", REQUESTING_USERS, other),
            })
        }
        None => Vec::new(),
    };

    let property: PropertyDocument = bson::from_document(raw).map_err(|e| StoreError::Decode {
        message: format!("property: {}", e),
    })?;
    let requesting_users = requesters
        .into_iter()
        .map(|item| {
            bson::from_bson::<UserDocument>(item)
                .map(User::from)
                .map_err(|e| StoreError::Decode {
                    message: format!("requesting user: {}", e),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PropertyWithRequesters {
        property: Property::from(property),
        requesting_users,
    })
}

#[async_trait]
impl PropertyRepository for MongoPropertyRepository {
    async fn create(&self, property: Property) -> Result<Property, DomainError> {
        bounded(
            "properties.insert_one",
            self.timeout,
            self.properties.insert_one(PropertyDocument::from(&property), None),
        )
        .await?;
        tracing::debug!(property_id = %property.id, "Property document inserted");
        Ok(property)
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Property>, DomainError> {
        let found = bounded(
            "properties.find_one",
            self.timeout,
            self.properties.find_one(queries::id_filter(id), None),
        )
        .await?;
        Ok(found.map(Property::from))
    }

    async fn find(&self, filter: &PropertyFilter) -> Result<Vec<Property>, DomainError> {
        let query = queries::property_filter(filter);
        let options = queries::find_options(filter);
        tracing::debug!(filter = %query, "Querying properties");

        let docs: Vec<PropertyDocument> = bounded("properties.find", self.timeout, async {
            let cursor = self.properties.find(query, options).await?;
            cursor.try_collect().await
        })
        .await?;
        Ok(docs.into_iter().map(Property::from).collect())
    }

    async fn update_listing(
        &self,
        id: &RecordId,
        changes: &ListingChanges,
    ) -> Result<bool, DomainError> {
        self.update(
            "properties.update_listing",
            id,
            queries::listing_update(changes, BsonDateTime::now()),
        )
        .await
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, DomainError> {
        let result = bounded(
            "properties.delete_one",
            self.timeout,
            self.properties.delete_one(queries::id_filter(id), None),
        )
        .await?;
        Ok(result.deleted_count > 0)
    }

    async fn add_like(&self, id: &RecordId, email: &str) -> Result<bool, DomainError> {
        self.update(
            "properties.add_like",
            id,
            queries::property_set_update("$addToSet", "liked_by", Bson::from(email), BsonDateTime::now()),
        )
        .await
    }

    async fn remove_like(&self, id: &RecordId, email: &str) -> Result<bool, DomainError> {
        self.update(
            "properties.remove_like",
            id,
            queries::property_set_update("$pull", "liked_by", Bson::from(email), BsonDateTime::now()),
        )
        .await
    }

    async fn add_rental_request(
        &self,
        id: &RecordId,
        user_id: &RecordId,
    ) -> Result<bool, DomainError> {
        self.update(
            "properties.add_rental_request",
            id,
            queries::property_set_update(
                "$addToSet",
                "rental_requests",
                Bson::ObjectId(user_id.as_object_id()),
                BsonDateTime::now(),
            ),
        )
        .await
    }

    async fn remove_rental_request(
        &self,
        id: &RecordId,
        user_id: &RecordId,
    ) -> Result<bool, DomainError> {
        self.update(
            "properties.remove_rental_request",
            id,
            queries::property_set_update(
                "$pull",
                "rental_requests",
                Bson::ObjectId(user_id.as_object_id()),
                BsonDateTime::now(),
            ),
        )
        .await
    }

    async fn mark_rented(
        &self,
        id: &RecordId,
        renter_id: &RecordId,
        renter_email: Option<&str>,
    ) -> Result<bool, DomainError> {
        self.update(
            "properties.mark_rented",
            id,
            queries::mark_rented_update(renter_id, renter_email, BsonDateTime::now()),
        )
        .await
    }

    async fn find_with_requesters(
        &self,
        owner_email: &str,
    ) -> Result<Vec<PropertyWithRequesters>, DomainError> {
        let pipeline = queries::requesters_pipeline(owner_email);
        let raw: Vec<Document> = bounded("properties.aggregate", self.timeout, async {
            let cursor = self.properties.aggregate(pipeline, None).await?;
            cursor.try_collect().await
        })
        .await?;

        raw.into_iter()
            .map(|doc| decode_with_requesters(doc).map_err(DomainError::from))
            .collect()
    }
}
