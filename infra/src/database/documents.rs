//! BSON document shapes of the `users` and `properties` collections.
//!
//! Identifiers are stored as native ObjectIds under `_id`, timestamps as BSON
//! dates. Field names match the JSON wire format.

use bson::oid::ObjectId;
use bson::DateTime as BsonDateTime;
use serde::{Deserialize, Serialize};

use dw_core::{Property, RecordId, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub posted_properties: Vec<ObjectId>,
    #[serde(default)]
    pub liked_properties: Vec<ObjectId>,
    #[serde(default)]
    pub rented_properties: Vec<ObjectId>,
    #[serde(default)]
    pub rental_requests: Vec<ObjectId>,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub location: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub pictures: Vec<String>,
    pub owner_email: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub owner_pic: String,
    #[serde(default)]
    pub is_rented: bool,
    #[serde(default)]
    pub rented_by_email: Option<String>,
    #[serde(default)]
    pub rented_by_id: Option<ObjectId>,
    #[serde(default)]
    pub rental_requests: Vec<ObjectId>,
    #[serde(default)]
    pub liked_by: Vec<String>,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

fn to_oids(ids: &[RecordId]) -> Vec<ObjectId> {
    ids.iter().map(RecordId::as_object_id).collect()
}

fn to_record_ids(oids: Vec<ObjectId>) -> Vec<RecordId> {
    oids.into_iter().map(RecordId::from).collect()
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_object_id(),
            email: user.email.clone(),
            name: user.name.clone(),
            profile_pic: user.profile_pic.clone(),
            location: user.location.clone(),
            preferred_locations: user.preferred_locations.clone(),
            posted_properties: to_oids(&user.posted_properties),
            liked_properties: to_oids(&user.liked_properties),
            rented_properties: to_oids(&user.rented_properties),
            rental_requests: to_oids(&user.rental_requests),
            created_at: BsonDateTime::from_chrono(user.created_at),
            updated_at: BsonDateTime::from_chrono(user.updated_at),
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: RecordId::from(doc.id),
            email: doc.email,
            name: doc.name,
            profile_pic: doc.profile_pic,
            location: doc.location,
            preferred_locations: doc.preferred_locations,
            posted_properties: to_record_ids(doc.posted_properties),
            liked_properties: to_record_ids(doc.liked_properties),
            rented_properties: to_record_ids(doc.rented_properties),
            rental_requests: to_record_ids(doc.rental_requests),
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

impl From<&Property> for PropertyDocument {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.as_object_id(),
            title: property.title.clone(),
            description: property.description.clone(),
            price: property.price,
            location: property.location.clone(),
            thumbnail: property.thumbnail.clone(),
            pictures: property.pictures.clone(),
            owner_email: property.owner_email.clone(),
            owner_name: property.owner_name.clone(),
            owner_pic: property.owner_pic.clone(),
            is_rented: property.is_rented,
            rented_by_email: property.rented_by_email.clone(),
            rented_by_id: property.rented_by_id.map(|id| id.as_object_id()),
            rental_requests: to_oids(&property.rental_requests),
            liked_by: property.liked_by.clone(),
            created_at: BsonDateTime::from_chrono(property.created_at),
            updated_at: BsonDateTime::from_chrono(property.updated_at),
        }
    }
}

impl From<PropertyDocument> for Property {
    fn from(doc: PropertyDocument) -> Self {
        Self {
            id: RecordId::from(doc.id),
            title: doc.title,
            description: doc.description,
            price: doc.price,
            location: doc.location,
            thumbnail: doc.thumbnail,
            pictures: doc.pictures,
            owner_email: doc.owner_email,
            owner_name: doc.owner_name,
            owner_pic: doc.owner_pic,
            is_rented: doc.is_rented,
            rented_by_email: doc.rented_by_email,
            rented_by_id: doc.rented_by_id.map(RecordId::from),
            rental_requests: to_record_ids(doc.rental_requests),
            liked_by: doc.liked_by,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}
