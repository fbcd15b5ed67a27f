//! Translation of repository operations into filter and update documents.

use bson::{doc, Bson, DateTime as BsonDateTime, Document};
use mongodb::options::FindOptions;

use dw_core::{ListingChanges, PropertyFilter, PropertyList, RecordId, UserLookup};

use super::USERS_COLLECTION;

fn oid_array(ids: &[RecordId]) -> Vec<Bson> {
    ids.iter().map(|id| Bson::ObjectId(id.as_object_id())).collect()
}

pub fn id_filter(id: &RecordId) -> Document {
    doc! { "_id": id.as_object_id() }
}

pub fn user_filter(lookup: &UserLookup) -> Document {
    match lookup {
        UserLookup::Email(email) => doc! { "email": email.as_str() },
        UserLookup::Id(id) => id_filter(id),
    }
}

/// Filter document for a [`PropertyFilter`]
///
/// - ids: `{_id: {$in: [...]}}`
/// - location / locations: `{location: {$eq: ..}}` / `{location: {$in: [...]}}`
/// - price bounds: `{price: {$gte: min, $lte: max}}`
/// - pending requests: `{rental_requests: {$exists: true, $ne: []}}`
pub fn property_filter(filter: &PropertyFilter) -> Document {
    let mut query = Document::new();

    if let Some(ids) = &filter.ids {
        query.insert("_id", doc! { "$in": oid_array(ids) });
    }

    let mut location = Document::new();
    if let Some(exact) = &filter.location {
        location.insert("$eq", exact.as_str());
    }
    if let Some(any_of) = &filter.locations {
        location.insert("$in", any_of.clone());
    }
    if !location.is_empty() {
        query.insert("location", location);
    }

    let mut price = Document::new();
    if let Some(min) = filter.price.min {
        price.insert("$gte", min);
    }
    if let Some(max) = filter.price.max {
        price.insert("$lte", max);
    }
    if !price.is_empty() {
        query.insert("price", price);
    }

    if let Some(owner) = &filter.owner_email {
        query.insert("owner_email", owner.as_str());
    }
    if filter.with_rental_requests {
        query.insert(
            "rental_requests",
            doc! { "$exists": true, "$ne": Bson::Array(Vec::new()) },
        );
    }
    query
}

/// Skip/limit options for a [`PropertyFilter`]
pub fn find_options(filter: &PropertyFilter) -> FindOptions {
    let mut options = FindOptions::default();
    if let Some(window) = filter.window {
        options.skip = Some(window.skip);
        options.limit = Some(i64::try_from(window.limit).unwrap_or(i64::MAX));
    }
    options
}

fn touched(now: BsonDateTime) -> Document {
    doc! { "updated_at": now }
}

/// `$addToSet` of a property id into a user list
pub fn add_reference_update(list: PropertyList, property_id: &RecordId, now: BsonDateTime) -> Document {
    doc! {
        "$addToSet": { list.field_name(): property_id.as_object_id() },
        "$set": touched(now),
    }
}

/// `$pull` of a property id from a user list
pub fn remove_reference_update(
    list: PropertyList,
    property_id: &RecordId,
    now: BsonDateTime,
) -> Document {
    doc! {
        "$pull": { list.field_name(): property_id.as_object_id() },
        "$set": touched(now),
    }
}

pub fn set_fields_update(mut fields: Document, now: BsonDateTime) -> Document {
    fields.insert("updated_at", now);
    doc! { "$set": fields }
}

/// `$set` of the supplied listing fields
pub fn listing_update(changes: &ListingChanges, now: BsonDateTime) -> Document {
    let mut fields = Document::new();
    if let Some(title) = &changes.title {
        fields.insert("title", title.trim());
    }
    if let Some(description) = &changes.description {
        fields.insert("description", description.as_str());
    }
    if let Some(price) = changes.price {
        fields.insert("price", price);
    }
    if let Some(location) = &changes.location {
        fields.insert("location", location.trim());
    }
    if let Some(thumbnail) = &changes.thumbnail {
        fields.insert("thumbnail", thumbnail.as_str());
    }
    if let Some(pictures) = &changes.pictures {
        fields.insert("pictures", pictures.clone());
    }
    set_fields_update(fields, now)
}

/// Set-insert or remove a value in one array field of a property
pub fn property_set_update(op: &str, field: &str, value: Bson, now: BsonDateTime) -> Document {
    let mut change = Document::new();
    change.insert(field, value);
    doc! { op: change, "$set": touched(now) }
}

pub fn mark_rented_update(renter_id: &RecordId, renter_email: Option<&str>, now: BsonDateTime) -> Document {
    set_fields_update(
        doc! {
            "is_rented": true,
            "rented_by_id": renter_id.as_object_id(),
            "rented_by_email": renter_email,
        },
        now,
    )
}

/// `$match` on the owner's properties with pending requests, then `$lookup`
/// of the requesting users into `requesting_users`
pub fn requesters_pipeline(owner_email: &str) -> Vec<Document> {
    let filter = PropertyFilter::all().owned_by(owner_email).with_pending_requests();
    vec![
        doc! { "$match": property_filter(&filter) },
        doc! {
            "$lookup": {
                "from": USERS_COLLECTION,
                "localField": "rental_requests",
                "foreignField": "_id",
                "as": REQUESTING_USERS,
            }
        },
    ]
}

/// Field the requester join writes into
pub const REQUESTING_USERS: &str = "requesting_users";
