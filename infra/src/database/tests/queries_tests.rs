//! Unit tests for filter, option and update document builders

use bson::{doc, Bson, DateTime as BsonDateTime};

use dw_core::{ListingChanges, PriceRange, PropertyFilter, PropertyList, RecordId, UserLookup};
use dw_shared::PageWindow;

use crate::database::queries::{
    add_reference_update, find_options, listing_update, mark_rented_update, property_filter,
    remove_reference_update, requesters_pipeline, user_filter, REQUESTING_USERS,
};

#[test]
fn test_empty_filter_matches_everything() {
    assert!(property_filter(&PropertyFilter::all()).is_empty());
}

#[test]
fn test_user_filter_by_email_and_id() {
    assert_eq!(
        user_filter(&UserLookup::email("ann@example.com")),
        doc! { "email": "ann@example.com" }
    );

    let id = RecordId::generate();
    assert_eq!(user_filter(&UserLookup::Id(id)), doc! { "_id": id.as_object_id() });
}

#[test]
fn test_ids_become_in_clause() {
    let first = RecordId::generate();
    let second = RecordId::generate();
    let query = property_filter(&PropertyFilter::all().with_ids(vec![first, second]));

    assert_eq!(
        query,
        doc! { "_id": { "$in": [first.as_object_id(), second.as_object_id()] } }
    );
}

#[test]
fn test_location_and_price_bounds() {
    let filter = PropertyFilter::all()
        .at_location("Austin")
        .priced(PriceRange::new(Some(500.0), Some(1500.0)));

    assert_eq!(
        property_filter(&filter),
        doc! {
            "location": { "$eq": "Austin" },
            "price": { "$gte": 500.0, "$lte": 1500.0 },
        }
    );
}

#[test]
fn test_single_price_bound() {
    let filter = PropertyFilter::all().priced(PriceRange::new(None, Some(900.0)));
    assert_eq!(property_filter(&filter), doc! { "price": { "$lte": 900.0 } });
}

#[test]
fn test_preferred_locations_filter() {
    let filter = PropertyFilter::all().in_locations(vec!["Austin".to_string(), "Denver".to_string()]);
    assert_eq!(
        property_filter(&filter),
        doc! { "location": { "$in": ["Austin", "Denver"] } }
    );
}

#[test]
fn test_pending_requests_filter() {
    let filter = PropertyFilter::all().owned_by("owner@example.com").with_pending_requests();
    assert_eq!(
        property_filter(&filter),
        doc! {
            "owner_email": "owner@example.com",
            "rental_requests": { "$exists": true, "$ne": [] },
        }
    );
}

#[test]
fn test_find_options_window() {
    let unpaged = find_options(&PropertyFilter::all());
    assert_eq!(unpaged.skip, None);
    assert_eq!(unpaged.limit, None);

    let paged = find_options(&PropertyFilter::all().paged(PageWindow::new(5, 20)));
    assert_eq!(paged.skip, Some(20));
    assert_eq!(paged.limit, Some(5));
}

#[test]
fn test_reference_updates() {
    let property_id = RecordId::generate();
    let now = BsonDateTime::now();

    assert_eq!(
        add_reference_update(PropertyList::Liked, &property_id, now),
        doc! {
            "$addToSet": { "liked_properties": property_id.as_object_id() },
            "$set": { "updated_at": now },
        }
    );
    assert_eq!(
        remove_reference_update(PropertyList::RentalRequests, &property_id, now),
        doc! {
            "$pull": { "rental_requests": property_id.as_object_id() },
            "$set": { "updated_at": now },
        }
    );
}

#[test]
fn test_listing_update_sets_only_supplied_fields() {
    let now = BsonDateTime::now();
    let changes = ListingChanges {
        title: Some("  Sunny loft ".to_string()),
        price: Some(1250.0),
        ..Default::default()
    };

    assert_eq!(
        listing_update(&changes, now),
        doc! { "$set": { "title": "Sunny loft", "price": 1250.0, "updated_at": now } }
    );
}

#[test]
fn test_mark_rented_update() {
    let renter = RecordId::generate();
    let now = BsonDateTime::now();
    let update = mark_rented_update(&renter, Some("renter@example.com"), now);
    let fields = update.get_document("$set").unwrap();

    assert_eq!(fields.get_bool("is_rented").unwrap(), true);
    assert_eq!(fields.get_object_id("rented_by_id").unwrap(), renter.as_object_id());
    assert_eq!(fields.get_str("rented_by_email").unwrap(), "renter@example.com");

    let anonymous = mark_rented_update(&renter, None, now);
    assert_eq!(
        anonymous.get_document("$set").unwrap().get("rented_by_email"),
        Some(&Bson::Null)
    );
}

#[test]
fn test_requesters_pipeline() {
    let pipeline = requesters_pipeline("owner@example.com");
    assert_eq!(pipeline.len(), 2);

    let lookup = pipeline[1].get_document("$lookup").unwrap();
    assert_eq!(lookup.get_str("from").unwrap(), "users");
    assert_eq!(lookup.get_str("localField").unwrap(), "rental_requests");
    assert_eq!(lookup.get_str("foreignField").unwrap(), "_id");
    assert_eq!(lookup.get_str("as").unwrap(), REQUESTING_USERS);
}
