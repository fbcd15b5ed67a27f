//! Integration tests against a live MongoDB
//!
//! Run with `MONGODB_URL=mongodb://localhost:27017/ cargo test -p dw_infra -- --ignored`.
//! Every test works in its own throwaway database.

use std::sync::Arc;

use dw_core::{
    EmailClaimVerifier, NewListing, NewUser, PropertyFilter, PropertyList, PropertyRepository,
    PropertyService, RentalService, RentalState, User, UserLookup, UserRepository,
};
use dw_infra::{MongoPropertyRepository, MongoStore, MongoUserRepository};
use dw_shared::DatabaseConfig;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("dw_infra=debug")
        .with_test_writer()
        .try_init();
}

async fn store() -> MongoStore {
    init_tracing();
    let url = std::env::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://localhost:27017/".to_string());
    let name = format!("dwello_it_{}", bson::oid::ObjectId::new().to_hex());
    MongoStore::connect(&DatabaseConfig::new(url, name).with_operation_timeout(5))
        .await
        .unwrap()
}

#[tokio::test]
#[ignore]
async fn test_user_round_trip_and_references() {
    let store = store().await;
    let users = MongoUserRepository::new(&store);

    let created = users
        .create(User::new(NewUser::new("ann@example.com", "Ann")))
        .await
        .unwrap();
    let lookup = UserLookup::email("ann@example.com");

    let fetched = users.find(&lookup).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);

    let property_id = dw_core::RecordId::generate();
    assert!(users.add_reference(&lookup, PropertyList::Liked, &property_id).await.unwrap());
    assert!(users.add_reference(&lookup, PropertyList::Liked, &property_id).await.unwrap());

    let fetched = users.find(&UserLookup::Id(created.id)).await.unwrap().unwrap();
    assert_eq!(fetched.liked_properties, vec![property_id]);

    assert!(!users
        .update_location("ghost@example.com", "Austin")
        .await
        .unwrap());

    store.shutdown().await;
}

#[tokio::test]
#[ignore]
async fn test_rental_flow_with_requester_join() {
    let store = store().await;
    let users = Arc::new(MongoUserRepository::new(&store));
    let properties = Arc::new(MongoPropertyRepository::new(&store));

    let owner = users
        .create(User::new(NewUser::new("owner@example.com", "Owner")))
        .await
        .unwrap();
    let renter = users
        .create(User::new(NewUser::new("renter@example.com", "Renter")))
        .await
        .unwrap();

    let property_service = PropertyService::new(
        users.clone(),
        properties.clone(),
        Arc::new(EmailClaimVerifier),
    );
    let listing = property_service
        .create("owner@example.com", NewListing::new("Loft", 1200.0, "Austin"))
        .await
        .unwrap()
        .value;

    let rentals = RentalService::new(users.clone(), properties.clone(), Arc::new(EmailClaimVerifier));
    let state = rentals.request(&listing.id, &renter.id).await.unwrap();
    assert_eq!(state, RentalState::Requested);

    let incoming = properties.find_with_requesters(&owner.email).await.unwrap();
    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0].requesting_users[0].id, renter.id);

    let state = rentals
        .resolve(&listing.id, &renter.id, "accept", Some("owner@example.com"))
        .await
        .unwrap();
    assert_eq!(state, RentalState::Accepted);

    let rented = properties.find_by_id(&listing.id).await.unwrap().unwrap();
    assert!(rented.is_rented_by(&renter.id));
    assert!(rented.rental_requests.is_empty());

    let in_austin = properties
        .find(&PropertyFilter::all().at_location("Austin"))
        .await
        .unwrap();
    assert_eq!(in_austin.len(), 1);

    store.shutdown().await;
}
