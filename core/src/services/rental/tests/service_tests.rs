//! Unit tests for rental service

use crate::domain::entities::rental::RentalState;
use crate::domain::value_objects::RecordId;
use crate::errors::{DomainError, ValidationError};
use crate::services::fixtures::Fixture;

#[tokio::test]
async fn test_request_is_idempotent() {
    let fx = Fixture::new();
    let owner = fx.user("olivia@example.com", "Olivia").await;
    let renter = fx.user("rita@example.com", "Rita").await;
    let loft = fx.listing(&owner, "Loft", 1200.0, "Austin").await;
    let service = fx.rental_service();

    assert_eq!(service.request(&loft.id, &renter.id).await.unwrap(), RentalState::Requested);
    assert_eq!(service.request(&loft.id, &renter.id).await.unwrap(), RentalState::Requested);

    assert_eq!(fx.reload_property(&loft).await.rental_requests, vec![renter.id]);
    assert_eq!(fx.reload_user(&renter).await.rental_requests, vec![loft.id]);
}

#[tokio::test]
async fn test_accept_marks_rented_and_clears_requests() {
    let fx = Fixture::new();
    let owner = fx.user("olivia@example.com", "Olivia").await;
    let renter = fx.user("rita@example.com", "Rita").await;
    let loft = fx.listing(&owner, "Loft", 1200.0, "Austin").await;
    let service = fx.rental_service();

    service.request(&loft.id, &renter.id).await.unwrap();
    let state = service
        .resolve(&loft.id, &renter.id, "ACCEPT", Some("olivia@example.com"))
        .await
        .unwrap();
    assert_eq!(state, RentalState::Accepted);

    let property = fx.reload_property(&loft).await;
    assert!(property.is_rented);
    assert_eq!(property.rented_by_id, Some(renter.id));
    assert_eq!(property.rented_by_email.as_deref(), Some("rita@example.com"));
    assert!(property.rental_requests.is_empty());

    let renter = fx.reload_user(&renter).await;
    assert!(renter.rental_requests.is_empty());
    assert_eq!(renter.rented_properties, vec![loft.id]);
}

#[tokio::test]
async fn test_reject_clears_requests_only() {
    let fx = Fixture::new();
    let owner = fx.user("olivia@example.com", "Olivia").await;
    let renter = fx.user("rita@example.com", "Rita").await;
    let loft = fx.listing(&owner, "Loft", 1200.0, "Austin").await;
    let service = fx.rental_service();

    service.request(&loft.id, &renter.id).await.unwrap();
    let state = service.resolve(&loft.id, &renter.id, "reject", None).await.unwrap();
    assert_eq!(state, RentalState::None);

    let property = fx.reload_property(&loft).await;
    assert!(!property.is_rented);
    assert!(property.rented_by_id.is_none());
    assert!(property.rental_requests.is_empty());

    let renter = fx.reload_user(&renter).await;
    assert!(renter.rental_requests.is_empty());
    assert!(renter.rented_properties.is_empty());
}

#[tokio::test]
async fn test_resolve_without_request_fails() {
    let fx = Fixture::new();
    let owner = fx.user("olivia@example.com", "Olivia").await;
    let renter = fx.user("rita@example.com", "Rita").await;
    let loft = fx.listing(&owner, "Loft", 1200.0, "Austin").await;

    let result = fx
        .rental_service()
        .resolve(&loft.id, &renter.id, "accept", None)
        .await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::BusinessRuleViolation { .. }))
    ));
    assert!(!fx.reload_property(&loft).await.is_rented);
}

#[tokio::test]
async fn test_resolve_rejects_unknown_action_and_foreign_caller() {
    let fx = Fixture::new();
    let owner = fx.user("olivia@example.com", "Olivia").await;
    let renter = fx.user("rita@example.com", "Rita").await;
    let loft = fx.listing(&owner, "Loft", 1200.0, "Austin").await;
    let service = fx.rental_service();
    service.request(&loft.id, &renter.id).await.unwrap();

    assert!(matches!(
        service.resolve(&loft.id, &renter.id, "maybe", None).await,
        Err(DomainError::ValidationErr(ValidationError::InvalidAction { .. }))
    ));
    assert!(matches!(
        service
            .resolve(&loft.id, &renter.id, "accept", Some("rita@example.com"))
            .await,
        Err(DomainError::Forbidden { .. })
    ));
    assert_eq!(fx.reload_property(&loft).await.rental_requests, vec![renter.id]);
}

#[tokio::test]
async fn test_last_accept_wins() {
    let fx = Fixture::new();
    let owner = fx.user("olivia@example.com", "Olivia").await;
    let first = fx.user("first@example.com", "First").await;
    let second = fx.user("second@example.com", "Second").await;
    let loft = fx.listing(&owner, "Loft", 1200.0, "Austin").await;
    let service = fx.rental_service();

    service.request(&loft.id, &first.id).await.unwrap();
    service.request(&loft.id, &second.id).await.unwrap();
    service.resolve(&loft.id, &first.id, "accept", None).await.unwrap();
    service.resolve(&loft.id, &second.id, "accept", None).await.unwrap();

    let property = fx.reload_property(&loft).await;
    assert_eq!(property.rented_by_id, Some(second.id));
    assert!(property.rental_requests.is_empty());
}

#[tokio::test]
async fn test_request_while_renting_fails() {
    let fx = Fixture::new();
    let owner = fx.user("olivia@example.com", "Olivia").await;
    let renter = fx.user("rita@example.com", "Rita").await;
    let loft = fx.listing(&owner, "Loft", 1200.0, "Austin").await;
    let service = fx.rental_service();

    service.request(&loft.id, &renter.id).await.unwrap();
    service.resolve(&loft.id, &renter.id, "accept", None).await.unwrap();

    assert!(matches!(
        service.request(&loft.id, &renter.id).await,
        Err(DomainError::ValidationErr(_))
    ));
}

#[tokio::test]
async fn test_missing_documents_are_not_found() {
    let fx = Fixture::new();
    let owner = fx.user("olivia@example.com", "Olivia").await;
    let loft = fx.listing(&owner, "Loft", 1200.0, "Austin").await;
    let service = fx.rental_service();

    assert!(matches!(
        service.request(&loft.id, &RecordId::generate()).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        service.request(&RecordId::generate(), &owner.id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(fx.reload_property(&loft).await.rental_requests.is_empty());
}

#[tokio::test]
async fn test_user_write_failure_reports_partial_write() {
    let fx = Fixture::new();
    let owner = fx.user("olivia@example.com", "Olivia").await;
    let renter = fx.user("rita@example.com", "Rita").await;
    let loft = fx.listing(&owner, "Loft", 1200.0, "Austin").await;
    fx.users.set_fail_writes(true);

    let result = fx.rental_service().request(&loft.id, &renter.id).await;

    match result {
        Err(DomainError::PartialWrite {
            completed, failed, ..
        }) => {
            assert_eq!(completed, vec!["property.rental_requests".to_string()]);
            assert_eq!(failed, "user.rental_requests");
        }
        other => panic!("Expected partial write, got {:?}", other),
    }
    // The applied step is not rolled back
    assert_eq!(fx.reload_property(&loft).await.rental_requests, vec![renter.id]);
    assert!(fx.reload_user(&renter).await.rental_requests.is_empty());
}

#[tokio::test]
async fn test_property_write_failure_is_plain_store_error() {
    let fx = Fixture::new();
    let owner = fx.user("olivia@example.com", "Olivia").await;
    let renter = fx.user("rita@example.com", "Rita").await;
    let loft = fx.listing(&owner, "Loft", 1200.0, "Austin").await;
    fx.properties.set_fail_writes(true);

    let result = fx.rental_service().request(&loft.id, &renter.id).await;
    assert!(matches!(result, Err(DomainError::Store(_))));
    assert!(fx.reload_user(&renter).await.rental_requests.is_empty());
}
