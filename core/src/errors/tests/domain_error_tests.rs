//! Unit tests for domain error types

use crate::errors::{DomainError, StoreError, ValidationError};

#[test]
fn test_validation_error_messages() {
    let error = ValidationError::RequiredField {
        field: "email".to_string(),
    };
    assert_eq!(error.to_string(), "Field required: email");

    let error = ValidationError::InvalidAction {
        action: "maybe".to_string(),
    };
    assert!(error.to_string().contains("maybe"));
}

#[test]
fn test_bridges_are_transparent() {
    let error: DomainError = ValidationError::InvalidEmail.into();
    assert_eq!(error.to_string(), "Invalid email format");

    let error: DomainError = StoreError::Timeout {
        operation: "properties.find".to_string(),
        seconds: 10,
    }
    .into();
    assert!(matches!(error, DomainError::Store(StoreError::Timeout { seconds: 10, .. })));
    assert!(error.to_string().contains("properties.find"));
}

#[test]
fn test_not_found_message_names_resource() {
    assert_eq!(DomainError::not_found("User").to_string(), "User not found");
}

#[test]
fn test_client_error_classification() {
    assert!(DomainError::validation("bad").is_client_error());
    assert!(DomainError::not_found("Property").is_client_error());
    assert!(DomainError::forbidden("not the owner").is_client_error());
    assert!(!DomainError::Store(StoreError::backend("down")).is_client_error());

    let partial = DomainError::PartialWrite {
        operation: "rental_request".to_string(),
        completed: vec!["property.rental_requests".to_string()],
        failed: "user.rental_requests".to_string(),
        reason: "Store error: down".to_string(),
    };
    assert!(!partial.is_client_error());
    assert!(partial.to_string().contains("user.rental_requests"));
}
