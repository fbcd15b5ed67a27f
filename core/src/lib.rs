//! # Dwello Core
//!
//! Core business logic and domain layer for the Dwello backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    ListingChanges, NewListing, NewUser, Property, PropertyList, PropertyWithRequesters,
    RentalAction, RentalEvent, RentalState, User,
};
pub use domain::value_objects::{
    Outcome, PriceRange, PropertyFilter, RecordId, SearchCriteria, UserLookup,
};
pub use errors::{DomainError, DomainResult, StoreError, ValidationError};
pub use repositories::{
    MockPropertyRepository, MockUserRepository, PropertyRepository, UserRepository,
};
pub use services::{
    EmailClaimVerifier, IdentityVerifier, PropertyService, Registration, RentalService,
    UserService, VerifiedIdentity, WriteSequence,
};
