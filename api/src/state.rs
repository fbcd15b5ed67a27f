//! Shared application state

use std::sync::Arc;

use dw_core::{
    IdentityVerifier, PropertyRepository, PropertyService, RentalService, UserRepository,
    UserService,
};

/// Services shared by every worker
pub struct AppState<U, P>
where
    U: UserRepository,
    P: PropertyRepository,
{
    pub user_service: UserService<U, P>,
    pub property_service: PropertyService<U, P>,
    pub rental_service: RentalService<U, P>,
}

impl<U, P> AppState<U, P>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    /// Wire all services onto the same repositories and identity verifier
    pub fn new(users: Arc<U>, properties: Arc<P>, identity: Arc<dyn IdentityVerifier>) -> Self {
        Self {
            user_service: UserService::new(users.clone(), properties.clone()),
            property_service: PropertyService::new(
                users.clone(),
                properties.clone(),
                identity.clone(),
            ),
            rental_service: RentalService::new(users, properties, identity),
        }
    }
}
