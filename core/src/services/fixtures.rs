//! Shared setup for service tests

use std::sync::Arc;

use crate::domain::entities::property::{NewListing, Property};
use crate::domain::entities::user::{NewUser, PropertyList, User};
use crate::domain::value_objects::UserLookup;
use crate::repositories::{MockPropertyRepository, MockUserRepository, UserRepository};
use crate::services::identity::EmailClaimVerifier;
use crate::services::{PropertyService, RentalService, UserService};

pub(crate) type Users = MockUserRepository;
pub(crate) type Properties = MockPropertyRepository;

/// Linked in-memory collections plus services built on top of them
pub(crate) struct Fixture {
    pub users: MockUserRepository,
    pub properties: MockPropertyRepository,
}

impl Fixture {
    pub fn new() -> Self {
        let users = MockUserRepository::new();
        let properties = MockPropertyRepository::with_users(users.clone());
        Self { users, properties }
    }

    pub fn user_service(&self) -> UserService<Users, Properties> {
        UserService::new(Arc::new(self.users.clone()), Arc::new(self.properties.clone()))
    }

    pub fn property_service(&self) -> PropertyService<Users, Properties> {
        PropertyService::new(
            Arc::new(self.users.clone()),
            Arc::new(self.properties.clone()),
            Arc::new(EmailClaimVerifier),
        )
    }

    pub fn rental_service(&self) -> RentalService<Users, Properties> {
        RentalService::new(
            Arc::new(self.users.clone()),
            Arc::new(self.properties.clone()),
            Arc::new(EmailClaimVerifier),
        )
    }

    /// Store a user directly
    pub async fn user(&self, email: &str, name: &str) -> User {
        self.users.seed(User::new(NewUser::new(email, name))).await
    }

    /// Store a user with preferred locations
    pub async fn user_preferring(&self, email: &str, locations: &[&str]) -> User {
        let profile = NewUser::new(email, "Member").with_preferred_locations(locations.iter().copied());
        self.users.seed(User::new(profile)).await
    }

    /// Store a property owned by `owner` and link it from the owner's posted list
    pub async fn listing(&self, owner: &User, title: &str, price: f64, location: &str) -> Property {
        let property = self
            .properties
            .seed(Property::new(NewListing::new(title, price, location), owner))
            .await;
        self.users
            .add_reference(&UserLookup::id(owner.id), PropertyList::Posted, &property.id)
            .await
            .unwrap();
        property
    }

    pub async fn reload_user(&self, user: &User) -> User {
        self.users.get(&UserLookup::id(user.id)).await.unwrap()
    }

    pub async fn reload_property(&self, property: &Property) -> Property {
        self.properties.get(&property.id).await.unwrap()
    }
}
