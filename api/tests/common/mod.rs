//! Shared setup for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web,
};
use serde_json::Value;

use dw_api::AppState;
use dw_core::{
    EmailClaimVerifier, MockPropertyRepository, MockUserRepository, NewListing, NewUser, Property,
    PropertyList, RecordId, User, UserLookup, UserRepository,
};

pub type TestState = AppState<MockUserRepository, MockPropertyRepository>;

/// In-memory collections shared by the app under test and the assertions
pub struct TestContext {
    pub users: MockUserRepository,
    pub properties: MockPropertyRepository,
}

impl TestContext {
    pub fn new() -> Self {
        let users = MockUserRepository::new();
        let properties = MockPropertyRepository::with_users(users.clone());
        Self { users, properties }
    }

    pub fn state(&self) -> web::Data<TestState> {
        web::Data::new(AppState::new(
            Arc::new(self.users.clone()),
            Arc::new(self.properties.clone()),
            Arc::new(EmailClaimVerifier),
        ))
    }

    /// Store a user directly
    pub async fn seed_user(&self, email: &str, name: &str) -> User {
        self.users.seed(User::new(NewUser::new(email, name))).await
    }

    /// Store a listing and link it from the owner's posted list
    pub async fn seed_listing(&self, owner: &User, title: &str, price: f64, location: &str) -> Property {
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

    pub async fn user_by_email(&self, email: &str) -> User {
        self.users.get(&UserLookup::email(email)).await.unwrap()
    }

    pub async fn property(&self, id: &str) -> Property {
        self.properties
            .get(&RecordId::parse(id).unwrap())
            .await
            .unwrap()
    }
}

/// Build the full application over a [`TestContext`]
macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(dw_api::create_app(
            $ctx.state(),
            &dw_shared::AppConfig::development(),
        ))
        .await
    };
}

/// Call the app and decode the JSON body (`Null` for an empty body)
pub async fn send<S, R, B, E>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = E>,
    B: MessageBody,
    E: std::fmt::Debug,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

/// `POST /api/users/register` for a minimal profile
pub fn register_request(email: &str, name: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(serde_json::json!({ "email": email, "name": name }))
}

/// `POST /api/properties?email=<owner>` for a minimal listing
pub fn create_property_request(owner: &str, title: &str, price: f64, location: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(&format!("/api/properties?email={}", owner))
        .set_json(serde_json::json!({
            "title": title,
            "description": "Bright and quiet",
            "price": price,
            "location": location,
        }))
}

/// The `id` field of a JSON document
pub fn id_of(document: &Value) -> String {
    document["id"].as_str().unwrap().to_string()
}
