//! Integration tests for the user endpoints

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::{create_property_request, id_of, register_request, send, TestContext};

#[actix_web::test]
async fn test_register_is_idempotent() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);

    let (status, first) = send(&app, register_request("ann@example.com", "Ann").to_request()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["email"], "ann@example.com");
    assert_eq!(first["posted_properties"], json!([]));

    let (status, second) = send(&app, register_request("ann@example.com", "Someone Else").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(id_of(&second), id_of(&first));
    assert_eq!(second["name"], "Ann");
    assert_eq!(ctx.users.len().await, 1);
}

#[actix_web::test]
async fn test_register_rejects_invalid_input() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({ "email": "not-an-email", "name": "" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation_error");
    assert!(body["details"]["fields"]["email"].is_array());
    assert!(body["details"]["fields"]["name"].is_array());
    assert!(ctx.users.is_empty().await);
}

#[actix_web::test]
async fn test_malformed_body_uses_error_envelope() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "bad_request");
    assert!(body["error"].as_str().unwrap().starts_with("Invalid body"));
}

#[actix_web::test]
async fn test_get_user() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);
    send(&app, register_request("ann@example.com", "Ann").to_request()).await;

    let req = test::TestRequest::get().uri("/api/users/ann@example.com").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ann");

    let req = test::TestRequest::get().uri("/api/users/ghost@example.com").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[actix_web::test]
async fn test_update_location() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);
    send(&app, register_request("ann@example.com", "Ann").to_request()).await;

    let req = test::TestRequest::put()
        .uri("/api/users/ann@example.com/location")
        .set_json(json!({ "location": "Austin" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Location updated");
    assert_eq!(ctx.user_by_email("ann@example.com").await.location, "Austin");

    let req = test::TestRequest::put()
        .uri("/api/users/ann@example.com/location")
        .set_json(json!({ "location": "   " }))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri("/api/users/ghost@example.com/location")
        .set_json(json!({ "location": "Austin" }))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_preferred_locations_normalizes() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);
    send(&app, register_request("ann@example.com", "Ann").to_request()).await;

    let req = test::TestRequest::put()
        .uri("/api/users/ann@example.com/preferred-locations")
        .set_json(json!({ "preferred_locations": [" Austin", "Denver", "Austin", ""] }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["preferred_locations"], json!(["Austin", "Denver"]));
    assert_eq!(
        ctx.user_by_email("ann@example.com").await.preferred_locations,
        vec!["Austin".to_string(), "Denver".to_string()]
    );
}

#[actix_web::test]
async fn test_reference_lists() {
    let ctx = TestContext::new();
    let app = test_app!(ctx);
    send(&app, register_request("owner@example.com", "Owner").to_request()).await;
    send(&app, register_request("fan@example.com", "Fan").to_request()).await;

    let req = test::TestRequest::get()
        .uri("/api/users/fan@example.com/liked-properties")
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, property) = send(
        &app,
        create_property_request("owner@example.com", "Loft", 1200.0, "Austin").to_request(),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/users/owner@example.com/posted-properties")
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], property["id"]);

    let req = test::TestRequest::post()
        .uri(&format!("/api/properties/{}/like?email=fan@example.com", id_of(&property)))
        .to_request();
    send(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/users/fan@example.com/liked-properties")
        .to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(body[0]["title"], "Loft");

    let req = test::TestRequest::get()
        .uri("/api/users/ghost@example.com/rented-properties")
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
