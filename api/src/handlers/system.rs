//! Health, endpoint index and fallback handlers

use actix_web::{http::StatusCode, HttpRequest, HttpResponse};

use dw_shared::{error_codes, HealthResponse};

use super::error::error_response;

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy("dwello-api", env!("CARGO_PKG_VERSION")))
}

/// Endpoint index
pub async fn api_index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Dwello API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /health",
            "users": {
                "register": "POST /api/users/register",
                "get": "GET /api/users/{email}",
                "update_location": "PUT /api/users/{email}/location",
                "update_preferred_locations": "PUT /api/users/{email}/preferred-locations",
                "liked_properties": "GET /api/users/{email}/liked-properties",
                "posted_properties": "GET /api/users/{email}/posted-properties",
                "rented_properties": "GET /api/users/{email}/rented-properties",
                "requested_properties": "GET /api/users/{email}/requested-properties",
                "rental_requests": "GET /api/users/{email}/rental-requests",
                "handle_rental_request": "POST /api/users/rental-requests/{id}/handle?renter_id=&action=accept|reject"
            },
            "properties": {
                "create": "POST /api/properties?email=",
                "get": "GET /api/properties/{id}",
                "update": "PUT /api/properties/{id}",
                "delete": "DELETE /api/properties/{id}?email=",
                "like": "POST /api/properties/{id}/like?email=",
                "unlike": "POST /api/properties/{id}/unlike?email=",
                "liked_properties": "GET /api/properties/liked-properties?email=",
                "search": "GET /api/properties/search?location=&min_price=&max_price=&limit=&skip=",
                "homescreen": "GET /api/properties/homescreen?email=",
                "rent": "POST /api/properties/{id}/rent?user_id="
            }
        }
    }))
}

/// Default 404 handler
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::debug!("No route for {} {}", req.method(), req.path());
    error_response(
        StatusCode::NOT_FOUND,
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    )
}
