use actix_web::{web, HttpResponse};

use dw_core::{PropertyRepository, UserRepository};
use dw_shared::MessageResponse;

use crate::dto::{PreferredLocationsResponse, UpdateLocationRequest, UpdatePreferredLocationsRequest};
use crate::handlers::{handle_domain_error, respond_json};
use crate::state::AppState;

/// Handler for GET /api/users/{email}
pub async fn get_user<U, P>(
    state: web::Data<AppState<U, P>>,
    email: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    respond_json(state.user_service.get_by_email(&email).await)
}

/// Handler for PUT /api/users/{email}/location
pub async fn update_location<U, P>(
    state: web::Data<AppState<U, P>>,
    email: web::Path<String>,
    request: web::Json<UpdateLocationRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    match state
        .user_service
        .update_location(&email, &request.location)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Location updated")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/users/{email}/preferred-locations
///
/// The list is stored trimmed and de-duplicated; an empty list clears it.
pub async fn update_preferred_locations<U, P>(
    state: web::Data<AppState<U, P>>,
    email: web::Path<String>,
    request: web::Json<UpdatePreferredLocationsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let locations = request.into_inner().preferred_locations;
    match state
        .user_service
        .update_preferred_locations(&email, locations)
        .await
    {
        Ok(preferred_locations) => HttpResponse::Ok().json(PreferredLocationsResponse {
            message: "Preferred locations updated".to_string(),
            preferred_locations,
        }),
        Err(error) => handle_domain_error(error),
    }
}
