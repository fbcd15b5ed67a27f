//! A user's reference lists resolved into property documents

use actix_web::{web, HttpResponse};

use dw_core::{PropertyRepository, UserRepository};

use crate::handlers::respond_json;
use crate::state::AppState;

/// Handler for GET /api/users/{email}/liked-properties
pub async fn liked_properties<U, P>(
    state: web::Data<AppState<U, P>>,
    email: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    respond_json(state.user_service.liked_properties(&email).await)
}

/// Handler for GET /api/users/{email}/posted-properties
pub async fn posted_properties<U, P>(
    state: web::Data<AppState<U, P>>,
    email: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    respond_json(state.user_service.posted_properties(&email).await)
}

/// Handler for GET /api/users/{email}/rented-properties
pub async fn rented_properties<U, P>(
    state: web::Data<AppState<U, P>>,
    email: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    respond_json(state.user_service.rented_properties(&email).await)
}

/// Handler for GET /api/users/{email}/requested-properties
pub async fn requested_properties<U, P>(
    state: web::Data<AppState<U, P>>,
    email: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    respond_json(state.user_service.requested_properties(&email).await)
}
