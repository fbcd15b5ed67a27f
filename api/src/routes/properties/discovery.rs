//! Read-only property queries

use actix_web::{web, HttpResponse};

use dw_core::{PropertyRepository, SearchCriteria, UserRepository};

use crate::dto::{caller_email, EmailBody, EmailQuery};
use crate::handlers::{handle_domain_error, required, respond_json};
use crate::state::AppState;

/// Handler for GET /api/properties/liked-properties?email=
pub async fn liked_properties<U, P>(
    state: web::Data<AppState<U, P>>,
    query: web::Query<EmailQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    match required(query.into_inner().email, "email") {
        Ok(email) => respond_json(state.user_service.liked_properties(&email).await),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/properties/search
///
/// `location` must match exactly; `min_price`/`max_price` are inclusive and
/// ignored when unparsable. `limit` defaults to 10 and `skip` to 0.
pub async fn search<U, P>(
    state: web::Data<AppState<U, P>>,
    criteria: web::Query<SearchCriteria>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    log::debug!("Property search: {:?}", criteria);
    respond_json(state.property_service.search(&criteria).await)
}

/// Handler for GET /api/properties/homescreen
///
/// Properties in any of the caller's preferred locations. The caller is
/// `?email=`, falling back to the body.
pub async fn homescreen<U, P>(
    state: web::Data<AppState<U, P>>,
    query: web::Query<EmailQuery>,
    body: Option<web::Json<EmailBody>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    match required(caller_email(&query, body.as_deref()), "email") {
        Ok(email) => respond_json(state.property_service.homescreen(&email).await),
        Err(error) => handle_domain_error(error),
    }
}
