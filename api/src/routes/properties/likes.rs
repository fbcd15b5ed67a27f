use actix_web::{web, HttpResponse};

use dw_core::{DomainResult, PropertyRepository, UserRepository};
use dw_shared::MessageResponse;

use crate::dto::{caller_email, EmailBody, EmailQuery};
use crate::handlers::{handle_domain_error, parse_id, required};
use crate::state::AppState;

/// Handler for POST /api/properties/{id}/like
pub async fn like<U, P>(
    state: web::Data<AppState<U, P>>,
    id: web::Path<String>,
    query: web::Query<EmailQuery>,
    body: Option<web::Json<EmailBody>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let email = caller_email(&query, body.as_deref());
    match set_like(&state, &id, email, true).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Property liked")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/properties/{id}/unlike
pub async fn unlike<U, P>(
    state: web::Data<AppState<U, P>>,
    id: web::Path<String>,
    query: web::Query<EmailQuery>,
    body: Option<web::Json<EmailBody>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let email = caller_email(&query, body.as_deref());
    match set_like(&state, &id, email, false).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Property unliked")),
        Err(error) => handle_domain_error(error),
    }
}

async fn set_like<U, P>(
    state: &AppState<U, P>,
    raw_id: &str,
    email: Option<String>,
    liked: bool,
) -> DomainResult<()>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let id = parse_id(raw_id)?;
    let email = required(email, "email")?;
    if liked {
        state.property_service.like(&id, &email).await
    } else {
        state.property_service.unlike(&id, &email).await
    }
}
