//! Listing create, read, update and delete

use actix_web::{web, HttpResponse};

use dw_core::{DomainResult, Property, PropertyRepository, UserRepository};
use dw_shared::{validation::first_present, MessageResponse};

use crate::dto::{
    caller_email, CreatePropertyRequest, EmailBody, EmailQuery, PropertyCreatedResponse,
    UpdatePropertyRequest,
};
use crate::handlers::{handle_domain_error, parse_id, required, respond_json};
use crate::state::AppState;

/// Handler for POST /api/properties?email=<owner>
///
/// Owner name and picture are copied from the user record. A failure to
/// record the id in the owner's `posted_properties` is reported in
/// `warnings`; the property is still created.
pub async fn create_property<U, P>(
    state: web::Data<AppState<U, P>>,
    query: web::Query<EmailQuery>,
    request: web::Json<CreatePropertyRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let email = match required(query.into_inner().email, "email") {
        Ok(email) => email,
        Err(error) => return handle_domain_error(error),
    };

    match state
        .property_service
        .create(&email, request.into_inner().into())
        .await
    {
        Ok(outcome) => {
            let (property, warnings) = outcome.into_parts();
            HttpResponse::Created().json(PropertyCreatedResponse { property, warnings })
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/properties/{id}
pub async fn get_property<U, P>(
    state: web::Data<AppState<U, P>>,
    id: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    respond_json(find(&state, &id).await)
}

async fn find<U, P>(state: &AppState<U, P>, raw_id: &str) -> DomainResult<Property>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let id = parse_id(raw_id)?;
    state.property_service.get(&id).await
}

/// Handler for PUT /api/properties/{id}
///
/// The caller is `owner_email` from the body, falling back to `?email=`.
pub async fn update_property<U, P>(
    state: web::Data<AppState<U, P>>,
    id: web::Path<String>,
    query: web::Query<EmailQuery>,
    request: web::Json<UpdatePropertyRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    match update(&state, &id, query.into_inner(), request.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Property updated")),
        Err(error) => handle_domain_error(error),
    }
}

async fn update<U, P>(
    state: &AppState<U, P>,
    raw_id: &str,
    query: EmailQuery,
    request: UpdatePropertyRequest,
) -> DomainResult<()>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let id = parse_id(raw_id)?;
    let (owner_email, changes) = request.into_changes();
    let email = required(
        first_present([owner_email.as_deref(), query.email.as_deref()]),
        "email",
    )?;
    state.property_service.update(&id, &email, changes).await
}

/// Handler for DELETE /api/properties/{id}
///
/// The caller is `?email=`, falling back to the body.
pub async fn delete_property<U, P>(
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
    match delete(&state, &id, email).await {
        Ok(warnings) => HttpResponse::Ok()
            .json(MessageResponse::new("Property deleted").with_warnings(warnings)),
        Err(error) => handle_domain_error(error),
    }
}

async fn delete<U, P>(
    state: &AppState<U, P>,
    raw_id: &str,
    email: Option<String>,
) -> DomainResult<Vec<String>>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let id = parse_id(raw_id)?;
    let email = required(email, "email")?;
    let outcome = state.property_service.delete(&id, &email).await?;
    Ok(outcome.warnings)
}
