use actix_web::{web, HttpResponse};

use dw_core::{DomainResult, PropertyRepository, RentalState, UserRepository};

use crate::dto::{HandleRentalQuery, RentalResponse};
use crate::handlers::{parse_id, required, respond_json};
use crate::state::AppState;

/// Handler for GET /api/users/{email}/rental-requests
///
/// The owner's properties with at least one pending request, each carrying
/// the requesting users' profiles in `requesting_users`.
pub async fn incoming_rental_requests<U, P>(
    state: web::Data<AppState<U, P>>,
    email: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    respond_json(state.user_service.incoming_rental_requests(&email).await)
}

/// Handler for POST /api/users/rental-requests/{id}/handle
///
/// `?renter_id=<id>&action=accept|reject`, optionally `&email=<owner>`.
pub async fn handle_rental_request<U, P>(
    state: web::Data<AppState<U, P>>,
    property_id: web::Path<String>,
    query: web::Query<HandleRentalQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    respond_json(resolve(&state, &property_id, query.into_inner()).await)
}

async fn resolve<U, P>(
    state: &AppState<U, P>,
    raw_property_id: &str,
    query: HandleRentalQuery,
) -> DomainResult<RentalResponse>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let property_id = parse_id(raw_property_id)?;
    let renter_id = parse_id(&required(query.renter_id, "renter_id")?)?;
    let action = required(query.action, "action")?;

    let next = state
        .rental_service
        .resolve(&property_id, &renter_id, &action, query.email.as_deref())
        .await?;

    let message = match next {
        RentalState::Accepted => "Rental request accepted",
        _ => "Rental request rejected",
    };
    Ok(RentalResponse::new(message, next))
}
