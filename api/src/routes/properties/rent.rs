use actix_web::{web, HttpResponse};

use dw_core::{DomainResult, PropertyRepository, UserRepository};

use crate::dto::{RentQuery, RentalResponse};
use crate::handlers::{parse_id, required, respond_json};
use crate::state::AppState;

/// Handler for POST /api/properties/{id}/rent?user_id=<id>
///
/// Records a pending request on both the property and the user. Repeating
/// the request is harmless; requesting an already accepted pair is rejected.
pub async fn request_rental<U, P>(
    state: web::Data<AppState<U, P>>,
    id: web::Path<String>,
    query: web::Query<RentQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    respond_json(request(&state, &id, query.into_inner()).await)
}

async fn request<U, P>(
    state: &AppState<U, P>,
    raw_id: &str,
    query: RentQuery,
) -> DomainResult<RentalResponse>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let property_id = parse_id(raw_id)?;
    let user_id = parse_id(&required(query.user_id, "user_id")?)?;
    let next = state.rental_service.request(&property_id, &user_id).await?;
    Ok(RentalResponse::new("Rental request sent", next))
}
