use actix_web::{web, HttpResponse};
use validator::Validate;

use dw_core::{PropertyRepository, Registration, UserRepository};

use crate::dto::RegisterRequest;
use crate::handlers::{handle_domain_error, validation_failure};
use crate::state::AppState;

/// Handler for POST /api/users/register
///
/// Returns 201 with the new user, or 200 with the stored user when the email
/// is already registered.
pub async fn register<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_failure(&errors);
    }

    match state.user_service.register_or_fetch(request.into()).await {
        Ok(Registration {
            user,
            created: true,
        }) => HttpResponse::Created().json(user),
        Ok(Registration { user, .. }) => HttpResponse::Ok().json(user),
        Err(error) => handle_domain_error(error),
    }
}
