//! User route handlers
//!
//! - registration (idempotent, doubles as login)
//! - profile reads and location updates
//! - reference lists resolved into property documents
//! - rental requests received by an owner and their resolution

pub mod listings;
pub mod profile;
pub mod register;
pub mod rental_requests;

use actix_web::web;

use dw_core::{PropertyRepository, UserRepository};

/// Mount `/api/users`
///
/// Static segments are registered before `/{email}` so they are never taken
/// for an email.
pub fn configure<U, P>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    cfg.service(
        web::scope("/api/users")
            .route("/register", web::post().to(register::register::<U, P>))
            .route(
                "/rental-requests/{id}/handle",
                web::post().to(rental_requests::handle_rental_request::<U, P>),
            )
            .route("/{email}", web::get().to(profile::get_user::<U, P>))
            .route(
                "/{email}/location",
                web::put().to(profile::update_location::<U, P>),
            )
            .route(
                "/{email}/preferred-locations",
                web::put().to(profile::update_preferred_locations::<U, P>),
            )
            .route(
                "/{email}/liked-properties",
                web::get().to(listings::liked_properties::<U, P>),
            )
            .route(
                "/{email}/posted-properties",
                web::get().to(listings::posted_properties::<U, P>),
            )
            .route(
                "/{email}/rented-properties",
                web::get().to(listings::rented_properties::<U, P>),
            )
            .route(
                "/{email}/requested-properties",
                web::get().to(listings::requested_properties::<U, P>),
            )
            .route(
                "/{email}/rental-requests",
                web::get().to(rental_requests::incoming_rental_requests::<U, P>),
            ),
    );
}
