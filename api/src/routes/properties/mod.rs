//! Property route handlers

pub mod discovery;
pub mod likes;
pub mod manage;
pub mod rent;

use actix_web::web;

use dw_core::{PropertyRepository, UserRepository};

/// Mount `/api/properties`
///
/// `liked-properties`, `search` and `homescreen` are registered before
/// `/{id}`.
pub fn configure<U, P>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    cfg.service(
        web::scope("/api/properties")
            .route("", web::post().to(manage::create_property::<U, P>))
            .route(
                "/liked-properties",
                web::get().to(discovery::liked_properties::<U, P>),
            )
            .route("/search", web::get().to(discovery::search::<U, P>))
            .route("/homescreen", web::get().to(discovery::homescreen::<U, P>))
            .route("/{id}", web::get().to(manage::get_property::<U, P>))
            .route("/{id}", web::put().to(manage::update_property::<U, P>))
            .route("/{id}", web::delete().to(manage::delete_property::<U, P>))
            .route("/{id}/like", web::post().to(likes::like::<U, P>))
            .route("/{id}/unlike", web::post().to(likes::unlike::<U, P>))
            .route("/{id}/rent", web::post().to(rent::request_rental::<U, P>)),
    );
}
