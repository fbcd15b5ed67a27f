//! Application factory
//!
//! Builds the actix-web [`App`] from shared state and configuration. The
//! binary and the integration tests use the same factory.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Condition, Logger},
    web, App, Error,
};

use dw_core::{PropertyRepository, UserRepository};
use dw_shared::AppConfig;

use crate::handlers::{api_index, health_check, json_config, not_found, path_config, query_config};
use crate::middleware::{create_cors, RequestIdMiddleware};
use crate::routes;
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, P>(
    state: web::Data<AppState<U, P>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    App::new()
        .app_data(state)
        .app_data(json_config(config.server.max_payload_size))
        .app_data(query_config())
        .app_data(path_config())
        .wrap(Condition::new(
            config.logging.access_log,
            Logger::new(r#"%a "%r" %s %b %Dms request_id=%{x-request-id}i"#),
        ))
        .wrap(create_cors(&config.cors))
        // Outermost, so the id exists before logging and routing
        .wrap(RequestIdMiddleware)
        .route("/health", web::get().to(health_check))
        .route("/api", web::get().to(api_index))
        .configure(routes::users::configure::<U, P>)
        .configure(routes::properties::configure::<U, P>)
        .default_service(web::route().to(not_found))
}
