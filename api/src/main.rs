use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use dw_api::{create_app, AppState};
use dw_core::EmailClaimVerifier;
use dw_infra::{MongoPropertyRepository, MongoStore, MongoUserRepository};
use dw_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );
    info!("Starting Dwello API Server ({})", config.environment);

    let store = MongoStore::connect(&config.database)
        .await
        .context("Failed to connect to the document store")?;

    let users = Arc::new(MongoUserRepository::new(&store));
    let properties = Arc::new(MongoPropertyRepository::new(&store));
    let state = web::Data::new(AppState::new(
        users,
        properties,
        Arc::new(EmailClaimVerifier),
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped, closing store connections");
    store.shutdown().await;
    Ok(())
}
