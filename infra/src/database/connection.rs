//! Document store connection management
//!
//! A single [`MongoStore`] is created at startup and handed to the
//! repositories. The driver pools connections internally, so cloning the
//! store is cheap and every clone shares the same pool.

use std::time::Duration;

use bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use dw_shared::DatabaseConfig;

use super::documents::{PropertyDocument, UserDocument};
use super::{PROPERTIES_COLLECTION, USERS_COLLECTION};
use crate::InfrastructureError;

/// MongoDB client plus the application database handle
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    database: Database,
    operation_timeout: Duration,
}

impl MongoStore {
    /// Connect and verify the server answers a ping
    ///
    /// # Example
    /// ```no_run
    /// use dw_infra::MongoStore;
    /// use dw_shared::DatabaseConfig;
    ///
    /// async fn connect() -> Result<MongoStore, Box<dyn std::error::Error>> {
    ///     let config = DatabaseConfig::new("mongodb://localhost:27017/", "dwello");
    ///     Ok(MongoStore::connect(&config).await?)
    /// }
    /// ```
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            database = %config.name,
            max_pool_size = config.max_pool_size,
            "Connecting to document store"
        );

        let mut options = ClientOptions::parse(&config.url).await.map_err(|e| {
            tracing::error!("Invalid database URL: {}", e);
            InfrastructureError::Config(format!("Invalid database URL: {}", e))
        })?;
        options.app_name = Some(config.app_name.clone());
        options.connect_timeout = Some(config.connect_timeout());
        options.server_selection_timeout = Some(config.connect_timeout());
        options.max_pool_size = Some(config.max_pool_size);

        let client = Client::with_options(options)?;
        let store = Self {
            database: client.database(&config.name),
            client,
            operation_timeout: config.operation_timeout(),
        };

        if !store.health_check().await? {
            return Err(InfrastructureError::Config(
                "Database ping returned an unexpected reply".to_string(),
            ));
        }

        tracing::info!("Document store connection established");
        Ok(store)
    }

    pub fn users(&self) -> Collection<UserDocument> {
        self.database.collection(USERS_COLLECTION)
    }

    pub fn properties(&self) -> Collection<PropertyDocument> {
        self.database.collection(PROPERTIES_COLLECTION)
    }

    /// Upper bound for every single store operation
    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// Ping the server
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        tracing::debug!("Performing database health check");

        let reply = tokio::time::timeout(
            self.operation_timeout,
            self.database.run_command(doc! { "ping": 1 }, None),
        )
        .await
        .map_err(|_| InfrastructureError::Timeout(self.operation_timeout.as_secs()))?
        .map_err(|e| {
            tracing::error!("Database health check failed: {}", e);
            InfrastructureError::Database(e)
        })?;

        let ok = match reply.get("ok") {
            Some(bson::Bson::Double(v)) => *v == 1.0,
            Some(bson::Bson::Int32(v)) => *v == 1,
            Some(bson::Bson::Int64(v)) => *v == 1,
            _ => false,
        };
        if !ok {
            tracing::warn!("Database health check returned unexpected reply: {}", reply);
        }
        Ok(ok)
    }

    /// Close the client during application shutdown
    pub async fn shutdown(self) {
        tracing::info!("Closing document store connection");
        self.client.shutdown().await;
        tracing::info!("Document store connection closed");
    }
}
