//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database,
    domain::{
        products::{MongoProductsService, ProductsService},
        tasks::{MongoTasksService, TasksService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] mongodb::error::Error),
}

/// Services handed to every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub tasks: Arc<dyn TasksService>,
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        fallback_database: &str,
    ) -> Result<Self, AppInitError> {
        let db = database::connect(url, fallback_database)
            .await
            .map_err(AppInitError::Database)?;

        info!(database = db.name(), "connected to database");

        Ok(Self {
            tasks: Arc::new(MongoTasksService::new(&db)),
            products: Arc::new(MongoProductsService::new(&db)),
        })
    }
}
