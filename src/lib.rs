pub mod clock;
pub mod config;
pub mod db;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use clock::{Clock, SystemClock};
use db::Database;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub config: config::AppConfig,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// State backed by the configured datastore and the system clock.
    pub fn new(config: config::AppConfig) -> Self {
        Self {
            db: Arc::new(Database::new(config.database.clone())),
            config,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
