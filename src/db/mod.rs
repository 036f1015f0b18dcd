//! Database connection provider: one lazily built pool per process.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::config::DatabaseConfig;
use crate::errors::AppError;

/// Shared handle to the datastore.
///
/// The pool is built on the first `acquire_pool` call and reused afterwards.
/// A failed build is not cached, so callers keep seeing the configuration
/// error until it is fixed.
#[derive(Debug)]
pub struct Database {
    config: DatabaseConfig,
    pool: OnceCell<PgPool>,
    admission: Arc<Semaphore>,
}

impl Database {
    pub fn new(config: DatabaseConfig) -> Self {
        let permits = config.max_connections as usize + config.queue_limit as usize;
        Self {
            admission: Arc::new(Semaphore::new(permits.max(1))),
            pool: OnceCell::new(),
            config,
        }
    }

    /// Wrap an already constructed pool, e.g. one opened by a test harness.
    pub fn from_pool(pool: PgPool, config: DatabaseConfig) -> Self {
        let db = Self::new(config);
        // A fresh cell cannot already hold a value.
        let _ = db.pool.set(pool);
        db
    }

    /// Return the process-wide pool, constructing it on first use.
    pub fn acquire_pool(&self) -> Result<&PgPool, AppError> {
        self.pool.get_or_try_init(|| {
            let options = connect_options(&self.config)?;
            tracing::info!(
                max_connections = self.config.max_connections,
                queue_limit = self.config.queue_limit,
                "Creating database pool"
            );
            Ok(PgPoolOptions::new()
                .max_connections(self.config.max_connections.max(1))
                .acquire_timeout(Duration::from_secs(self.config.acquire_timeout_secs))
                .connect_lazy_with(options))
        })
    }

    /// Reserve a slot for one request. Slots count requests, not
    /// connections: an admitted request may run its page and count queries
    /// on two pooled connections at once, and waits on the pool when it is
    /// exhausted. Fails fast once `max_connections + queue_limit` requests
    /// already hold a slot.
    pub fn admit(&self) -> Result<OwnedSemaphorePermit, AppError> {
        self.admission
            .clone()
            .try_acquire_owned()
            .map_err(|_| AppError::Overloaded)
    }

    /// Admit one request and hand back the pool it may query through.
    pub fn session(&self) -> Result<Session<'_>, AppError> {
        let pool = self.acquire_pool()?;
        let permit = self.admit()?;
        Ok(Session {
            db: self,
            pool,
            _permit: permit,
        })
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.config.query_timeout_secs)
    }
}

/// One admitted request. Every query it runs shares the single admission
/// slot, released when the session is dropped.
#[derive(Debug)]
pub struct Session<'a> {
    db: &'a Database,
    pool: &'a PgPool,
    _permit: OwnedSemaphorePermit,
}

impl Session<'_> {
    pub fn pool(&self) -> &PgPool {
        self.pool
    }

    pub fn query_timeout(&self) -> Duration {
        self.db.query_timeout()
    }
}

/// Translate settings into connection options, rejecting incomplete ones.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, AppError> {
    let options = match &config.url {
        Some(url) => PgConnectOptions::from_str(url)
            .map_err(|e| AppError::Configuration(format!("invalid DATABASE_URL: {e}")))?,
        None => {
            let host = config
                .host
                .as_deref()
                .ok_or_else(|| AppError::Configuration("DB_HOST is not set".to_string()))?;
            let database = config
                .database
                .as_deref()
                .ok_or_else(|| AppError::Configuration("DB_NAME is not set".to_string()))?;

            let mut options = PgConnectOptions::new()
                .host(host)
                .port(config.port)
                .database(database);
            if let Some(user) = &config.user {
                options = options.username(user);
            }
            if let Some(password) = &config.password {
                options = options.password(password);
            }
            options
        }
    };

    let statement_timeout_ms = config.query_timeout_secs.saturating_mul(1000).to_string();
    Ok(options.options([("statement_timeout", statement_timeout_ms)]))
}
