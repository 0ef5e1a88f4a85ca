//! PostgreSQL Repository

use crate::{StorageError, WeatherStore};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info};

/// Repository over a PostgreSQL connection pool.
///
/// The pool is the only resource shared between concurrent requests; it is
/// safe for concurrent use by delegation to sqlx.
pub struct WeatherRepository {
    pool: PgPool,
}

impl WeatherRepository {
    /// Connect to the database and build a pool.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        info!("Connecting to PostgreSQL");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Close the pool. Called once at shutdown.
    pub async fn close(&self) {
        info!("Closing PostgreSQL pool");
        self.pool.close().await;
    }
}

#[async_trait]
impl WeatherStore for WeatherRepository {
    async fn insert(&self, location: &str, condition: &str) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO weathers (location, condition) VALUES ($1, $2)")
            .bind(location)
            .bind(condition)
            .execute(&self.pool)
            .await?;

        debug!(location, condition, "inserted weather record");
        Ok(())
    }

    // No ORDER BY: when duplicate rows exist for a location, which one is
    // returned is storage-defined.
    async fn lookup(&self, location: &str) -> Result<Option<String>, StorageError> {
        let condition: Option<String> =
            sqlx::query_scalar("SELECT condition FROM weathers WHERE location = $1 LIMIT 1")
                .bind(location)
                .fetch_optional(&self.pool)
                .await?;

        Ok(condition)
    }
}
