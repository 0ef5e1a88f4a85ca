//! Storage Layer
//!
//! Provides PostgreSQL persistence for weather records with the repository
//! pattern, plus an in-memory repository for tests.

mod memory;
mod repository;

pub use memory::MemoryRepository;
pub use repository::WeatherRepository;

use async_trait::async_trait;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}

/// One recorded (location, condition) pair
#[derive(Debug, Clone)]
pub struct WeatherRecord {
    pub location: String,
    pub condition: String,
}

/// Access to the weathers relation.
///
/// `lookup` keeps value, absent and error distinct: `Ok(Some(_))` is a
/// stored condition token, `Ok(None)` means no row matched, `Err` means the
/// store itself failed. Callers must not collapse absent into error.
#[async_trait]
pub trait WeatherStore: Send + Sync {
    /// Append one record. Always an insert, never an update: repeated
    /// recordings for the same location accumulate rows. The condition
    /// token is stored as-is, without validation.
    async fn insert(&self, location: &str, condition: &str) -> Result<(), StorageError>;

    /// Fetch one condition token recorded for a location, if any.
    async fn lookup(&self, location: &str) -> Result<Option<String>, StorageError>;
}
