//! In-Memory Repository
//!
//! Vec-backed mirror of the PostgreSQL repository, used by tests. Keeps the
//! same insert-only semantics: duplicate locations accumulate rows and
//! lookup returns the first match.

use crate::{StorageError, WeatherRecord, WeatherStore};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory store over a record vector
#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: Mutex<Vec<WeatherRecord>>,
}

impl MemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl WeatherStore for MemoryRepository {
    async fn insert(&self, location: &str, condition: &str) -> Result<(), StorageError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;

        records.push(WeatherRecord {
            location: location.to_string(),
            condition: condition.to_string(),
        });
        Ok(())
    }

    async fn lookup(&self, location: &str) -> Result<Option<String>, StorageError> {
        let records = self
            .records
            .lock()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;

        Ok(records
            .iter()
            .find(|r| r.location == location)
            .map(|r| r.condition.clone()))
    }
}
