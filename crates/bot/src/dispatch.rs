//! Command Dispatch

use crate::{replies, Command, Condition};
use storage::WeatherStore;
use tracing::error;

/// Handle one text message and produce the reply text.
///
/// Store faults are logged here and surfaced to the user only as the
/// generic error sentence. A failed lookup is never reported as "not
/// recorded yet": absent and error stay distinct.
pub async fn dispatch<S: WeatherStore>(store: &S, text: &str) -> String {
    match Command::parse(text) {
        Command::Record {
            location,
            condition,
        } => match store.insert(location, condition).await {
            Ok(()) => replies::RECORDED.to_string(),
            Err(err) => {
                error!(%err, location, "weather insert failed");
                replies::GENERIC_ERROR.to_string()
            }
        },
        Command::RecordUsage => replies::RECORD_USAGE.to_string(),
        Command::Report { location } => match store.lookup(location).await {
            Ok(Some(token)) => match Condition::from_token(&token) {
                Some(condition) => replies::weather_report(location, condition),
                None => {
                    error!(location, token = %token, "unknown condition token in store");
                    replies::GENERIC_ERROR.to_string()
                }
            },
            Ok(None) => replies::not_recorded(location),
            Err(err) => {
                error!(%err, location, "weather lookup failed");
                replies::GENERIC_ERROR.to_string()
            }
        },
        Command::ReportUsage => replies::REPORT_USAGE.to_string(),
        Command::Plain(text) => replies::greeting(text)
            .unwrap_or(replies::UNRECOGNIZED)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use storage::{MemoryRepository, StorageError};

    /// Store double that fails every operation, like a dropped connection
    struct FailingStore;

    #[async_trait]
    impl WeatherStore for FailingStore {
        async fn insert(&self, _location: &str, _condition: &str) -> Result<(), StorageError> {
            Err(StorageError::Database("connection refused".to_string()))
        }

        async fn lookup(&self, _location: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Database("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_record_inserts_and_confirms() {
        let store = MemoryRepository::new();

        let reply = dispatch(&store, "天気記録 東京 clear").await;

        assert_eq!(reply, replies::RECORDED);
        assert_eq!(
            store.lookup("東京").await.unwrap(),
            Some("clear".to_string())
        );
    }

    #[tokio::test]
    async fn test_record_wrong_arity_skips_store() {
        let store = MemoryRepository::new();

        let reply = dispatch(&store, "天気記録 東京").await;

        assert_eq!(reply, replies::RECORD_USAGE);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_double_space_changes_arity() {
        let store = MemoryRepository::new();

        let reply = dispatch(&store, "天気記録  東京 clear").await;

        assert_eq!(reply, replies::RECORD_USAGE);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_report_round_trip() {
        let store = MemoryRepository::new();

        dispatch(&store, "天気記録 大阪 rain").await;
        let reply = dispatch(&store, "天気教えて 大阪").await;

        assert_eq!(reply, "大阪の天気は雨です！");
    }

    #[tokio::test]
    async fn test_report_unknown_location_is_not_recorded() {
        let store = MemoryRepository::new();

        let reply = dispatch(&store, "天気教えて 札幌").await;

        assert_eq!(reply, replies::not_recorded("札幌"));
    }

    #[tokio::test]
    async fn test_report_wrong_arity_skips_store() {
        let store = MemoryRepository::new();

        let reply = dispatch(&store, "天気教えて").await;

        assert_eq!(reply, replies::REPORT_USAGE);
    }

    #[tokio::test]
    async fn test_report_invalid_stored_token_is_error() {
        let store = MemoryRepository::new();

        // writes are unvalidated, so this lands in the store as-is
        dispatch(&store, "天気記録 東京 drizzle").await;
        let reply = dispatch(&store, "天気教えて 東京").await;

        assert_eq!(reply, replies::GENERIC_ERROR);
    }

    #[tokio::test]
    async fn test_insert_fault_is_generic_error() {
        let reply = dispatch(&FailingStore, "天気記録 東京 clear").await;

        assert_eq!(reply, replies::GENERIC_ERROR);
    }

    #[tokio::test]
    async fn test_lookup_fault_is_error_not_not_recorded() {
        let reply = dispatch(&FailingStore, "天気教えて 東京").await;

        assert_eq!(reply, replies::GENERIC_ERROR);
        assert_ne!(reply, replies::not_recorded("東京"));
    }

    #[tokio::test]
    async fn test_greetings_and_fallback() {
        let store = MemoryRepository::new();

        assert_eq!(dispatch(&store, "おはようございます").await, "Good morning!");
        assert_eq!(dispatch(&store, "こんにちは").await, "Good afternoon!");
        assert_eq!(dispatch(&store, "こんばんは").await, "Good evening!");
        assert_eq!(dispatch(&store, "やあ").await, replies::UNRECOGNIZED);
    }

    #[tokio::test]
    async fn test_concurrent_records_are_independent() {
        let store = Arc::new(MemoryRepository::new());

        let tokyo = tokio::spawn({
            let store = store.clone();
            async move { dispatch(&*store, "天気記録 東京 clear").await }
        });
        let osaka = tokio::spawn({
            let store = store.clone();
            async move { dispatch(&*store, "天気記録 大阪 snow").await }
        });

        assert_eq!(tokyo.await.unwrap(), replies::RECORDED);
        assert_eq!(osaka.await.unwrap(), replies::RECORDED);

        assert_eq!(
            dispatch(&*store, "天気教えて 東京").await,
            "東京の天気は晴れです！"
        );
        assert_eq!(
            dispatch(&*store, "天気教えて 大阪").await,
            "大阪の天気は雪です！"
        );
    }
}
