//! Mock implementations for testing.
//!
//! The mock keeps the in-memory storage semantics and layers configurable
//! failures, call counting and a health switch on top.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use crate::domain::{Account, AccountId, AccountStorage, AppError, DatabaseError, NewAccount};
use crate::infra::InMemoryAccountStorage;

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// If true, operations will fail.
    pub should_fail: bool,
    /// Custom error message for failures.
    pub error_message: Option<String>,
    /// Simulated latency in milliseconds.
    pub latency_ms: Option<u64>,
}

impl MockConfig {
    /// Creates a config that always succeeds.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Creates a config that always fails.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            error_message: Some(message.into()),
            latency_ms: None,
        }
    }

    /// Adds simulated latency.
    #[must_use]
    pub fn with_latency(mut self, ms: u64) -> Self {
        self.latency_ms = Some(ms);
        self
    }
}

/// Mock account storage for testing.
///
/// # Example
///
/// ```ignore
/// use account_api::test_utils::{MockAccountStorage, mocks::MockConfig};
///
/// // Create a mock that succeeds
/// let mock = MockAccountStorage::new();
///
/// // Create a mock that fails
/// let failing_mock = MockAccountStorage::with_config(MockConfig::failure("DB error"));
/// ```
pub struct MockAccountStorage {
    inner: InMemoryAccountStorage,
    config: MockConfig,
    call_count: AtomicU64,
    is_healthy: AtomicBool,
}

impl MockAccountStorage {
    /// Creates a new mock with default (success) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    /// Creates a new mock with the given configuration.
    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            inner: InMemoryAccountStorage::new(),
            config,
            call_count: AtomicU64::new(0),
            is_healthy: AtomicBool::new(true),
        }
    }

    /// Creates a mock that always fails.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig::failure(message))
    }

    /// Gets the number of times any port method was called.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Sets the health status.
    pub fn set_healthy(&self, healthy: bool) {
        self.is_healthy.store(healthy, Ordering::Relaxed);
    }

    /// Gets all stored accounts without counting a call.
    pub async fn get_all_accounts(&self) -> Vec<Account> {
        self.inner.get_accounts().await.unwrap_or_default()
    }

    /// Clears all stored accounts.
    pub async fn clear(&self) {
        self.inner.clear().await;
    }

    async fn before_call(&self) -> Result<(), AppError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if let Some(ms) = self.config.latency_ms {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }

        if self.config.should_fail {
            let msg = self
                .config
                .error_message
                .clone()
                .unwrap_or_else(|| "Mock database error".to_string());
            return Err(AppError::Database(DatabaseError::Query(msg)));
        }
        Ok(())
    }
}

impl Default for MockAccountStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStorage for MockAccountStorage {
    async fn create_account(&self, account: &NewAccount) -> Result<Account, AppError> {
        self.before_call().await?;
        self.inner.create_account(account).await
    }

    async fn delete_account(&self, id: AccountId) -> Result<(), AppError> {
        self.before_call().await?;
        self.inner.delete_account(id).await
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        self.before_call().await?;
        self.inner.get_accounts().await
    }

    async fn get_account_by_id(&self, id: AccountId) -> Result<Account, AppError> {
        self.before_call().await?;
        self.inner.get_account_by_id(id).await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        if !self.is_healthy.load(Ordering::Relaxed) {
            return Err(AppError::Database(DatabaseError::Connection(
                "Mock database unhealthy".to_string(),
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_create_and_get() {
        let mock = MockAccountStorage::new();

        let created = mock
            .create_account(&NewAccount::new("Jim", "Smith"))
            .await
            .unwrap();
        assert_eq!(created.first_name, "Jim");

        let fetched = mock.get_account_by_id(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let mock = MockAccountStorage::failing("Connection timeout");

        let result = mock.create_account(&NewAccount::new("Jim", "Smith")).await;
        assert!(result.is_err());
        assert!(mock.get_all_accounts().await.is_empty());
    }

    #[tokio::test]
    async fn test_mock_call_count() {
        let mock = MockAccountStorage::new();
        assert_eq!(mock.call_count(), 0);

        let _ = mock.get_accounts().await;
        assert_eq!(mock.call_count(), 1);

        let _ = mock.get_account_by_id(1).await;
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_health_check() {
        let mock = MockAccountStorage::new();
        assert!(mock.health_check().await.is_ok());

        mock.set_healthy(false);
        assert!(mock.health_check().await.is_err());
    }

    #[tokio::test]
    async fn test_mock_latency() {
        let mock = MockAccountStorage::with_config(MockConfig::success().with_latency(5));
        let start = std::time::Instant::now();

        mock.get_accounts().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
