//! Application service layer.
//!
//! Sits between the HTTP handlers and the storage port. Every method makes
//! at most one storage call and hands back the first error it meets.

use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::{
    Account, AccountId, AccountStorage, AppError, CreateAccountRequest, HealthResponse,
    HealthStatus, NewAccount, TransferRequest,
};

/// Account use cases, backed by an injected [`AccountStorage`].
///
/// # Example
///
/// ```ignore
/// let storage = Arc::new(InMemoryAccountStorage::new());
/// let service = AccountService::new(storage);
///
/// let account = service.create_account(&request).await?;
/// ```
pub struct AccountService {
    storage: Arc<dyn AccountStorage>,
}

impl AccountService {
    #[must_use]
    pub fn new(storage: Arc<dyn AccountStorage>) -> Self {
        Self { storage }
    }

    /// Validates the request, builds the record and persists it.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if:
    /// - either name is empty
    /// - the storage backend rejects the insert
    #[instrument(skip(self, request), fields(last_name = %request.last_name))]
    pub async fn create_account(&self, request: &CreateAccountRequest) -> Result<Account, AppError> {
        request.validate().map_err(|e| {
            warn!(error = %e, "Validation failed for create account request");
            AppError::from(e)
        })?;

        let new_account = NewAccount::from(request);
        let account = self.storage.create_account(&new_account).await?;
        info!(account_id = account.id, number = account.number, "Account created");

        Ok(account)
    }

    #[instrument(skip(self))]
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        self.storage.get_accounts().await
    }

    #[instrument(skip(self))]
    pub async fn get_account(&self, id: AccountId) -> Result<Account, AppError> {
        self.storage.get_account_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete_account(&self, id: AccountId) -> Result<(), AppError> {
        self.storage.delete_account(id).await?;
        info!(account_id = id, "Account deleted");
        Ok(())
    }

    /// Accepts a transfer instruction and returns it unchanged.
    ///
    /// Balances are not touched and the target account is not looked up.
    #[instrument(skip(self))]
    pub fn accept_transfer(&self, request: TransferRequest) -> TransferRequest {
        info!(
            to_account = request.to_account,
            amount = request.amount,
            "Transfer request accepted"
        );
        request
    }

    /// Reports the storage backend's health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> HealthResponse {
        let storage_health = match self.storage.health_check().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => {
                warn!(error = ?e, "Storage health check failed");
                HealthStatus::Unhealthy
            }
        };

        HealthResponse::new(storage_health)
    }
}
