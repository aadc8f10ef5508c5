//! Domain traits defining contracts for external systems.

use async_trait::async_trait;

use super::error::AppError;
use super::types::{Account, AccountId, NewAccount};

/// Persistence port consumed by the account handlers.
///
/// Ids are store-assigned: `create_account` receives a [`NewAccount`] and
/// returns the persisted [`Account`] with the id the backend picked. An
/// implementation must never hand out the same id twice while it lives.
///
/// No isolation between concurrent calls is promised here; backends offer
/// whatever their store gives them.
#[async_trait]
pub trait AccountStorage: Send + Sync {
    /// Persist a new account and return it with its assigned id.
    async fn create_account(&self, account: &NewAccount) -> Result<Account, AppError>;

    /// Remove an account permanently. Fails with `NotFound` for unknown ids.
    async fn delete_account(&self, id: AccountId) -> Result<(), AppError>;

    /// Snapshot of every stored account, ordered by id.
    async fn get_accounts(&self) -> Result<Vec<Account>, AppError>;

    /// Fetch one account. Fails with `NotFound` for unknown ids.
    async fn get_account_by_id(&self, id: AccountId) -> Result<Account, AppError>;

    /// Check backend connectivity
    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
