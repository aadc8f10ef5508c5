//! In-process account storage.
//!
//! Used when no `DATABASE_URL` is configured and as the backing store for
//! the test mocks. Ids come from a monotonic counter starting at 1 and are
//! never reused, even after a delete.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::domain::{Account, AccountId, AccountStorage, AppError, DatabaseError, NewAccount};

pub struct InMemoryAccountStorage {
    accounts: RwLock<BTreeMap<AccountId, Account>>,
    next_id: AtomicI64,
}

impl InMemoryAccountStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of accounts currently stored.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    /// Drops every stored account. The id counter keeps counting.
    pub async fn clear(&self) {
        self.accounts.write().await.clear();
    }
}

impl Default for InMemoryAccountStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStorage for InMemoryAccountStorage {
    #[instrument(skip(self, account))]
    async fn create_account(&self, account: &NewAccount) -> Result<Account, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let account = Account::from_new(id, account.clone());

        self.accounts.write().await.insert(id, account.clone());
        debug!(account_id = id, "Account stored in memory");

        Ok(account)
    }

    #[instrument(skip(self))]
    async fn delete_account(&self, id: AccountId) -> Result<(), AppError> {
        self.accounts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DatabaseError::NotFound(id).into())
    }

    #[instrument(skip(self))]
    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.accounts.read().await.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn get_account_by_id(&self, id: AccountId) -> Result<Account, AppError> {
        self.accounts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| DatabaseError::NotFound(id).into())
    }
}
