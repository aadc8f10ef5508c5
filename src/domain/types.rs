use chrono::{DateTime, SubsecRound, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identifier assigned to an account by the storage backend.
pub type AccountId = i64;

/// Upper bound (exclusive) for generated account numbers.
pub const ACCOUNT_NUMBER_RANGE: i64 = 1_000_000;

/// A persisted bank account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Attaches a store-assigned id to a constructed record.
    #[must_use]
    pub fn from_new(id: AccountId, new: NewAccount) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            number: new.number,
            balance: new.balance,
            created_at: new.created_at,
        }
    }
}

/// An account built by the create handler but not yet persisted.
///
/// Ids are store-assigned: the storage port turns this into an [`Account`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// Zero balance, a random account number and the current time at
    /// microsecond precision, the finest a `TIMESTAMPTZ` column keeps.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: rand::thread_rng().gen_range(0..ACCOUNT_NUMBER_RANGE),
            balance: 0,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}

/// Request payload for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: String,
}

impl CreateAccountRequest {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl From<&CreateAccountRequest> for NewAccount {
    fn from(request: &CreateAccountRequest) -> Self {
        NewAccount::new(&request.first_name, &request.last_name)
    }
}

/// Transfer instruction. Accepted and echoed, never applied to balances.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub to_account: AccountId,
    pub amount: i64,
}

/// Body written after a successful delete.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedResponse {
    pub deleted: AccountId,
}

/// The uniform error body: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Health check status for services.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health check response for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub storage: HealthStatus,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn new(storage: HealthStatus) -> Self {
        Self {
            status: storage,
            storage,
            timestamp: Utc::now(),
        }
    }
}
