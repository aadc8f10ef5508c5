//! Domain layer containing core business types, traits, and error definitions.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{AppError, ConfigError, DatabaseError, ValidationError};
pub use traits::AccountStorage;
pub use types::{
    ACCOUNT_NUMBER_RANGE, Account, AccountId, CreateAccountRequest, DeletedResponse,
    ErrorResponse, HealthResponse, HealthStatus, NewAccount, TransferRequest,
};
