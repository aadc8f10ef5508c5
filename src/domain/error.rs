//! Application error types with proper error chaining.

use thiserror::Error;

use super::types::AccountId;

#[derive(Error, Debug, Clone)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Query execution failed: {0}")]
    Query(String),
    #[error("account not found: {0}")]
    NotFound(AccountId),
    #[error("Duplicate record: {0}")]
    Duplicate(String),
    #[error("Pool exhausted: {0}")]
    PoolExhausted(String),
    #[error("Migration failed: {0}")]
    Migration(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("validation failed: {0}")]
    Multiple(String),
}

/// Every failure a handler can return.
///
/// The dispatcher renders all of these the same way, so the variants only
/// exist to keep construction sites and logs precise.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("invalid id given {0}")]
    InvalidId(String),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Short, stable label used for logs and metrics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Database(DatabaseError::NotFound(_)) => "not_found",
            AppError::Database(_) => "storage",
            AppError::Validation(_) | AppError::InvalidBody(_) => "bad_body",
            AppError::MethodNotAllowed(_) => "bad_method",
            AppError::InvalidId(_) => "bad_path_parameter",
            AppError::Serialization(_) => "serialization",
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(ValidationError::Multiple(err.to_string()))
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DatabaseError::Query("Row not found".to_string()),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted("Pool timed out".to_string()),
            sqlx::Error::Io(io_err) => DatabaseError::Connection(io_err.to_string()),
            sqlx::Error::Database(db_err) => {
                if db_err.code().is_some_and(|code| code == "23505") {
                    return DatabaseError::Duplicate(db_err.message().to_string());
                }
                DatabaseError::Query(db_err.message().to_string())
            }
            _ => DatabaseError::Query(err.to_string()),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(DatabaseError::from(err))
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Database(DatabaseError::Migration(err.to_string()))
    }
}
