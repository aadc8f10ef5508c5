//! Account API
//!
//! A JSON HTTP service for creating, listing, fetching and deleting bank
//! accounts, and for accepting (not applying) transfer requests.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   API Layer                  │
//! │  dispatcher, JSON envelope, handlers, routes │
//! ├─────────────────────────────────────────────┤
//! │               Application Layer              │
//! │      AccountService, shared AppState         │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │   AccountStorage trait, types, errors        │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │  PostgreSQL and in-memory storage, logging   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every account and transfer handler returns `Result<Response, AppError>`.
//! [`api::dispatch`] is the one place an error becomes a response: HTTP 400
//! with `{"error": "<message>"}`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use account_api::api::create_router;
//! use account_api::app::AppState;
//! use account_api::infra::InMemoryAccountStorage;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let storage = Arc::new(InMemoryAccountStorage::new());
//!     let state = Arc::new(AppState::new(storage));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, create_router(state)).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod infra;

// Test utilities are available in tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
