//! Concrete storage implementations.
//!
//! Both adapters implement the `AccountStorage` trait defined in the
//! domain layer.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAccountStorage;
pub use postgres::{PostgresClient, PostgresConfig};
