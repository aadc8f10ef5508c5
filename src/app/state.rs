//! Application state management.
//!
//! This module provides the shared application state that is
//! accessible to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::domain::AccountStorage;
use crate::infra::PrometheusHandle;

use super::service::AccountService;

/// Shared application state for the Axum web server.
///
/// The storage backend is injected at construction time; handlers only
/// ever see it through [`AccountService`].
#[derive(Clone)]
pub struct AppState {
    /// Account use cases.
    pub service: Arc<AccountService>,

    /// Prometheus handle rendered at `GET /metrics`, when installed.
    pub metrics: Option<Arc<PrometheusHandle>>,
}

impl AppState {
    /// Creates a new `AppState` wired to the given storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn AccountStorage>) -> Self {
        Self {
            service: Arc::new(AccountService::new(storage)),
            metrics: None,
        }
    }

    /// Attaches a Prometheus handle so the router exposes `/metrics`.
    #[must_use]
    pub fn with_metrics(mut self, handle: Arc<PrometheusHandle>) -> Self {
        self.metrics = Some(handle);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockAccountStorage;

    #[test]
    fn test_app_state_creation() {
        let storage = Arc::new(MockAccountStorage::new());

        let state = AppState::new(storage);

        assert!(Arc::strong_count(&state.service) >= 1);
        assert!(state.metrics.is_none());
    }

    #[test]
    fn test_app_state_is_clone() {
        let storage = Arc::new(MockAccountStorage::new());

        let state = AppState::new(storage);
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.service, &cloned.service));
    }
}
