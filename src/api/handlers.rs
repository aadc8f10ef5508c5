//! HTTP request handlers.
//!
//! Account and transfer handlers share one shape: they take the state and
//! the raw request, write their success body through [`write_json`] and
//! return the first error they meet. [`dispatch`](super::dispatch::dispatch)
//! turns those errors into responses.

use std::sync::Arc;

use axum::{
    Json, RequestExt,
    extract::{Path, Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::app::AppState;
use crate::domain::{
    AccountId, AppError, CreateAccountRequest, DeletedResponse, HealthResponse, HealthStatus,
    TransferRequest,
};

use super::dispatch::HandlerResult;
use super::envelope::write_json;

/// `/account`: POST creates, GET lists.
pub async fn handle_account(state: Arc<AppState>, request: Request) -> HandlerResult {
    let method = request.method().clone();
    match method {
        Method::POST => handle_create_account(&state, request).await,
        Method::GET => handle_get_accounts(&state).await,
        other => Err(AppError::MethodNotAllowed(other.to_string())),
    }
}

/// `/account/{id}`: GET fetches, DELETE removes.
pub async fn handle_account_by_id(state: Arc<AppState>, mut request: Request) -> HandlerResult {
    let method = request.method().clone();
    match method {
        Method::GET => {
            let id = account_id(&mut request).await?;
            let account = state.service.get_account(id).await?;
            write_json(StatusCode::OK, &account)
        }
        Method::DELETE => handle_delete_account(&state, request).await,
        other => Err(AppError::MethodNotAllowed(other.to_string())),
    }
}

/// `/transfer/`: echoes the decoded instruction. Balances are untouched.
pub async fn handle_transfer(state: Arc<AppState>, request: Request) -> HandlerResult {
    let transfer: TransferRequest = decode_body(request).await?;
    let accepted = state.service.accept_transfer(transfer);
    write_json(StatusCode::OK, &accepted)
}

async fn handle_get_accounts(state: &AppState) -> HandlerResult {
    let accounts = state.service.list_accounts().await?;
    write_json(StatusCode::OK, &accounts)
}

async fn handle_create_account(state: &AppState, request: Request) -> HandlerResult {
    let payload: CreateAccountRequest = decode_body(request).await?;
    let account = state.service.create_account(&payload).await?;
    write_json(StatusCode::OK, &account)
}

async fn handle_delete_account(state: &AppState, mut request: Request) -> HandlerResult {
    let id = account_id(&mut request).await?;
    state.service.delete_account(id).await?;
    write_json(StatusCode::OK, &DeletedResponse { deleted: id })
}

/// Reads the `{id}` path segment as an integer.
async fn account_id(request: &mut Request) -> Result<AccountId, AppError> {
    let Path(raw) = request
        .extract_parts::<Path<String>>()
        .await
        .map_err(|rejection| AppError::InvalidId(rejection.body_text()))?;

    match raw.parse::<AccountId>() {
        Ok(id) => Ok(id),
        Err(_) => Err(AppError::InvalidId(raw)),
    }
}

/// Decodes a JSON body regardless of the declared content type.
async fn decode_body<T: DeserializeOwned>(request: Request) -> Result<T, AppError> {
    // The body limit layer bounds the read.
    let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| AppError::InvalidBody(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::InvalidBody(e.to_string()))
}

/// Detailed health check
pub async fn health_check_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(state.service.health_check().await)
}

/// Liveness probe
pub async fn liveness_handler() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe
pub async fn readiness_handler(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.service.health_check().await.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Prometheus scrape endpoint
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
