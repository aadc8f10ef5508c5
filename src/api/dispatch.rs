//! The single place where handler errors become HTTP responses.
//!
//! Handlers never write error responses themselves. They return
//! `Err(AppError)` and [`dispatch`] renders it with the 400 error envelope.
//! No error kind is treated differently from another.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
    routing::{MethodRouter, any},
};
use metrics::counter;
use tracing::warn;

use crate::app::AppState;
use crate::domain::AppError;

use super::envelope::error_response;

/// What every account/transfer handler returns.
pub type HandlerResult = Result<Response, AppError>;

/// Wraps a handler so it answers every HTTP method on its route.
///
/// Method selection is left to the handler, which lets an unsupported
/// method surface as a normal handler error rather than a routing 405.
pub fn dispatch<F, Fut>(handler: F) -> MethodRouter<Arc<AppState>>
where
    F: Fn(Arc<AppState>, Request) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    any(
        move |State(state): State<Arc<AppState>>, request: Request| async move {
            finish(handler(state, request).await)
        },
    )
}

fn finish(result: HandlerResult) -> Response {
    match result {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, kind = err.kind(), "Request failed");
            counter!("api_handler_errors_total", "kind" => err.kind()).increment(1);
            err.into_response()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}
