//! JSON response envelope.
//!
//! Success bodies are whatever the handler passes to [`write_json`]; error
//! bodies are always `{"error": "<message>"}`.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::domain::{AppError, ErrorResponse};

/// Encodes `value` as the JSON body of a response with the given status.
///
/// Nothing is produced unless encoding succeeds, so a failed call leaves
/// the caller free to answer some other way.
pub fn write_json<T>(status: StatusCode, value: &T) -> Result<Response, AppError>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_vec(value)?;
    Ok((
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}

/// Builds the 400 error envelope for a handler error.
///
/// Falls back to a bare 500 if the envelope itself cannot be encoded.
pub fn error_response(err: &AppError) -> Response {
    write_json(StatusCode::BAD_REQUEST, &ErrorResponse::new(err.to_string())).unwrap_or_else(
        |encode_err| {
            error!(error = %encode_err, "Failed to encode error envelope");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    )
}
