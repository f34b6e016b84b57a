//! Request error taxonomy and HTTP status mapping.
//!
//! Pipeline stages return typed errors; conversion to an HTTP response
//! happens only here, at the boundary. Every failure is logged with
//! context before it is serialised into the `{"error": <message>}` body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use morpho_ai::PreprocessError;
use morpho_store::StoreError;

/// Request-scoped failure, tagged by pipeline stage.
#[derive(Debug)]
pub enum ApiError {
    /// No usable `file` field in the request → 400.
    MissingInput(&'static str),
    /// The upload could not be decoded as an image → 400.
    Decode(String),
    /// The model invocation failed → 500.
    Inference(String),
    /// The upload could not be persisted → 500.
    Storage(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<PreprocessError> for ApiError {
    fn from(e: PreprocessError) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            // An empty payload is a client mistake, same as no selection.
            StoreError::EmptyUpload(_) => ApiError::MissingInput("No selected file"),
            other => ApiError::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingInput(msg) => {
                warn!(error = msg, "rejected request");
                (StatusCode::BAD_REQUEST, msg.to_string())
            }
            ApiError::Decode(msg) => {
                warn!(error = %msg, "undecodable upload");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Inference(msg) => {
                error!(error = %msg, "inference failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Storage(msg) => {
                error!(error = %msg, "upload persistence failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
