//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use phishguard_core::PredictError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing 'url' in request body")]
    MissingUrl,

    #[error("Missing 'url' parameter")]
    MissingUrlParam,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Prediction failed: {0}")]
    Predict(#[from] PredictError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl
            | ApiError::MissingUrlParam
            | ApiError::InvalidRequest(_)
            | ApiError::InvalidThreshold(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Predict(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::debug!("rejected request: {self}");
        }
        let body = json!({ "error": self.to_string(), "status": "error" });
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
