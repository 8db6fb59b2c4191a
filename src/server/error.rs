use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::borrow::Cow;
use thiserror::Error;
use tracing::{error, warn};

use crate::error::DataError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    DataUnavailable(String),
    #[error("{0}")]
    DataMalformed(String),
    #[error("{0}")]
    NotFound(String),
    #[error("internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DataUnavailable(_) | ApiError::DataMalformed(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn public_message(&self) -> Cow<'_, str> {
        match self {
            ApiError::DataUnavailable(msg)
            | ApiError::DataMalformed(msg)
            | ApiError::NotFound(msg) => Cow::Borrowed(msg),
            ApiError::Internal(_) => Cow::Borrowed("Internal server error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(status = %status, error = %self, "api_error");
        } else {
            warn!(status = %status, error = %self, "api_error");
        }

        let body = Json(ErrorResponse {
            error: self.public_message().into_owned(),
        });

        (status, body).into_response()
    }
}

impl From<DataError> for ApiError {
    fn from(value: DataError) -> Self {
        match value {
            DataError::Unavailable(msg) => ApiError::DataUnavailable(msg),
            DataError::Malformed(msg) => ApiError::DataMalformed(msg),
            DataError::NotFound(msg) => ApiError::NotFound(msg),
        }
    }
}
