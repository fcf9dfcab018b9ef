//! Application error type and its HTTP translation.
//!
//! Every failure leaving a handler is an [`AppError`]. Its `message` is one of
//! the fixed, non-leaking strings below; `detail` carries the underlying
//! diagnostic (validation rule, store message) for debugging.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::repositories::RepositoryError;

pub const WRONG_ID_FORMAT_MSG: &str = "Please provide id in the correct format";
pub const WRONG_NAME_FORMAT_MSG: &str = "Please provide name within 20 alphabetical characters";
pub const ID_NOT_FOUND_MSG: &str = "The inputted id does not exist";
pub const USERS_UNAVAILABLE_MSG: &str = "Users information unavailable";
pub const INTERNAL_SERVER_ERROR_MSG: &str = "Please contact the administrator for further assistance";

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or out-of-constraint input; never reaches persistence.
    #[error("{message}: {detail}")]
    Validation {
        message: &'static str,
        detail: String,
    },

    /// The addressed resource does not exist.
    #[error("{message}: {detail}")]
    NotFound {
        message: &'static str,
        detail: String,
    },

    /// Store connectivity or any unexpected failure.
    #[error("{message}: {detail}")]
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl AppError {
    pub fn bad_id(detail: impl Into<String>) -> Self {
        Self::Validation {
            message: WRONG_ID_FORMAT_MSG,
            detail: detail.into(),
        }
    }

    pub fn bad_name(detail: impl Into<String>) -> Self {
        Self::Validation {
            message: WRONG_NAME_FORMAT_MSG,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            message: ID_NOT_FOUND_MSG,
            detail: detail.into(),
        }
    }

    /// The list endpoint found no users at all.
    pub fn users_unavailable() -> Self {
        Self::NotFound {
            message: USERS_UNAVAILABLE_MSG,
            detail: "no users stored".to_string(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            message: INTERNAL_SERVER_ERROR_MSG,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        let (message, detail) = match self {
            AppError::Validation { message, detail }
            | AppError::NotFound { message, detail }
            | AppError::Internal { message, detail } => (*message, detail.clone()),
        };

        ErrorBody {
            message,
            error: detail,
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Internal { detail } => AppError::internal(detail),
            not_found @ RepositoryError::NotFound => AppError::not_found(not_found.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Internal { detail, .. } => {
                tracing::error!(error = %detail, "Request failed with internal error");
            }
            _ => tracing::debug!(status = %status, error = %self, "Request rejected"),
        }

        (status, Json(self.to_error_body())).into_response()
    }
}
