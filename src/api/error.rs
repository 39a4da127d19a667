//! API error mapping
//!
//! Translates service errors into HTTP responses at the boundary: a status
//! code plus a plain-text body equal to the failure message. Every
//! translated error is logged at warning level.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::services::{CategoryServiceError, PostServiceError};

/// An HTTP-facing error: status code + plain-text message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(status = self.status.as_u16(), "{}", self.message);
        (self.status, self.message).into_response()
    }
}

impl From<CategoryServiceError> for ApiError {
    fn from(err: CategoryServiceError) -> Self {
        match err {
            CategoryServiceError::NotFound(_) => Self::not_found(err.to_string()),
            CategoryServiceError::NameAlreadyExists(_) => Self::bad_request(err.to_string()),
            CategoryServiceError::Internal(_) => Self::internal(err.to_string()),
        }
    }
}

impl From<PostServiceError> for ApiError {
    fn from(err: PostServiceError) -> Self {
        match err {
            PostServiceError::NotFound(_) | PostServiceError::CategoryNotFound(_) => {
                Self::not_found(err.to_string())
            }
            PostServiceError::Internal(_) => Self::internal(err.to_string()),
        }
    }
}
