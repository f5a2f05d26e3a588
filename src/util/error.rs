use axum::{response::{IntoResponse, Response}, http::StatusCode, Json};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
pub enum HandlerErrorKind {
    Validation,
    BadRequest,
    Internal,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::BadRequest => "BadRequest",
            HandlerErrorKind::Internal => "Internal",
        };
        write!(f, "{}", s)
    }
}

/// Failure returned by every API handler. Rendered as
/// `{"success": false, "error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct HandlerError {
    pub error: HandlerErrorKind,
    pub message: String,
}

impl HandlerError {
    pub fn bad_request<T: Into<String>>(msg: T) -> Self {
        HandlerError { error: HandlerErrorKind::BadRequest, message: msg.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            HandlerErrorKind::Validation | HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }
        let body = Json(json!({
            "success": false,
            "error": self.message,
        }));
        (status, body).into_response()
    }
}

impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        let error = match err {
            ServiceError::Validation(_) => HandlerErrorKind::Validation,
            ServiceError::Storage(_) => HandlerErrorKind::Internal,
        };
        HandlerError { error, message: err.to_string() }
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// A required field is absent or malformed; raised before any write.
    Validation(String),
    /// The store could not be reached or the write failed.
    Storage(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            ServiceError::Storage(msg) => write!(f, "Storage Error: {}", msg),
        }
    }
}
impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// Allow conversion from RepositoryError to ServiceError
impl From<crate::repository::repository_error::RepositoryError> for ServiceError {
    fn from(err: crate::repository::repository_error::RepositoryError) -> Self {
        use crate::repository::repository_error::RepositoryError;
        match err {
            RepositoryError::ValidationError(msg) => ServiceError::Validation(msg),
            RepositoryError::AlreadyExists(msg) => ServiceError::Storage(msg),
            RepositoryError::DatabaseError(msg) => ServiceError::Storage(msg),
            RepositoryError::ConnectionError(msg) => ServiceError::Storage(msg),
            RepositoryError::SerializationError(msg) => ServiceError::Storage(msg),
            RepositoryError::Generic(e) => ServiceError::Storage(e.to_string()),
        }
    }
}
