//! Typed errors and HTTP mapping.

use crate::response::EmptyResponse;
use crate::service_status::ServiceStatus;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("unknown http status code: {0}")]
    UnknownHttpStatus(u16),
    #[error("unknown service status: {0}")]
    UnknownServiceStatus(String),
}

/// Domain-level failure carrying a [`ServiceStatus`]. Handlers return it with `?`;
/// it renders as an envelope with the matching HTTP status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{status}: {message}")]
pub struct ServiceError {
    pub status: ServiceStatus,
    pub message: String,
}

impl ServiceError {
    pub fn new(status: ServiceStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ServiceStatus::ValidationError, message)
    }

    pub fn processing(message: impl Into<String>) -> Self {
        Self::new(ServiceStatus::ProcessingError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ServiceStatus::DataNotFound, message)
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::new(ServiceStatus::DuplicateEntry, message)
    }

    pub fn insufficient_permissions(message: impl Into<String>) -> Self {
        Self::new(ServiceStatus::InsufficientPermissions, message)
    }

    pub fn locked(message: impl Into<String>) -> Self {
        Self::new(ServiceStatus::ResourceLocked, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ServiceStatus::ConfigurationError, message)
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::new(ServiceStatus::ExternalServiceError, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ServiceStatus::TimeoutError, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ServiceStatus::UnknownError, message)
    }

    pub fn error_code(&self) -> &'static str {
        self.status.error_code()
    }
}

impl From<ServiceError> for EmptyResponse {
    fn from(err: ServiceError) -> Self {
        EmptyResponse::from_service_status(err.status, err.message)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let http = self.status.http_status();
        if http.code() >= 500 {
            tracing::error!(code = self.error_code(), status = http.code(), "{}", self.message);
        } else {
            tracing::debug!(code = self.error_code(), status = http.code(), "{}", self.message);
        }
        EmptyResponse::from(self).into_response()
    }
}
